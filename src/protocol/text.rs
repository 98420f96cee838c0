//! # DPL Text Field Records
//!
//! This module encodes positioned text fields for label-formatting mode.
//!
//! ## Record Layout
//!
//! A text field record is a fixed-width header followed by the field data:
//!
//! | Field | Width | Content |
//! |-------|-------|---------|
//! | rotation | 1 | '1'–'4' for 0/90/180/270 degrees |
//! | font | 1 | font identifier, '0'–'9' |
//! | width multiplier | 1 | horizontal magnification |
//! | height multiplier | 1 | vertical magnification |
//! | size | 3 | `A` + 2-digit code (font 9) or literal `000` |
//! | row | 4 | y position, zero-padded |
//! | column | 4 | x position, zero-padded |
//! | data | n | field text, CR-terminated |
//!
//! Font 9 is the scalable (CG Triumvirate) font: it takes a two-digit point
//! size code after `A` and ignores the width/height multipliers. Bitmapped
//! fonts 0–8 take literal `000` for the size and scale via the multipliers.

use super::commands::{CR, zpad};

/// Font identifier of the scalable font, which is sized by a magnification
/// code rather than width/height multipliers.
pub const SCALABLE_FONT: u8 = 9;

/// Size specification for a text field.
///
/// DPL sizes text two different ways depending on the font: the scalable
/// font takes a single two-digit magnification code, bitmapped fonts take a
/// width/height multiplier pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// Two-digit point size code for the scalable font (font 9)
    Magnification(u8),
    /// Width/height multiplier pair for bitmapped fonts (fonts 0-8)
    Multipliers(u8, u8),
}

/// A positioned, rotated text element on the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelField {
    /// Column position, 0-9999
    pub x: u16,
    /// Row position, 0-9999
    pub y: u16,
    /// Field text (CP866-encodable)
    pub text: String,
    /// Font identifier, 0-9
    pub font: u8,
    /// Size specification (see [`FontSize`])
    pub size: FontSize,
    /// Rotation in degrees; values outside {0, 90, 180, 270} fall back to 0
    pub rotation: u16,
}

impl LabelField {
    /// Create a field at `(x, y)` with the default rotation of 0 degrees.
    pub fn new(x: u16, y: u16, text: impl Into<String>, font: u8, size: FontSize) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font,
            size,
            rotation: 0,
        }
    }

    /// Set the rotation in degrees.
    pub fn rotation(mut self, degrees: u16) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Map a rotation in degrees to its single-character record code.
///
/// The mapping is total: unrecognized values fall back to '1' (no rotation).
/// This is an intentional default, not data loss — the record stays
/// well-formed and the field prints unrotated.
///
/// ## Example
///
/// ```
/// use oneil::protocol::text::rotation_code;
///
/// assert_eq!(rotation_code(0), '1');
/// assert_eq!(rotation_code(90), '2');
/// assert_eq!(rotation_code(45), '1');
/// ```
#[inline]
pub fn rotation_code(degrees: u16) -> char {
    match degrees {
        90 => '2',
        180 => '3',
        270 => '4',
        _ => '1',
    }
}

/// Encode a text field record.
///
/// The size field and the multipliers depend on the font/size combination:
///
/// - font 9 + `Magnification(m)`: size `A` + 2-digit m, multipliers 1/1
/// - font 9 + `Multipliers(..)`: no magnification available, size `A00`
/// - fonts 0-8 + `Multipliers(w, h)`: size `000`, multipliers from the pair
/// - fonts 0-8 + `Magnification(..)`: size `000`, multipliers stay 1/1
///
/// The last two fallbacks keep the encoder total; neither is an error.
///
/// ## Example
///
/// ```
/// use oneil::protocol::text::{FontSize, LabelField, encode};
///
/// let field = LabelField::new(300, 60, "hello", 9, FontSize::Magnification(10));
/// assert_eq!(encode(&field), "1911A1000600300hello\r");
/// ```
pub fn encode(field: &LabelField) -> String {
    let (size, width_mult, height_mult) = match (field.font, field.size) {
        (SCALABLE_FONT, FontSize::Magnification(m)) => (format!("A{}", zpad(m as u16, 2)), 1, 1),
        (SCALABLE_FONT, FontSize::Multipliers(..)) => ("A00".to_string(), 1, 1),
        (_, FontSize::Multipliers(w, h)) => ("000".to_string(), w, h),
        (_, FontSize::Magnification(..)) => ("000".to_string(), 1, 1),
    };

    format!(
        "{rot}{font}{w}{h}{size}{y}{x}{text}{CR}",
        rot = rotation_code(field.rotation),
        font = field.font,
        w = width_mult,
        h = height_mult,
        size = size,
        y = zpad(field.y, 4),
        x = zpad(field.x, 4),
        text = field.text,
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_code_mapping() {
        assert_eq!(rotation_code(0), '1');
        assert_eq!(rotation_code(90), '2');
        assert_eq!(rotation_code(180), '3');
        assert_eq!(rotation_code(270), '4');
    }

    #[test]
    fn test_rotation_code_defaults_to_upright() {
        assert_eq!(rotation_code(45), '1');
        assert_eq!(rotation_code(360), '1');
        assert_eq!(rotation_code(1), '1');
    }

    #[test]
    fn test_scalable_font_record() {
        let field = LabelField::new(300, 60, "hello", 9, FontSize::Magnification(10));
        assert_eq!(encode(&field), "1911A1000600300hello\r");
    }

    #[test]
    fn test_scalable_font_pads_magnification() {
        let field = LabelField::new(0, 0, "x", 9, FontSize::Magnification(7));
        assert_eq!(encode(&field), "1911A0700000000x\r");
    }

    #[test]
    fn test_bitmapped_font_record() {
        let field = LabelField::new(120, 45, "QTY", 2, FontSize::Multipliers(2, 3));
        assert_eq!(encode(&field), "122300000450120QTY\r");
    }

    #[test]
    fn test_rotated_record() {
        let field =
            LabelField::new(10, 20, "up", 9, FontSize::Magnification(8)).rotation(270);
        assert_eq!(encode(&field), "4911A0800200010up\r");
    }

    #[test]
    fn test_magnification_with_bitmapped_font_keeps_unit_multipliers() {
        // Preserved fallback: a lone magnification code for a bitmapped font
        // leaves the multipliers at 1/1 rather than erroring.
        let field = LabelField::new(1, 2, "t", 3, FontSize::Magnification(5));
        assert_eq!(encode(&field), "131100000020001t\r");
    }

    #[test]
    fn test_multipliers_with_scalable_font_fall_back_to_a00() {
        let field = LabelField::new(1, 2, "t", 9, FontSize::Multipliers(2, 2));
        assert_eq!(encode(&field), "1911A0000020001t\r");
    }

    #[test]
    fn test_coordinates_clamp() {
        let field = LabelField::new(12345, 10000, "far", 9, FontSize::Magnification(10));
        assert_eq!(encode(&field), "1911A1099999999far\r");
    }
}
