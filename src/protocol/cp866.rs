//! # Code Page 866 Encoding
//!
//! Converts Unicode strings to CP866 single-byte encoding for DPL printers.
//!
//! The printer firmware requires every transmitted byte to be in a fixed
//! single-byte character set; CP866 is the set the supported firmware ships
//! with. ASCII (U+0000–U+007F) passes through unchanged. A character with no
//! CP866 representation is an error, not a substitution — the session layer
//! surfaces it before any bytes reach the transport.

use crate::error::OneilError;

/// Encode a Unicode string as CP866 bytes.
///
/// - ASCII (U+0000–U+007F): passed through as-is
/// - CP866 upper half (Cyrillic, box drawing, symbols): single byte
/// - Unmapped characters: [`OneilError::Encoding`]
///
/// ## Example
///
/// ```
/// use oneil::protocol::cp866;
///
/// assert_eq!(cp866::encode("ID-42").unwrap(), b"ID-42");
/// assert_eq!(cp866::encode("Цех").unwrap(), vec![0x96, 0xA5, 0xE5]);
/// assert!(cp866::encode("€").is_err());
/// ```
pub fn encode(s: &str) -> Result<Vec<u8>, OneilError> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        if (ch as u32) < 0x80 {
            out.push(ch as u8);
        } else if let Some(byte) = unicode_to_cp866(ch) {
            out.push(byte);
        } else {
            return Err(OneilError::Encoding { ch });
        }
    }
    Ok(out)
}

/// Map a Unicode code point to its CP866 byte value (0x80–0xFF).
///
/// Returns `None` if the character has no CP866 representation.
/// Reference: IBM Code Page 866 (DOS Cyrillic Russian).
fn unicode_to_cp866(ch: char) -> Option<u8> {
    let byte = match ch {
        // 0x80–0xAF: А–Я, а–п (contiguous with Unicode U+0410–U+043F)
        'А'..='п' => 0x80 + (ch as u32 - 'А' as u32) as u8,

        // 0xE0–0xEF: р–я (contiguous with Unicode U+0440–U+044F)
        'р'..='я' => 0xE0 + (ch as u32 - 'р' as u32) as u8,

        // 0xB0–0xB2: Shade blocks
        '░' => 0xB0, // U+2591
        '▒' => 0xB1, // U+2592
        '▓' => 0xB2, // U+2593

        // 0xB3–0xDA: Box drawing (single and double line)
        '│' => 0xB3, // U+2502
        '┤' => 0xB4, // U+2524
        '╡' => 0xB5, // U+2561
        '╢' => 0xB6, // U+2562
        '╖' => 0xB7, // U+2556
        '╕' => 0xB8, // U+2555
        '╣' => 0xB9, // U+2563
        '║' => 0xBA, // U+2551
        '╗' => 0xBB, // U+2557
        '╝' => 0xBC, // U+255D
        '╜' => 0xBD, // U+255C
        '╛' => 0xBE, // U+255B
        '┐' => 0xBF, // U+2510
        '└' => 0xC0, // U+2514
        '┴' => 0xC1, // U+2534
        '┬' => 0xC2, // U+252C
        '├' => 0xC3, // U+251C
        '─' => 0xC4, // U+2500
        '┼' => 0xC5, // U+253C
        '╞' => 0xC6, // U+255E
        '╟' => 0xC7, // U+255F
        '╚' => 0xC8, // U+255A
        '╔' => 0xC9, // U+2554
        '╩' => 0xCA, // U+2569
        '╦' => 0xCB, // U+2566
        '╠' => 0xCC, // U+2560
        '═' => 0xCD, // U+2550
        '╬' => 0xCE, // U+256C
        '╧' => 0xCF, // U+2567
        '╨' => 0xD0, // U+2568
        '╤' => 0xD1, // U+2564
        '╥' => 0xD2, // U+2565
        '╙' => 0xD3, // U+2559
        '╘' => 0xD4, // U+2558
        '╒' => 0xD5, // U+2552
        '╓' => 0xD6, // U+2553
        '╫' => 0xD7, // U+256B
        '╪' => 0xD8, // U+256A
        '┘' => 0xD9, // U+2518
        '┌' => 0xDA, // U+250C

        // 0xDB–0xDF: Solid and half blocks
        '█' => 0xDB, // U+2588
        '▄' => 0xDC, // U+2584
        '▌' => 0xDD, // U+258C
        '▐' => 0xDE, // U+2590
        '▀' => 0xDF, // U+2580

        // 0xF0–0xF7: Ukrainian/Belarusian letters and Ё
        'Ё' => 0xF0, // U+0401
        'ё' => 0xF1, // U+0451
        'Є' => 0xF2, // U+0404
        'є' => 0xF3, // U+0454
        'Ї' => 0xF4, // U+0407
        'ї' => 0xF5, // U+0457
        'Ў' => 0xF6, // U+040E
        'ў' => 0xF7, // U+045E

        // 0xF8–0xFF: Symbols
        '°' => 0xF8,      // U+00B0
        '∙' => 0xF9,      // U+2219
        '·' => 0xFA,      // U+00B7
        '√' => 0xFB,      // U+221A
        '№' => 0xFC,      // U+2116
        '¤' => 0xFD,      // U+00A4
        '■' => 0xFE,      // U+25A0
        '\u{00A0}' => 0xFF, // NBSP

        _ => return None,
    };
    Some(byte)
}

// ============================================================================
// TESTS
// ============================================================================
