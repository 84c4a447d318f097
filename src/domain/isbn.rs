//! ISBN normalization and checksum validation
//!
//! ISBN-10 uses the ISO 2108 mod-11 weighted sum (weights 10..1, `X` = 10).
//! ISBN-13 uses the EAN-13 mod-10 sum with alternating weights 1 and 3.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::IsbnError;

pub const ISBN10_LEN: usize = 10;
pub const ISBN13_LEN: usize = 13;

/// Three-way outcome of `detect`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "ISBN-10")]
    Isbn10,
    #[serde(rename = "ISBN-13")]
    Isbn13,
    #[serde(rename = "INVALID")]
    Invalid,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Isbn10 => "ISBN-10",
            Classification::Isbn13 => "ISBN-13",
            Classification::Invalid => "INVALID",
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Classification::Invalid)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ISBN-10" => Ok(Classification::Isbn10),
            "ISBN-13" => Ok(Classification::Isbn13),
            "INVALID" => Ok(Classification::Invalid),
            other => Err(format!("Unknown classification: {}", other)),
        }
    }
}

/// Characters dropped before validation: hyphens and whitespace, where
/// whitespace also covers the ASCII file/group/record/unit separators
/// (U+001C..=U+001F) that `char::is_whitespace` leaves out.
fn is_separator(c: char) -> bool {
    c == '-' || c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Strip whitespace and hyphens, upper-case, then check every character.
///
/// Absent input normalizes to an empty string. The result holds only ASCII
/// digits, plus an optional `X` in the final position.
pub fn normalize(input: Option<&str>) -> Result<String, IsbnError> {
    let Some(raw) = input else {
        return Ok(String::new());
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| !is_separator(*c))
        .collect::<String>()
        .to_uppercase();

    let last = cleaned.chars().count().saturating_sub(1);
    for (position, character) in cleaned.chars().enumerate() {
        if character.is_ascii_digit() || (character == 'X' && position == last) {
            continue;
        }
        return Err(IsbnError::IllegalCharacter {
            character,
            position,
        });
    }

    Ok(cleaned)
}

/// Numeric value of a check-position character (`X` = 10)
fn char_value(c: char) -> Option<u32> {
    match c {
        'X' => Some(10),
        _ => c.to_digit(10),
    }
}

pub fn is_valid_isbn10(input: Option<&str>) -> bool {
    let Ok(cleaned) = normalize(input) else {
        return false;
    };
    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() != ISBN10_LEN {
        return false;
    }

    let (body, check) = chars.split_at(ISBN10_LEN - 1);
    if !body.iter().all(char::is_ascii_digit) {
        return false;
    }
    if !(check[0].is_ascii_digit() || check[0] == 'X') {
        return false;
    }

    let mut total = 0u32;
    for (i, c) in chars.iter().enumerate() {
        let Some(value) = char_value(*c) else {
            return false;
        };
        total += (ISBN10_LEN - i) as u32 * value;
    }

    total % 11 == 0
}

pub fn is_valid_isbn13(input: Option<&str>) -> bool {
    let Ok(cleaned) = normalize(input) else {
        return false;
    };
    if cleaned.len() != ISBN13_LEN || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let total: u32 = cleaned
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let weight = if i % 2 == 0 { 1 } else { 3 };
            weight * u32::from(b - b'0')
        })
        .sum();

    total % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_hyphens_and_spaces() {
        assert_eq!(normalize(Some("0-321-14653-0")).unwrap(), "0321146530");
        assert_eq!(
            normalize(Some(" 0 3 2 1 1 4 6 5 3 0 ")).unwrap(),
            "0321146530"
        );
        assert_eq!(normalize(Some("0-8044-2957-X")).unwrap(), "080442957X");
        assert_eq!(normalize(Some("0\t8044\n2957x")).unwrap(), "080442957X");
    }

    #[test]
    fn test_normalize_strips_control_separators() {
        assert_eq!(normalize(Some("0306406152\u{1f}")).unwrap(), "0306406152");
        assert_eq!(
            normalize(Some("\u{1c}030\u{1d}6406\u{1e}152")).unwrap(),
            "0306406152"
        );
        assert_eq!(normalize(Some("0306\u{a0}406152")).unwrap(), "0306406152");
        // other control characters stay illegal
        assert!(normalize(Some("0306406152\u{1b}")).is_err());
    }

    #[test]
    fn test_normalize_empty_and_absent() {
        assert_eq!(normalize(None).unwrap(), "");
        assert_eq!(normalize(Some("")).unwrap(), "");
        assert_eq!(normalize(Some(" - - ")).unwrap(), "");
    }

    #[test]
    fn test_normalize_rejects_misplaced_x() {
        let err = normalize(Some("0X80442957")).unwrap_err();
        assert_eq!(err.character(), 'X');
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn test_normalize_rejects_illegal_letter() {
        let err = normalize(Some("0-321-14653-A")).unwrap_err();
        assert_eq!(
            err,
            IsbnError::IllegalCharacter {
                character: 'A',
                position: 9
            }
        );
    }

    #[test]
    fn test_normalize_rejects_non_ascii_digits() {
        // Arabic-Indic digit three
        assert!(normalize(Some("030640615\u{0663}")).is_err());
    }

    #[test]
    fn test_isbn10_checksum() {
        assert!(is_valid_isbn10(Some("0306406152")));
        assert!(is_valid_isbn10(Some("0-8044-2957-X")));
        assert!(!is_valid_isbn10(Some("0306406153")));
        assert!(!is_valid_isbn10(Some("030640615")));
        assert!(!is_valid_isbn10(Some("0-321-14653-A")));
        assert!(!is_valid_isbn10(None));
    }

    #[test]
    fn test_isbn13_checksum() {
        assert!(is_valid_isbn13(Some("9780306406157")));
        assert!(is_valid_isbn13(Some("978-3-16-148410-0")));
        assert!(!is_valid_isbn13(Some("9780306406158")));
        assert!(!is_valid_isbn13(Some("978030640615")));
        assert!(!is_valid_isbn13(Some("97803A6406157")));
    }

    #[test]
    fn test_isbn13_rejects_trailing_x() {
        // normalizes fine, but X has no meaning in ISBN-13
        assert!(!is_valid_isbn13(Some("978030640615X")));
    }

    #[test]
    fn test_classification_strings() {
        assert_eq!(Classification::Isbn10.to_string(), "ISBN-10");
        assert_eq!(Classification::Isbn13.as_str(), "ISBN-13");
        assert_eq!(
            "INVALID".parse::<Classification>().unwrap(),
            Classification::Invalid
        );
        assert!("isbn-10".parse::<Classification>().is_err());
        assert_eq!(
            serde_json::to_string(&Classification::Isbn13).unwrap(),
            "\"ISBN-13\""
        );
    }
}
