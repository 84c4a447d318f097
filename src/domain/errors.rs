//! Domain error types
//!
//! Only the normalizer fails. Validators and the classifier fold this error
//! into `false` / `Classification::Invalid` instead of propagating it.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// A cleaned character that is neither an ASCII digit nor a trailing `X`
    IllegalCharacter { character: char, position: usize },
}

impl IsbnError {
    /// The offending character
    pub fn character(&self) -> char {
        match self {
            IsbnError::IllegalCharacter { character, .. } => *character,
        }
    }

    /// 0-based index of the offending character in the cleaned input
    pub fn position(&self) -> usize {
        match self {
            IsbnError::IllegalCharacter { position, .. } => *position,
        }
    }
}

impl fmt::Display for IsbnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnError::IllegalCharacter {
                character: 'X',
                position,
            } => write!(
                f,
                "'X' is only allowed as the last character (found at position {})",
                position
            ),
            IsbnError::IllegalCharacter {
                character,
                position,
            } => write!(
                f,
                "illegal character in ISBN: '{}' (position {})",
                character, position
            ),
        }
    }
}

impl std::error::Error for IsbnError {}
