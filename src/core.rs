//! Core traits and types for sort keys.
//!
//! This module defines:
//! - [`SortKeyAccessor`]: The trait used to read a column of optional keys without copying.
//! - [`Alphabet`]: The digit tables built once per configured alphabet.

use crate::error::SortKeyError;
use crate::Result;
use cuneiform::cuneiform;
use std::collections::VecDeque;

/// Size of the char to digit table. Alphabets are restricted to ASCII.
const ASCII_TABLE_SIZE: usize = 128;

/// Table marker for characters outside the alphabet.
const NO_DIGIT: u8 = u8::MAX;

// Cache-aligned char -> digit table.
#[cuneiform]
struct DigitTable {
    data: [u8; ASCII_TABLE_SIZE],
}

/// An ordered set of digit characters and its lookup tables.
///
/// Digit `d` is the `d`-th character. Because the characters are ASCII and strictly
/// ascending, plain `str` comparison of two keys agrees with comparison of their
/// digit arrays.
pub struct Alphabet {
    chars: Vec<u8>,
    digits: DigitTable,
}

impl Alphabet {
    /// Builds the tables, rejecting alphabets that are not usable as a digit set.
    pub fn new(chars: &str) -> Result<Self> {
        if !chars.is_ascii() {
            return Err(invalid_alphabet(format!(
                "{chars:?} contains non-ASCII characters"
            )));
        }

        let bytes = chars.as_bytes();
        if bytes.len() < 2 {
            return Err(invalid_alphabet(format!(
                "{chars:?} needs at least two characters"
            )));
        }

        // Sorting must reproduce the input, and digits must be distinct.
        if let Some(pair) = bytes.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(invalid_alphabet(format!(
                "{chars:?} is not strictly ascending at {:?}{:?}",
                pair[0] as char, pair[1] as char
            )));
        }

        let mut digits = DigitTable {
            data: [NO_DIGIT; ASCII_TABLE_SIZE],
        };
        bytes.iter().enumerate().for_each(|(digit, &ch)| {
            digits.data[ch as usize] = digit as u8;
        });

        Ok(Self {
            chars: bytes.to_vec(),
            digits,
        })
    }

    /// Number of digits.
    #[inline]
    pub fn radix(&self) -> usize {
        self.chars.len()
    }

    /// The alphabet as a string.
    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored.
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Digit 0.
    #[inline]
    pub fn lowest_char(&self) -> char {
        self.chars[0] as char
    }

    /// Digit `radix - 1`.
    #[inline]
    pub fn highest_char(&self) -> char {
        self.chars[self.chars.len() - 1] as char
    }

    /// Returns the digit for `ch`, or `None` if it is not in the alphabet.
    #[inline]
    pub fn digit(&self, ch: char) -> Option<u8> {
        let code = ch as usize;
        if code >= ASCII_TABLE_SIZE {
            return None;
        }
        match self.digits.data[code] {
            NO_DIGIT => None,
            digit => Some(digit),
        }
    }

    /// Returns the character for `digit`, or `None` if `digit >= radix`.
    #[inline]
    pub fn char_of(&self, digit: u8) -> Option<char> {
        self.chars.get(digit as usize).map(|&b| b as char)
    }

    /// Converts a key to digits, most significant first.
    pub fn to_digits(&self, key: &str) -> Result<Vec<u8>> {
        key.chars()
            .map(|ch| {
                self.digit(ch).ok_or_else(|| SortKeyError::InvalidCharacter {
                    character: ch,
                    key: key.to_string(),
                })
            })
            .collect()
    }

    /// Converts digits back to a key.
    pub fn to_key(&self, digits: &[u8]) -> Result<String> {
        digits
            .iter()
            .map(|&digit| self.char_of(digit).ok_or(SortKeyError::InvalidDigit(digit)))
            .collect()
    }
}

impl Clone for Alphabet {
    fn clone(&self) -> Self {
        Self {
            chars: self.chars.clone(),
            digits: DigitTable {
                data: self.digits.data,
            },
        }
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alphabet")
            .field("chars", &self.as_str())
            .field("radix", &self.radix())
            .finish()
    }
}

fn invalid_alphabet(reason: String) -> SortKeyError {
    SortKeyError::InvalidAlphabet { reason }
}

/// A single entry of a key column: a key, or missing.
///
/// An empty string is treated as missing.
pub trait SortKeyItem {
    /// Returns the key, or `None` when the entry is missing.
    fn sort_key(&self) -> Option<&str>;
}

impl<S: AsRef<str>> SortKeyItem for Option<S> {
    fn sort_key(&self) -> Option<&str> {
        self.as_ref().map(|s| s.as_ref()).filter(|s| !s.is_empty())
    }
}

impl SortKeyItem for String {
    fn sort_key(&self) -> Option<&str> {
        Some(self.as_str()).filter(|s| !s.is_empty())
    }
}

impl SortKeyItem for &str {
    fn sort_key(&self) -> Option<&str> {
        Some(*self).filter(|s| !s.is_empty())
    }
}

/// A trait for reading a column of optional sort keys without copying.
///
/// This allows [`SortKeys::populate_missing`](crate::SortKeys::populate_missing) to
/// read any collection that exposes keys by index: `Vec<Option<String>>`, rows of a
/// database result, or a custom columnar buffer.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use sortkeys::core::SortKeyAccessor;
///
/// struct Rows {
///     positions: Vec<Option<String>>,
/// }
///
/// impl SortKeyAccessor for Rows {
///     fn key(&self, index: usize) -> Option<&str> {
///         self.positions[index].as_deref()
///     }
///
///     fn len(&self) -> usize {
///         self.positions.len()
///     }
/// }
/// ```
pub trait SortKeyAccessor {
    /// Returns the key at the given index, or `None` if it is missing.
    fn key(&self, index: usize) -> Option<&str>;

    /// Returns the number of entries in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Blanket implementation for slices of key items.
impl<T: SortKeyItem> SortKeyAccessor for [T] {
    fn key(&self, index: usize) -> Option<&str> {
        self[index].sort_key()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: SortKeyItem> SortKeyAccessor for Vec<T> {
    fn key(&self, index: usize) -> Option<&str> {
        self[index].sort_key()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SortKeyItem> SortKeyAccessor for VecDeque<T> {
    fn key(&self, index: usize) -> Option<&str> {
        self[index].sort_key()
    }

    fn len(&self) -> usize {
        self.len()
    }
}
