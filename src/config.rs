//! Alphabet configuration.
//!
//! An [`AlphabetConfig`] is plain data; it is validated once, when a
//! [`SortKeys`](crate::SortKeys) engine is built from it.

use serde::{Deserialize, Serialize};

/// 64 characters, compact mixed-case keys.
pub const BASE64_ALPHABET: &str =
    "-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// A blank plus the ten decimal digits, for keys that should look numeric.
pub const DECIMAL_ALPHABET: &str = " 0123456789";

/// The ordered characters used as digits of a sort key.
///
/// Characters must be ASCII, distinct, and listed in ascending order.
///
/// ```
/// use sortkeys::AlphabetConfig;
///
/// let config: AlphabetConfig = serde_json::from_str(r#"{ "chars": "abc" }"#).unwrap();
/// assert_eq!(config.chars, "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlphabetConfig {
    pub chars: String,
}

impl AlphabetConfig {
    pub fn new(chars: impl Into<String>) -> Self {
        Self {
            chars: chars.into(),
        }
    }

    /// The 64-character alphabet ([`BASE64_ALPHABET`]).
    pub fn base64() -> Self {
        Self::new(BASE64_ALPHABET)
    }

    /// The 11-character blank-and-digits alphabet ([`DECIMAL_ALPHABET`]).
    pub fn decimal() -> Self {
        Self::new(DECIMAL_ALPHABET)
    }
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self::base64()
    }
}
