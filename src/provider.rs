//! The sort key engine.
//!
//! [`SortKeys`] is built once per alphabet and is immutable afterwards. All
//! operations are pure: they read the lookup tables and the keys passed in, and
//! return new keys.

use crate::algo;
use crate::config::AlphabetConfig;
use crate::core::{Alphabet, SortKeyAccessor};
use crate::error::SortKeyError;
use crate::Result;
use std::cmp::Ordering;

/// Compares two optional sort keys.
///
/// A missing key (`None` or `""`) sorts before every real key. Real keys compare by
/// raw code-point order, never by locale collation.
///
/// ```
/// use std::cmp::Ordering;
/// use sortkeys::compare_sort_keys;
///
/// assert_eq!(compare_sort_keys(None, Some("-")), Ordering::Less);
/// assert_eq!(compare_sort_keys(Some("Z"), Some("a")), Ordering::Less);
/// assert_eq!(compare_sort_keys(Some(""), None), Ordering::Equal);
/// ```
pub fn compare_sort_keys(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (present(a), present(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        // `str` ordering is byte-wise, which for UTF-8 is code-point order.
        (Some(a), Some(b)) => a.cmp(b),
    }
}

#[inline]
fn present(key: Option<&str>) -> Option<&str> {
    key.filter(|k| !k.is_empty())
}

/// A fractional-indexing key generator over one alphabet.
///
/// # Examples
///
/// ```
/// use sortkeys::SortKeys;
///
/// let keys = SortKeys::base64().unwrap();
///
/// let first = keys.initial_item().unwrap();
/// let before = keys.first_before(&first).unwrap();
/// let after = keys.last_after(&first).unwrap();
/// let middle = keys.between(Some(first.as_str()), Some(after.as_str())).unwrap();
///
/// assert_eq!([&*before, &*first, &*middle, &*after], ["Ek", "UV", "bN", "jF"]);
/// ```
#[derive(Clone, Debug)]
pub struct SortKeys {
    alphabet: Alphabet,
    lowest: String,
    highest: String,
}

impl SortKeys {
    /// Builds an engine for the configured alphabet.
    ///
    /// Fails with [`SortKeyError::InvalidAlphabet`] unless the characters are ASCII,
    /// at least two, and strictly ascending.
    pub fn new(config: &AlphabetConfig) -> Result<Self> {
        let alphabet = Alphabet::new(&config.chars)?;
        let lowest = alphabet.lowest_char().to_string();
        let highest = alphabet.highest_char().to_string();

        tracing::debug!(
            alphabet = alphabet.as_str(),
            radix = alphabet.radix(),
            "built sort key engine"
        );

        Ok(Self {
            alphabet,
            lowest,
            highest,
        })
    }

    pub fn from_chars(chars: &str) -> Result<Self> {
        Self::new(&AlphabetConfig::new(chars))
    }

    /// Engine over [`BASE64_ALPHABET`](crate::BASE64_ALPHABET).
    pub fn base64() -> Result<Self> {
        Self::new(&AlphabetConfig::base64())
    }

    /// Engine over [`DECIMAL_ALPHABET`](crate::DECIMAL_ALPHABET).
    pub fn decimal() -> Result<Self> {
        Self::new(&AlphabetConfig::decimal())
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn radix(&self) -> usize {
        self.alphabet.radix()
    }

    /// The single-digit key for 0. No key ever sorts between missing and this one,
    /// and no generated key equals it.
    pub fn lowest(&self) -> &str {
        &self.lowest
    }

    /// The single-digit key for `radix - 1`. This is only a default ceiling: longer
    /// keys made of this character sort higher.
    pub fn highest(&self) -> &str {
        &self.highest
    }

    /// Same as [`compare_sort_keys`].
    pub fn compare(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        compare_sort_keys(a, b)
    }

    /// Sorts a key column in place, missing entries first.
    pub fn sort(&self, keys: &mut [Option<String>]) {
        keys.sort_by(|a, b| compare_sort_keys(a.as_deref(), b.as_deref()));
    }

    /// Checks that `key` only uses characters of this alphabet. The empty (missing)
    /// key passes.
    pub fn validate(&self, key: &str) -> Result<()> {
        self.alphabet.to_digits(key).map(|_| ())
    }

    /// Returns a key strictly between `less` and `more`.
    ///
    /// A missing `less` stands for [`lowest`](Self::lowest). A missing `more` is
    /// replaced by one more [`highest`](Self::highest) character than `less` starts
    /// with, so there is always room above the current high-water mark.
    ///
    /// # Errors
    ///
    /// - [`SortKeyError::IdenticalKeys`] if the bounds are equal.
    /// - [`SortKeyError::NotSorted`] if `less` is not below `more`.
    /// - [`SortKeyError::InvalidCharacter`] if a bound uses a foreign character.
    /// - [`SortKeyError::OutOfRange`] if no key fits at this precision, e.g. between
    ///   `"U"` and `"U-"`, which are numerically equal.
    pub fn between(&self, less: Option<&str>, more: Option<&str>) -> Result<String> {
        let less = present(less).unwrap_or(&self.lowest);
        let ceiling;
        let more = match present(more) {
            Some(more) => more,
            None => {
                ceiling = self.ceiling_above(less);
                ceiling.as_str()
            }
        };

        match compare_sort_keys(Some(less), Some(more)) {
            Ordering::Less => {}
            Ordering::Equal => {
                return Err(SortKeyError::IdenticalKeys {
                    key: less.to_string(),
                });
            }
            Ordering::Greater => {
                return Err(SortKeyError::NotSorted {
                    less: less.to_string(),
                    more: more.to_string(),
                });
            }
        }

        let radix = self.radix() as u32;
        let digits = algo::midpoint(
            &self.alphabet.to_digits(less)?,
            &self.alphabet.to_digits(more)?,
            radix,
        );
        let candidate = self.alphabet.to_key(&digits)?;

        // Post-condition, checked in every build.
        let above = compare_sort_keys(Some(less), Some(candidate.as_str())) == Ordering::Less;
        let below = compare_sort_keys(Some(candidate.as_str()), Some(more)) == Ordering::Less;
        if !(above && below) {
            tracing::warn!(
                less,
                more,
                candidate = candidate.as_str(),
                "generated sort key out of range"
            );
            return Err(SortKeyError::OutOfRange {
                less: less.to_string(),
                more: more.to_string(),
                candidate,
            });
        }

        tracing::trace!(less, more, key = candidate.as_str(), "generated sort key");
        Ok(candidate)
    }

    /// A key for the first item of an empty collection, near the middle of the range.
    pub fn initial_item(&self) -> Result<String> {
        self.between(Some(self.lowest.as_str()), Some(self.highest.as_str()))
    }

    /// A key just before `more`.
    ///
    /// Each call halves the distance to [`lowest`](Self::lowest), which is never reached.
    pub fn first_before(&self, more: &str) -> Result<String> {
        self.between(Some(self.lowest.as_str()), Some(more))
    }

    /// A key just after `less`. There is no fixed ceiling.
    pub fn last_after(&self, less: &str) -> Result<String> {
        let ceiling = self.ceiling_above(less);
        self.between(Some(less), Some(ceiling.as_str()))
    }

    /// Returns `n` ascending keys strictly between `less` and `more`.
    ///
    /// Keys are produced by recursive bisection, so their length grows with
    /// `log2(n)` rather than `n`. Bounds are normalized as in [`between`](Self::between).
    pub fn keys_between(
        &self,
        less: Option<&str>,
        more: Option<&str>,
        n: usize,
    ) -> Result<Vec<String>> {
        let mut keys = Vec::with_capacity(n);
        self.bisect(present(less), present(more), n, &mut keys)?;
        Ok(keys)
    }

    fn bisect(
        &self,
        less: Option<&str>,
        more: Option<&str>,
        n: usize,
        out: &mut Vec<String>,
    ) -> Result<()> {
        if n == 0 {
            return Ok(());
        }

        let middle = self.between(less, more)?;
        let left = n / 2;
        self.bisect(less, Some(middle.as_str()), left, out)?;
        out.push(middle.clone());
        self.bisect(Some(middle.as_str()), more, n - left - 1, out)
    }

    /// Fills the missing entries of an already sorted key column.
    ///
    /// Present keys keep their value and position. A run of missing entries between
    /// two keys is filled right to left by bisecting towards the lower key; a leading
    /// run walks down towards [`lowest`](Self::lowest); a trailing run (or an all
    /// missing column) is filled left to right with [`last_after`](Self::last_after),
    /// starting from [`initial_item`](Self::initial_item) if there is no key at all.
    ///
    /// The input is never modified.
    ///
    /// # Errors
    ///
    /// [`SortKeyError::NotSorted`] if the present keys are not strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortkeys::SortKeys;
    ///
    /// let keys = SortKeys::decimal().unwrap();
    /// let column = vec![None, Some("4"), None, Some("64"), None];
    ///
    /// let filled = keys.populate_missing(&column).unwrap();
    /// assert_eq!(filled, ["14", "4", "514", "64", "77"]);
    /// ```
    pub fn populate_missing<T: SortKeyAccessor + ?Sized>(&self, keys: &T) -> Result<Vec<String>> {
        let len = keys.len();
        let mut filled: Vec<Option<String>> = vec![None; len];
        let mut lower_bound: Option<&str> = None;
        let mut gap_start: Option<usize> = None;
        let mut generated = 0usize;

        for index in 0..len {
            let Some(key) = keys.key(index) else {
                gap_start.get_or_insert(index);
                continue;
            };

            if let Some(lower) = lower_bound {
                if compare_sort_keys(Some(lower), Some(key)) != Ordering::Less {
                    return Err(SortKeyError::NotSorted {
                        less: lower.to_string(),
                        more: key.to_string(),
                    });
                }
            }

            if let Some(start) = gap_start.take() {
                let mut upper = key.to_string();
                for slot in filled[start..index].iter_mut().rev() {
                    let next = match lower_bound {
                        Some(lower) => self.between(Some(lower), Some(upper.as_str()))?,
                        None => self.first_before(&upper)?,
                    };
                    *slot = Some(next.clone());
                    upper = next;
                }
                generated += index - start;
            }

            filled[index] = Some(key.to_string());
            lower_bound = Some(key);
        }

        if let Some(start) = gap_start {
            let mut previous = lower_bound.map(str::to_string);
            for slot in filled[start..].iter_mut() {
                let next = match previous.as_deref() {
                    Some(previous) => self.last_after(previous)?,
                    None => self.initial_item()?,
                };
                *slot = Some(next.clone());
                previous = Some(next);
            }
            generated += len - start;
        }

        tracing::debug!(total = len, generated, "populated missing sort keys");

        Ok(filled.into_iter().flatten().collect())
    }

    /// `p + 1` copies of the highest character, where `p` is the length of the run of
    /// highest characters `key` starts with.
    fn ceiling_above(&self, key: &str) -> String {
        let highest = self.alphabet.highest_char();
        let run = key.chars().take_while(|&ch| ch == highest).count();
        self.highest.repeat(run + 1)
    }
}
