//! Property-based tests for the sort key engine.

use proptest::prelude::*;
use sortkeys::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;

// =============================================================================
// Test helpers
// =============================================================================

/// Keys over the base64 alphabet that do not end in the lowest character.
///
/// A trailing lowest character adds no magnitude, so two such keys can be equal
/// as fractions while differing as strings.
fn arbitrary_key() -> impl Strategy<Value = String> {
    "[-0-9A-Za-z_]{0,8}[0-9A-Za-z_]"
}

fn arbitrary_maybe_key() -> impl Strategy<Value = Option<String>> {
    prop::option::of(arbitrary_key())
}

/// A sorted column of distinct keys with runs of missing entries around them.
fn arbitrary_column() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::btree_set(arbitrary_key(), 0..8).prop_flat_map(|keys: BTreeSet<String>| {
        let runs = keys.len() + 1;
        (Just(keys), prop::collection::vec(0..4usize, runs)).prop_map(|(keys, gaps)| {
            let mut column = vec![None; gaps[0]];
            for (key, gap) in keys.into_iter().zip(&gaps[1..]) {
                column.push(Some(key));
                column.extend(std::iter::repeat_n(None, *gap));
            }
            column
        })
    })
}

fn engine() -> SortKeys {
    SortKeys::base64().unwrap()
}

// =============================================================================
// Between
// =============================================================================

proptest! {
    #[test]
    fn prop_between_is_strictly_between(a in arbitrary_key(), b in arbitrary_key()) {
        prop_assume!(a != b);
        let (less, more) = if a < b { (a, b) } else { (b, a) };

        let key = engine().between(Some(less.as_str()), Some(more.as_str())).unwrap();

        prop_assert!(less < key, "{:?} !< {:?}", less, key);
        prop_assert!(key < more, "{:?} !< {:?}", key, more);
    }

    #[test]
    fn prop_between_is_deterministic(a in arbitrary_key(), b in arbitrary_key()) {
        prop_assume!(a < b);
        let keys = engine();
        prop_assert_eq!(
            keys.between(Some(a.as_str()), Some(b.as_str())).unwrap(),
            keys.between(Some(a.as_str()), Some(b.as_str())).unwrap()
        );
    }

    #[test]
    fn prop_between_rejects_reversed_bounds(a in arbitrary_key(), b in arbitrary_key()) {
        prop_assume!(a < b);
        let is_not_sorted = matches!(
            engine().between(Some(b.as_str()), Some(a.as_str())),
            Err(SortKeyError::NotSorted { .. })
        );
        prop_assert!(is_not_sorted);
    }

    #[test]
    fn prop_open_bounds(key in arbitrary_key()) {
        let keys = engine();

        let after = keys.last_after(&key).unwrap();
        prop_assert!(key < after);
        prop_assert_eq!(keys.between(Some(key.as_str()), None).unwrap(), after);

        let before = keys.first_before(&key).unwrap();
        prop_assert!(before < key);
        prop_assert!(before.as_str() > keys.lowest());
    }
}

// =============================================================================
// Comparator
// =============================================================================

proptest! {
    #[test]
    fn prop_comparator_is_a_total_order(
        a in arbitrary_maybe_key(),
        b in arbitrary_maybe_key(),
        c in arbitrary_maybe_key(),
    ) {
        let cmp = |x: &Option<String>, y: &Option<String>| {
            compare_sort_keys(x.as_deref(), y.as_deref())
        };

        // Reflexive
        prop_assert_eq!(cmp(&a, &a), Ordering::Equal);
        // Antisymmetric
        prop_assert_eq!(cmp(&a, &b), cmp(&b, &a).reverse());
        // Transitive
        if cmp(&a, &b) != Ordering::Greater && cmp(&b, &c) != Ordering::Greater {
            prop_assert_ne!(cmp(&a, &c), Ordering::Greater);
        }
    }
}

// =============================================================================
// Gap filling
// =============================================================================

proptest! {
    #[test]
    fn prop_populate_missing(column in arbitrary_column()) {
        let snapshot = column.clone();

        let filled = engine().populate_missing(&column).unwrap();

        prop_assert_eq!(&column, &snapshot);
        prop_assert_eq!(filled.len(), column.len());
        for (original, result) in column.iter().zip(&filled) {
            if let Some(original) = original {
                prop_assert_eq!(original, result);
            }
        }
        for pair in filled.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn prop_keys_between(a in arbitrary_key(), b in arbitrary_key(), n in 0..64usize) {
        prop_assume!(a < b);

        let spread = engine().keys_between(Some(a.as_str()), Some(b.as_str()), n).unwrap();

        prop_assert_eq!(spread.len(), n);
        if let (Some(first), Some(last)) = (spread.first(), spread.last()) {
            prop_assert!(&a < first);
            prop_assert!(last < &b);
        }
        for pair in spread.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}

// =============================================================================
// Editing sessions
// =============================================================================

proptest! {
    #[test]
    fn prop_random_inserts_stay_sorted(positions in prop::collection::vec(0.0..=1.0f64, 1..60)) {
        let keys = SortKeys::decimal().unwrap();
        let mut list: Vec<String> = Vec::new();

        for pct in positions {
            let pos = ((pct * list.len() as f64) as usize).min(list.len());
            let less = pos.checked_sub(1).map(|i| list[i].as_str());
            let more = list.get(pos).map(String::as_str);
            let key = keys.between(less, more).unwrap();
            list.insert(pos, key);
        }

        for pair in list.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }
}
