//! Collection helpers for multi-value fields

use alloc::collections::BTreeSet;

/// Flips membership of `item`. Returns `true` if the item is now present.
pub fn toggle_membership<T: Ord>(items: &mut BTreeSet<T>, item: T) -> bool {
    if items.contains(&item) {
        items.remove(&item);
        false
    } else {
        items.insert(item);
        true
    }
}

/// Forces membership of `item` to `present`, as a checkbox with a known
/// `checked` state does.
pub fn set_membership<T: Ord>(items: &mut BTreeSet<T>, item: T, present: bool) {
    if present {
        items.insert(item);
    } else {
        items.remove(&item);
    }
}
