//! Helpers for hierarchical and keyed collections.

use std::collections::BTreeMap;

/// Iterator over the leaves of a hierarchical structure.
///
/// Created by [`flatten_deep_structures`]. Uses an explicit stack, so deep
/// nesting does not grow the call stack; sub-items are requested only when
/// the iterator reaches them.
pub struct FlattenDeep<T, F> {
    stack: Vec<std::vec::IntoIter<T>>,
    get_sub_items: F,
}

impl<T, F> Iterator for FlattenDeep<T, F>
where
    F: FnMut(&T) -> Option<Vec<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let current = self.stack.last_mut()?;
            let Some(item) = current.next() else {
                self.stack.pop();
                continue;
            };
            match (self.get_sub_items)(&item) {
                None => return Some(item),
                Some(subs) => self.stack.push(subs.into_iter()),
            }
        }
    }
}

/// Flatten hierarchical structures into their leaves, in order.
///
/// For each item, `get_sub_items` returns `None` for a leaf (emitted as-is) or
/// the nested items, which are flattened in its place. The item owning nested
/// items is never emitted, even when its list is empty.
///
/// Useful for unions of unions: `Union<Union<A, B>, Union<C, D>>` flattens
/// into `A, B, C, D`.
///
/// # Example
/// ```
/// use tyras_metadata_jsonschema::flatten_deep_structures;
/// let leaves: Vec<f64> = flatten_deep_structures(vec![1.0, 2.0, 3.0], |item| {
///     if *item == 1.0 {
///         Some(vec![1.1, 1.2])
///     } else if *item == 3.0 {
///         Some(vec![3.1])
///     } else {
///         None
///     }
/// })
/// .collect();
/// assert_eq!(leaves, vec![1.1, 1.2, 2.0, 3.1]);
/// ```
pub fn flatten_deep_structures<T, I, F>(items: I, get_sub_items: F) -> FlattenDeep<T, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Option<Vec<T>>,
{
    let items: Vec<T> = items.into_iter().collect();
    FlattenDeep {
        stack: vec![items.into_iter()],
        get_sub_items,
    }
}

/// Build a map from keys, computing each value with `create_value`.
///
/// `create_value` runs once per key occurrence; for duplicate keys the last
/// computed value wins.
pub fn array_to_record<K, V, I, F>(keys: I, mut create_value: F) -> BTreeMap<K, V>
where
    K: Ord,
    I: IntoIterator<Item = K>,
    F: FnMut(&K) -> V,
{
    keys.into_iter()
        .map(|key| {
            let value = create_value(&key);
            (key, value)
        })
        .collect()
}
