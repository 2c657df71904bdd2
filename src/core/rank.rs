use std::cmp::Ordering;

/// Orders items by `key`, highest first.
///
/// Equal keys keep their input order: each item is tagged with its original
/// position and ties are broken on that position.
pub fn rank<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    let mut keyed: Vec<(usize, K, T)> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index, key(&item), item))
        .collect();

    keyed.sort_by(|a, b| match b.1.cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });

    keyed.into_iter().map(|(_, _, item)| item).collect()
}
