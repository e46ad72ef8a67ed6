use log::trace;

/// Every positional ordering of `items`, `n!` sequences in total.
///
/// Orderings are produced by fixing each element in turn and prepending it to
/// every ordering of the remaining elements. Duplicate values are not
/// collapsed: `[4, 4]` yields two identical sequences.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for (i, current) in items.iter().enumerate() {
        let mut remaining = Vec::with_capacity(items.len() - 1);
        remaining.extend_from_slice(&items[..i]);
        remaining.extend_from_slice(&items[i + 1..]);

        for rest in permutations(&remaining) {
            let mut perm = Vec::with_capacity(items.len());
            perm.push(current.clone());
            perm.extend(rest);
            result.push(perm);
        }
    }

    trace!("Generated {} permutations of {} items", result.len(), items.len());
    result
}
