//! Leftmost-true search over a monotone predicate.
//!
//! Given a sequence on which a predicate flips from false to true at most
//! once, [`first_index_satisfying`] locates the flip point in logarithmic
//! depth. The ranking flow uses it to cut a distance-sorted candidate list
//! at the acceptance threshold: the predicate "distance exceeds the
//! threshold" is monotone over a list sorted by ascending distance.

/// Find the first index whose element satisfies a monotone predicate.
///
/// Returns `None` for an empty slice or when no element satisfies the
/// predicate.
///
/// # Preconditions
///
/// The predicate must be monotone over `items`: false for every element
/// before some cut point and true for every element from the cut point on.
/// This cannot be verified here without scanning the whole slice; the
/// result is undefined when the precondition is violated.
///
/// # Example
///
/// ```rust
/// use levenrank::search::first_index_satisfying;
///
/// let distances = [0.0, 0.0, 1.0, 3.0, 3.0, 7.0];
/// assert_eq!(first_index_satisfying(&distances, |&d| d > 2.0), Some(3));
/// assert_eq!(first_index_satisfying(&distances, |&d| d > 10.0), None);
/// assert_eq!(first_index_satisfying(&[] as &[f32], |&d| d > 0.0), None);
/// ```
pub fn first_index_satisfying<T, P>(items: &[T], predicate: P) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    if items.is_empty() {
        return None;
    }
    search(items, &predicate, 0, items.len())
}

/// Search the window `[left, left + count)`, `count >= 1`.
fn search<T, P>(items: &[T], predicate: &P, left: usize, count: usize) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    if predicate(&items[left]) {
        return Some(left);
    }

    if count == 1 {
        return None;
    }

    // Right half first; under monotonicity an empty right half means the
    // whole window is empty of satisfying elements.
    let middle = left + count / 2;
    let right_result = search(items, predicate, middle, count - count / 2)?;

    if right_result > middle {
        return Some(right_result);
    }

    // right_result == middle: a satisfying element may still sit in the
    // open remainder (left, middle).
    let remainder = middle - left - 1;
    if remainder == 0 {
        return Some(middle);
    }

    match search(items, predicate, left + 1, remainder) {
        Some(earlier) => Some(earlier),
        None => Some(middle),
    }
}
