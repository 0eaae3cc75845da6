//! Splice moves over ordered sequences.

/// Moves the element at `from` so that it ends up at index `to`, shifting the
/// elements in between by one position.
///
/// Out-of-range indices leave the slice untouched and return false.
///
/// # Examples
/// ```
/// use kanban_core::domain::ordering::array_move;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
///
/// array_move(&mut items, 0, 2);
/// assert_eq!(items, vec!['b', 'c', 'a', 'd']);
///
/// array_move(&mut items, 3, 0);
/// assert_eq!(items, vec!['d', 'b', 'c', 'a']);
/// ```
pub fn array_move<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if from > to {
        items[to..=from].rotate_right(1);
    }
    true
}

/// Removes the element at `from` and inserts it directly before the element
/// currently at `before`. Returns the new index of the moved element.
///
/// Unlike [`array_move`], the moved element always lands on the left of the
/// anchor regardless of the direction of travel.
pub fn insert_before<T>(items: &mut Vec<T>, from: usize, before: usize) -> Option<usize> {
    if from >= items.len() || before >= items.len() || from == before {
        return None;
    }
    let item = items.remove(from);
    let target = if from < before { before - 1 } else { before };
    items.insert(target, item);
    Some(target)
}
