//! Navigation selection logic
//!
//! Pure functions for calculating cursor and lightbox indices with wrapping
//! and clamping behavior.

use crate::model::Direction;

/// Calculate the next selection index with wrapping
///
/// Advances the selection to the next item in the list. If at the end,
/// wraps around to the beginning. If no item is selected, selects the first item.
///
/// # Examples
/// ```
/// use homefiles::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// Moves the selection to the previous item in the list. If at the beginning,
/// wraps around to the end. If no item is selected, selects the last item.
///
/// # Examples
/// ```
/// use homefiles::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Keep a selection valid after the list changed length
///
/// Empty lists have no selection; an index past the end moves to the last
/// item; a missing selection on a non-empty list selects the first item.
///
/// # Examples
/// ```
/// use homefiles::logic::navigation::clamp_selection;
///
/// assert_eq!(clamp_selection(Some(4), 0), None);
/// assert_eq!(clamp_selection(Some(4), 3), Some(2));
/// assert_eq!(clamp_selection(Some(1), 3), Some(1));
/// assert_eq!(clamp_selection(None, 3), Some(0));
/// ```
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) => i.min(list_len - 1),
        None => 0,
    })
}

/// Move a cursor inside a row-major grid without wrapping
///
/// Left/Right step by one item, Up/Down step by a row. Moves that would leave
/// the grid keep the cursor where it is, except Down into a shorter last row,
/// which lands on the last item.
pub fn grid_move(
    current: Option<usize>,
    len: usize,
    columns: usize,
    direction: Direction,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let columns = columns.max(1);
    let current = match current {
        Some(i) => i.min(len - 1),
        None => return Some(0),
    };

    Some(match direction {
        Direction::Left => current.saturating_sub(1),
        Direction::Right => (current + 1).min(len - 1),
        Direction::Up => {
            if current >= columns {
                current - columns
            } else {
                current
            }
        }
        Direction::Down => {
            let last_row = (len - 1) / columns;
            if current / columns < last_row {
                (current + columns).min(len - 1)
            } else {
                current
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(0), 0), None);
    }

    #[test]
    fn test_next_selection_wrapping() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0)); // Single item wraps to itself
    }

    #[test]
    fn test_prev_selection_wrapping() {
        assert_eq!(prev_selection(Some(0), 5), Some(4));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_selection_out_of_bounds() {
        assert_eq!(next_selection(Some(10), 3), Some(0));
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_wrap_round_trip() {
        // next then prev returns to the same index for every position
        for len in 1..6 {
            for i in 0..len {
                let next = next_selection(Some(i), len);
                assert_eq!(prev_selection(next, len), Some(i));
            }
        }
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(None, 0), None);
        assert_eq!(clamp_selection(Some(0), 1), Some(0));
        assert_eq!(clamp_selection(Some(5), 5), Some(4));
    }

    #[test]
    fn test_grid_move_horizontal() {
        assert_eq!(grid_move(Some(0), 8, 4, Direction::Left), Some(0));
        assert_eq!(grid_move(Some(0), 8, 4, Direction::Right), Some(1));
        assert_eq!(grid_move(Some(7), 8, 4, Direction::Right), Some(7));
    }

    #[test]
    fn test_grid_move_vertical() {
        assert_eq!(grid_move(Some(1), 8, 4, Direction::Down), Some(5));
        assert_eq!(grid_move(Some(5), 8, 4, Direction::Up), Some(1));
        assert_eq!(grid_move(Some(1), 8, 4, Direction::Up), Some(1));
        assert_eq!(grid_move(Some(5), 8, 4, Direction::Down), Some(5));
    }

    #[test]
    fn test_grid_move_into_short_last_row() {
        // 4 columns, 6 items: row 1 holds indices 4 and 5
        assert_eq!(grid_move(Some(3), 6, 4, Direction::Down), Some(5));
    }

    #[test]
    fn test_grid_move_single_column_is_a_list() {
        assert_eq!(grid_move(Some(0), 3, 1, Direction::Down), Some(1));
        assert_eq!(grid_move(Some(2), 3, 1, Direction::Down), Some(2));
        assert_eq!(grid_move(Some(2), 3, 0, Direction::Up), Some(1));
    }

    #[test]
    fn test_grid_move_empty_and_unselected() {
        assert_eq!(grid_move(Some(3), 0, 4, Direction::Down), None);
        assert_eq!(grid_move(None, 3, 4, Direction::Down), Some(0));
    }
}
