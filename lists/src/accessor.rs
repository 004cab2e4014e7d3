//! Position-based access to the session's lists and todos.
//!
//! Clients address lists and todos by 1-based position text. Conversion
//! follows leading-integer parsing: surrounding junk after the digits is
//! ignored and text without a leading integer counts as `0`. Position `p`
//! maps to index `p - 1`; anything that ends up negative or past the end is
//! [`Lookup::NotFound`].

use crate::types::List;

/// Outcome of a position lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The position names an existing item
    Found(T),
    /// The position is zero, negative, non-numeric or out of bounds
    NotFound,
}

/// Parses the leading integer of `raw`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted; parsing stops
/// at the first non-digit. Returns `0` when no digits follow. Values beyond
/// `i64` saturate.
#[must_use]
pub fn parse_position(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

/// Converts 1-based position text into a 0-based index below `len`.
#[must_use]
pub fn position_to_index(raw: &str, len: usize) -> Lookup<usize> {
    let Some(index) = parse_position(raw).checked_sub(1) else {
        return Lookup::NotFound;
    };
    match usize::try_from(index) {
        Ok(index) if index < len => Lookup::Found(index),
        _ => Lookup::NotFound,
    }
}

/// Index of the list at `list_id`
#[must_use]
pub fn locate_list(lists: &[List], list_id: &str) -> Lookup<usize> {
    position_to_index(list_id, lists.len())
}

/// Index of the todo at `todo_id` within `list`
#[must_use]
pub fn locate_todo(list: &List, todo_id: &str) -> Lookup<usize> {
    position_to_index(todo_id, list.todos.len())
}
