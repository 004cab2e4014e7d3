//! Display ordering and completion predicates.
//!
//! Pages show unfinished work first: incomplete lists (or todos) in their
//! natural order, followed by complete ones in their natural order. Each
//! item is paired with its original 1-based position, which stays the
//! address used in links and forms.

use crate::types::{List, Todo};

/// A list is complete when it has todos and all of them are completed.
#[must_use]
pub fn list_complete(list: &List) -> bool {
    !list.todos.is_empty() && list.todos.iter().all(|todo| todo.completed)
}

/// Number of completed todos in `list`
#[must_use]
pub fn todos_completed(list: &List) -> usize {
    list.todos.iter().filter(|todo| todo.completed).count()
}

/// Number of todos in `list` still to do
#[must_use]
pub fn todos_remaining(list: &List) -> usize {
    list.todos.len() - todos_completed(list)
}

/// Lists ordered incomplete-first, each with its 1-based position
#[must_use]
pub fn sort_lists(lists: &[List]) -> Vec<(usize, &List)> {
    partition_by(lists, list_complete)
}

/// Todos ordered incomplete-first, each with its 1-based position
#[must_use]
pub fn sort_todos(todos: &[Todo]) -> Vec<(usize, &Todo)> {
    partition_by(todos, |todo| todo.completed)
}

fn partition_by<T>(items: &[T], done: impl Fn(&T) -> bool) -> Vec<(usize, &T)> {
    let (finished, pending): (Vec<_>, Vec<_>) = items
        .iter()
        .enumerate()
        .map(|(index, item)| (index + 1, item))
        .partition(|&(_, item)| done(item));

    pending.into_iter().chain(finished).collect()
}
