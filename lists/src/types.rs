//! Domain types for session-held todo lists.
//!
//! Lists and todos carry no identifiers of their own: a list is addressed by
//! its 1-based position in the session's list sequence, a todo by its 1-based
//! position in its list.

use serde::{Deserialize, Serialize};

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Normalized name (1 to 100 characters)
    pub name: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, incomplete todo
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

/// A named list of todos
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Normalized name, unique within the session (1 to 50 characters)
    pub name: String,
    /// Todos in insertion order
    pub todos: Vec<Todo>,
}

impl List {
    /// Creates a new list with no todos
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }
}

/// Severity of a flash message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    /// The operation went through
    Success,
    /// The input was rejected or the target was missing
    Error,
}

impl FlashKind {
    /// Lowercase label, also used as the CSS class suffix
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Status text queued for the next rendered page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Severity tag
    #[serde(rename = "type")]
    pub kind: FlashKind,
    /// Human-readable text
    pub text: String,
}

impl FlashMessage {
    /// Creates a success message
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    /// Creates an error message
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

/// Everything one client keeps in its session
///
/// A fresh session starts with no lists and an empty flash queue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Lists in creation order
    #[serde(default)]
    pub lists: Vec<List>,
    /// Flash messages not yet shown
    #[serde(default)]
    pub flash: Vec<FlashMessage>,
}

impl SessionState {
    /// Creates an empty session state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lists: Vec::new(),
            flash: Vec::new(),
        }
    }

    /// Queues a flash message
    pub fn push_flash(&mut self, message: FlashMessage) {
        self.flash.push(message);
    }

    /// Removes and returns every queued flash message
    pub fn take_flash(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.flash)
    }
}

/// One action per route of the application
///
/// Position parameters are kept as the raw text the client sent; the
/// reducer converts them and rejects anything that does not name an
/// existing list or todo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListsAction {
    /// Show every list
    ShowLists,

    /// Show the new-list form
    NewList,

    /// Create a list
    CreateList {
        /// Name as typed by the user
        list_name: String,
    },

    /// Show one list with its todos
    ShowList {
        /// 1-based list position
        list_id: String,
    },

    /// Show the rename form
    EditList {
        /// 1-based list position
        list_id: String,
    },

    /// Rename a list
    UpdateList {
        /// 1-based list position
        list_id: String,
        /// Name as typed by the user
        list_name: String,
    },

    /// Delete a list and all of its todos
    DeleteList {
        /// 1-based list position
        list_id: String,
    },

    /// Mark every todo of a list completed
    CompleteAll {
        /// 1-based list position
        list_id: String,
    },

    /// Append a todo to a list
    AddTodo {
        /// 1-based list position
        list_id: String,
        /// Name as typed by the user
        todo_name: String,
    },

    /// Set a todo's completion flag
    ToggleTodo {
        /// 1-based list position
        list_id: String,
        /// 1-based todo position within the list
        todo_id: String,
        /// `"true"` marks the todo completed, anything else incomplete
        completed: String,
    },

    /// Delete a todo
    DeleteTodo {
        /// 1-based list position
        list_id: String,
        /// 1-based todo position within the list
        todo_id: String,
    },
}

impl ListsAction {
    /// Short stable name used for logging and metrics labels
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ShowLists => "show_lists",
            Self::NewList => "new_list",
            Self::CreateList { .. } => "create_list",
            Self::ShowList { .. } => "show_list",
            Self::EditList { .. } => "edit_list",
            Self::UpdateList { .. } => "update_list",
            Self::DeleteList { .. } => "delete_list",
            Self::CompleteAll { .. } => "complete_all",
            Self::AddTodo { .. } => "add_todo",
            Self::ToggleTodo { .. } => "toggle_todo",
            Self::DeleteTodo { .. } => "delete_todo",
        }
    }
}

/// Pages the reducer can ask the shell to render
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListsView {
    /// The index of all lists
    Lists,

    /// The new-list form, pre-filled with what the user typed
    NewList {
        /// Entered name to show again
        list_name: String,
    },

    /// One list and its todos
    ShowList {
        /// 0-based index into the session's lists
        index: usize,
    },

    /// The rename form for one list
    EditList {
        /// 0-based index into the session's lists
        index: usize,
        /// Entered name to show again after a failed rename
        list_name: Option<String>,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn new_list_has_no_todos() {
        let list = List::new("Groceries");
        assert_eq!(list.name, "Groceries");
        assert!(list.todos.is_empty());
    }

    #[test]
    fn new_todo_is_incomplete() {
        let todo = Todo::new("Milk");
        assert!(!todo.completed);
    }

    #[test]
    fn take_flash_drains_queue() {
        let mut state = SessionState::new();
        state.push_flash(FlashMessage::success("one"));
        state.push_flash(FlashMessage::error("two"));

        let taken = state.take_flash();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[1].kind, FlashKind::Error);
        assert!(state.flash.is_empty());
    }

    #[test]
    fn flash_serializes_with_type_tag() {
        let json = serde_json::to_value(FlashMessage::error("nope")).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["text"], "nope");
    }

    #[test]
    fn session_state_defaults_missing_fields() {
        let state: SessionState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, SessionState::new());
    }
}
