//! Session-backed todo lists.
//!
//! Users keep named lists of short todo items in their session. This crate
//! holds everything that happens between "a request arrived" and "answer with
//! a page or a redirect":
//!
//! - Name normalization and validation (length, uniqueness)
//! - Position-based lookup of lists and todos with explicit not-found results
//! - The reducer that applies every list/todo operation to the session state
//!   and queues flash messages for the next rendered page
//! - Display ordering (incomplete items before completed ones)
//!
//! # Quick Start
//!
//! ```
//! use todo_lists::{ListsAction, ListsEnvironment, ListsReducer, SessionState};
//! use todo_lists_core::{effect::Effect, reducer::Reducer};
//!
//! let reducer = ListsReducer::new();
//! let env = ListsEnvironment::default();
//! let mut session = SessionState::new();
//!
//! let effects = reducer.reduce(
//!     &mut session,
//!     ListsAction::CreateList { list_name: "groceries".to_string() },
//!     &env,
//! );
//!
//! assert_eq!(session.lists[0].name, "Groceries");
//! assert_eq!(effects[0], Effect::Redirect("/lists".to_string()));
//! ```

pub mod accessor;
pub mod ordering;
pub mod reducer;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use accessor::Lookup;
pub use reducer::{ListsEnvironment, ListsReducer, RenamePolicy};
pub use types::{FlashKind, FlashMessage, List, ListsAction, ListsView, SessionState, Todo};
pub use validation::{ListError, NameKind, Resource};
