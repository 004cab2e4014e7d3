//! Reducer for session-held todo lists.
//!
//! Every route follows the same flow: look the list up by position (bailing
//! out with an error flash and a redirect to the index when it is missing),
//! validate the input, mutate the session state or queue an error flash,
//! then answer with exactly one render or redirect effect.

use crate::accessor::{self, Lookup};
use crate::types::{FlashMessage, List, ListsAction, ListsView, SessionState, Todo};
use crate::validation::{self, ListError, Resource};
use todo_lists_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Path of the list index
pub const LISTS_PATH: &str = "/lists";

/// Path of the list at 0-based `index`
#[must_use]
pub fn list_path(index: usize) -> String {
    format!("{LISTS_PATH}/{}", index + 1)
}

type Effects = SmallVec<[Effect<ListsView>; 4]>;

/// How a rename checks uniqueness
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenamePolicy {
    /// Compare against every list, including the one being renamed.
    ///
    /// Renaming a list to its current name is rejected as a duplicate.
    #[default]
    CompareAll,
    /// Compare against every other list
    ExcludeSelf,
}

/// Environment for the lists reducer
#[derive(Clone, Debug, Default)]
pub struct ListsEnvironment {
    /// Uniqueness rule applied when renaming
    pub rename_policy: RenamePolicy,
}

impl ListsEnvironment {
    /// Creates a new `ListsEnvironment`
    #[must_use]
    pub const fn new(rename_policy: RenamePolicy) -> Self {
        Self { rename_policy }
    }
}

/// Reducer for every list and todo operation
#[derive(Clone, Debug, Default)]
pub struct ListsReducer;

impl ListsReducer {
    /// Creates a new `ListsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn respond(effect: Effect<ListsView>) -> Effects {
        let mut effects = SmallVec::new();
        effects.push(effect);
        effects
    }

    fn redirect(path: impl Into<String>) -> Effects {
        Self::respond(Effect::redirect(path))
    }

    fn render(view: ListsView) -> Effects {
        Self::respond(Effect::Render(view))
    }

    /// Queues the not-found flash and sends the client to `fallback`.
    fn not_found(state: &mut SessionState, resource: Resource, fallback: String) -> Effects {
        tracing::debug!(%resource, "position does not name an existing item");
        state.push_flash(FlashMessage::error(ListError::NotFound(resource).to_string()));
        Self::redirect(fallback)
    }

    fn reject(state: &mut SessionState, error: &ListError) {
        tracing::debug!(%error, "input rejected");
        state.push_flash(FlashMessage::error(error.to_string()));
    }

    fn create_list(state: &mut SessionState, list_name: String) -> Effects {
        let name = validation::capitalize(&list_name);
        if let Err(error) = validation::error_for_list_name(&name, &state.lists, None) {
            Self::reject(state, &error);
            return Self::render(ListsView::NewList { list_name });
        }

        state.push_flash(FlashMessage::success(format!("List '{name}' has been created.")));
        state.lists.push(List::new(name));
        Self::redirect(LISTS_PATH)
    }

    fn update_list(
        state: &mut SessionState,
        index: usize,
        list_name: String,
        env: &ListsEnvironment,
    ) -> Effects {
        let name = validation::capitalize(&list_name);
        let skip = match env.rename_policy {
            RenamePolicy::CompareAll => None,
            RenamePolicy::ExcludeSelf => Some(index),
        };
        if let Err(error) = validation::error_for_list_name(&name, &state.lists, skip) {
            Self::reject(state, &error);
            return Self::render(ListsView::EditList {
                index,
                list_name: Some(list_name),
            });
        }

        state.lists[index].name = name;
        state.push_flash(FlashMessage::success("List name successfully updated."));
        Self::redirect(list_path(index))
    }

    fn delete_list(state: &mut SessionState, index: usize) -> Effects {
        let removed = state.lists.remove(index);
        state.push_flash(FlashMessage::success(format!(
            "List '{}' has been removed.",
            removed.name
        )));
        Self::redirect(LISTS_PATH)
    }

    fn complete_all(state: &mut SessionState, index: usize) -> Effects {
        for todo in &mut state.lists[index].todos {
            todo.completed = true;
        }
        state.push_flash(FlashMessage::success("All todos marked completed"));
        Self::redirect(list_path(index))
    }

    fn add_todo(state: &mut SessionState, index: usize, todo_name: &str) -> Effects {
        // Todo names get the same per-word capitalization as list names, which
        // also strips surrounding whitespace before the length check.
        let name = validation::capitalize(todo_name);
        match validation::error_for_todo_name(&name) {
            Ok(()) => {
                state.push_flash(FlashMessage::success(format!("Todo '{name}' has been added.")));
                state.lists[index].todos.push(Todo::new(name));
            }
            Err(error) => Self::reject(state, &error),
        }
        Self::redirect(list_path(index))
    }

    fn toggle_todo(state: &mut SessionState, index: usize, todo_id: &str, completed: &str) -> Effects {
        let todo_index = match accessor::locate_todo(&state.lists[index], todo_id) {
            Lookup::Found(todo_index) => todo_index,
            Lookup::NotFound => return Self::not_found(state, Resource::Todo, list_path(index)),
        };

        state.lists[index].todos[todo_index].completed = completed == "true";
        Self::redirect(list_path(index))
    }

    fn delete_todo(state: &mut SessionState, index: usize, todo_id: &str) -> Effects {
        let todo_index = match accessor::locate_todo(&state.lists[index], todo_id) {
            Lookup::Found(todo_index) => todo_index,
            Lookup::NotFound => return Self::not_found(state, Resource::Todo, list_path(index)),
        };

        let removed = state.lists[index].todos.remove(todo_index);
        state.push_flash(FlashMessage::success(format!(
            "Todo '{}' has been removed.",
            removed.name
        )));
        Self::redirect(list_path(index))
    }
}

/// Operation on one list, once the list id has been split off the action
enum ListOp {
    Show,
    Edit,
    Update { list_name: String },
    Delete,
    CompleteAll,
    AddTodo { todo_name: String },
    ToggleTodo { todo_id: String, completed: String },
    DeleteTodo { todo_id: String },
}

impl Reducer for ListsReducer {
    type State = SessionState;
    type Action = ListsAction;
    type Environment = ListsEnvironment;
    type View = ListsView;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::View>; 4]> {
        // ========== Routes without a list ==========
        let (list_id, op) = match action {
            ListsAction::ShowLists => return Self::render(ListsView::Lists),
            ListsAction::NewList => {
                return Self::render(ListsView::NewList {
                    list_name: String::new(),
                });
            }
            ListsAction::CreateList { list_name } => return Self::create_list(state, list_name),
            ListsAction::ShowList { list_id } => (list_id, ListOp::Show),
            ListsAction::EditList { list_id } => (list_id, ListOp::Edit),
            ListsAction::UpdateList { list_id, list_name } => {
                (list_id, ListOp::Update { list_name })
            }
            ListsAction::DeleteList { list_id } => (list_id, ListOp::Delete),
            ListsAction::CompleteAll { list_id } => (list_id, ListOp::CompleteAll),
            ListsAction::AddTodo { list_id, todo_name } => (list_id, ListOp::AddTodo { todo_name }),
            ListsAction::ToggleTodo {
                list_id,
                todo_id,
                completed,
            } => (list_id, ListOp::ToggleTodo { todo_id, completed }),
            ListsAction::DeleteTodo { list_id, todo_id } => {
                (list_id, ListOp::DeleteTodo { todo_id })
            }
        };

        // ========== Routes on one list ==========
        let index = match accessor::locate_list(&state.lists, &list_id) {
            Lookup::Found(index) => index,
            Lookup::NotFound => {
                return Self::not_found(state, Resource::List, LISTS_PATH.to_string());
            }
        };

        match op {
            ListOp::Show => Self::render(ListsView::ShowList { index }),
            ListOp::Edit => Self::render(ListsView::EditList {
                index,
                list_name: None,
            }),
            ListOp::Update { list_name } => Self::update_list(state, index, list_name, env),
            ListOp::Delete => Self::delete_list(state, index),
            ListOp::CompleteAll => Self::complete_all(state, index),
            ListOp::AddTodo { todo_name } => Self::add_todo(state, index, &todo_name),
            ListOp::ToggleTodo { todo_id, completed } => {
                Self::toggle_todo(state, index, &todo_id, &completed)
            }
            ListOp::DeleteTodo { todo_id } => Self::delete_todo(state, index, &todo_id),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::FlashKind;
    use todo_lists_testing::{assertions, ReducerTest};

    fn test_env() -> ListsEnvironment {
        ListsEnvironment::default()
    }

    fn todo(name: &str, completed: bool) -> Todo {
        Todo {
            name: name.to_string(),
            completed,
        }
    }

    fn session_with(lists: Vec<List>) -> SessionState {
        SessionState {
            lists,
            flash: Vec::new(),
        }
    }

    fn last_flash(state: &SessionState) -> &FlashMessage {
        state.flash.last().expect("a flash message was queued")
    }

    #[test]
    fn test_create_list_success() {
        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Work")]))
            .when_action(ListsAction::CreateList {
                list_name: "  weekend   errands ".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.lists.len(), 2);
                assert_eq!(state.lists[1], List::new("Weekend Errands"));
                let flash = last_flash(state);
                assert_eq!(flash.kind, FlashKind::Success);
                assert_eq!(flash.text, "List 'Weekend Errands' has been created.");
            })
            .then_effects(|effects| assertions::assert_redirect(effects, "/lists"))
            .run();
    }

    #[test]
    fn test_create_list_invalid_length() {
        for name in [String::new(), "   ".to_string(), "a".repeat(51)] {
            let entered = name.clone();
            ReducerTest::new(ListsReducer::new())
                .with_env(test_env())
                .given_state(session_with(vec![List::new("Work")]))
                .when_action(ListsAction::CreateList { list_name: name })
                .then_state(|state| {
                    assert_eq!(state.lists, vec![List::new("Work")]);
                    assert_eq!(
                        last_flash(state),
                        &FlashMessage::error("List name must be between 1 and 50 characters.")
                    );
                })
                .then_effects(move |effects| {
                    assertions::assert_render(
                        effects,
                        &ListsView::NewList {
                            list_name: entered,
                        },
                    );
                })
                .run();
        }
    }

    #[test]
    fn test_create_list_duplicate_after_capitalization() {
        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Shopping")]))
            .when_action(ListsAction::CreateList {
                list_name: "shopping".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.lists.len(), 1);
                assert_eq!(last_flash(state), &FlashMessage::error("List name must be unique."));
            })
            .then_effects(|effects| {
                assertions::assert_render(
                    effects,
                    &ListsView::NewList {
                        list_name: "shopping".to_string(),
                    },
                );
            })
            .run();
    }

    #[test]
    fn test_show_list_not_found() {
        for list_id in ["0", "abc", "-3", "2", ""] {
            ReducerTest::new(ListsReducer::new())
                .with_env(test_env())
                .given_state(session_with(vec![List::new("Work")]))
                .when_action(ListsAction::ShowList {
                    list_id: list_id.to_string(),
                })
                .then_state(|state| {
                    assert_eq!(
                        last_flash(state),
                        &FlashMessage::error("The specified list was not found.")
                    );
                })
                .then_effects(|effects| assertions::assert_redirect(effects, "/lists"))
                .run();
        }
    }

    #[test]
    fn test_show_and_edit_list() {
        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Work"), List::new("Home")]))
            .when_action(ListsAction::ShowList {
                list_id: "2".to_string(),
            })
            .then_state(|state| assert!(state.flash.is_empty()))
            .then_effects(|effects| {
                assertions::assert_render(effects, &ListsView::ShowList { index: 1 });
            })
            .run();

        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Work")]))
            .when_action(ListsAction::EditList {
                list_id: "1".to_string(),
            })
            .then_effects(|effects| {
                assertions::assert_render(
                    effects,
                    &ListsView::EditList {
                        index: 0,
                        list_name: None,
                    },
                );
            })
            .run();
    }

    #[test]
    fn test_update_list_success() {
        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Work"), List::new("Home")]))
            .when_action(ListsAction::UpdateList {
                list_id: "2".to_string(),
                list_name: "house".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.lists[1].name, "House");
                assert_eq!(
                    last_flash(state),
                    &FlashMessage::success("List name successfully updated.")
                );
            })
            .then_effects(|effects| assertions::assert_redirect(effects, "/lists/2"))
            .run();
    }

    #[test]
    fn test_update_list_to_own_name_is_duplicate_by_default() {
        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Work")]))
            .when_action(ListsAction::UpdateList {
                list_id: "1".to_string(),
                list_name: "work".to_string(),
            })
            .then_state(|state| {
                assert_eq!(last_flash(state), &FlashMessage::error("List name must be unique."));
            })
            .then_effects(|effects| {
                assertions::assert_render(
                    effects,
                    &ListsView::EditList {
                        index: 0,
                        list_name: Some("work".to_string()),
                    },
                );
            })
            .run();
    }

    #[test]
    fn test_update_list_to_own_name_when_excluding_self() {
        ReducerTest::new(ListsReducer::new())
            .with_env(ListsEnvironment::new(RenamePolicy::ExcludeSelf))
            .given_state(session_with(vec![List::new("Work"), List::new("Home")]))
            .when_action(ListsAction::UpdateList {
                list_id: "1".to_string(),
                list_name: "work".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.lists[0].name, "Work");
                assert_eq!(last_flash(state).kind, FlashKind::Success);
            })
            .then_effects(|effects| assertions::assert_redirect(effects, "/lists/1"))
            .run();

        ReducerTest::new(ListsReducer::new())
            .with_env(ListsEnvironment::new(RenamePolicy::ExcludeSelf))
            .given_state(session_with(vec![List::new("Work"), List::new("Home")]))
            .when_action(ListsAction::UpdateList {
                list_id: "1".to_string(),
                list_name: "home".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.lists[0].name, "Work");
                assert_eq!(last_flash(state), &FlashMessage::error("List name must be unique."));
            })
            .run();
    }

    #[test]
    fn test_delete_list_shifts_later_lists() {
        let reducer = ListsReducer::new();
        let env = test_env();
        let mut state = session_with(vec![List::new("A"), List::new("B"), List::new("C")]);

        let effects = reducer.reduce(
            &mut state,
            ListsAction::DeleteList {
                list_id: "2".to_string(),
            },
            &env,
        );

        assertions::assert_redirect(&effects, "/lists");
        assert_eq!(last_flash(&state), &FlashMessage::success("List 'B' has been removed."));
        assert_eq!(
            accessor::locate_list(&state.lists, "2"),
            Lookup::Found(1)
        );
        assert_eq!(state.lists[1].name, "C"
        );
        assert_eq!(state.lists.len(), 2);
    }

    #[test]
    fn test_complete_all() {
        let mut list = List::new("Chores");
        list.todos = vec![todo("Dishes", true), todo("Laundry", false), todo("Vacuum", true)];
        let reducer = ListsReducer::new();
        let env = test_env();
        let mut state = session_with(vec![list]);
        let action = ListsAction::CompleteAll {
            list_id: "1".to_string(),
        };

        let effects = reducer.reduce(&mut state, action.clone(), &env);
        assertions::assert_redirect(&effects, "/lists/1");
        assert!(state.lists[0].todos.iter().all(|todo| todo.completed));
        assert_eq!(last_flash(&state), &FlashMessage::success("All todos marked completed"));

        let before = state.lists.clone();
        reducer.reduce(&mut state, action, &env);
        assert_eq!(state.lists, before);
    }

    #[test]
    fn test_add_todo_boundaries() {
        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Work")]))
            .when_action(ListsAction::AddTodo {
                list_id: "1".to_string(),
                todo_name: "a".repeat(100),
            })
            .then_state(|state| {
                assert_eq!(state.lists[0].todos.len(), 1);
                assert!(!state.lists[0].todos[0].completed);
                assert_eq!(last_flash(state).kind, FlashKind::Success);
            })
            .then_effects(|effects| assertions::assert_redirect(effects, "/lists/1"))
            .run();

        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Work")]))
            .when_action(ListsAction::AddTodo {
                list_id: "1".to_string(),
                todo_name: "a".repeat(101),
            })
            .then_state(|state| {
                assert!(state.lists[0].todos.is_empty());
                assert_eq!(
                    last_flash(state),
                    &FlashMessage::error("Todo must be between 1 and 100 characters.")
                );
            })
            .then_effects(|effects| assertions::assert_redirect(effects, "/lists/1"))
            .run();
    }

    #[test]
    fn test_add_todo_normalizes_name() {
        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Work")]))
            .when_action(ListsAction::AddTodo {
                list_id: "1".to_string(),
                todo_name: "  buy   MILK ".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.lists[0].todos, vec![todo("Buy Milk", false)]);
                assert_eq!(
                    last_flash(state),
                    &FlashMessage::success("Todo 'Buy Milk' has been added.")
                );
            })
            .run();
    }

    #[test]
    fn test_toggle_todo_is_silent_and_idempotent() {
        let mut list = List::new("Work");
        list.todos.push(todo("Email", false));
        let reducer = ListsReducer::new();
        let env = test_env();
        let mut state = session_with(vec![list]);
        let toggle = |value: &str| ListsAction::ToggleTodo {
            list_id: "1".to_string(),
            todo_id: "1".to_string(),
            completed: value.to_string(),
        };

        let effects = reducer.reduce(&mut state, toggle("true"), &env);
        assertions::assert_redirect(&effects, "/lists/1");
        assert!(state.lists[0].todos[0].completed);

        reducer.reduce(&mut state, toggle("true"), &env);
        assert!(state.lists[0].todos[0].completed);

        reducer.reduce(&mut state, toggle("false"), &env);
        assert!(!state.lists[0].todos[0].completed);

        reducer.reduce(&mut state, toggle("TRUE"), &env);
        assert!(!state.lists[0].todos[0].completed);

        assert!(state.flash.is_empty());
    }

    #[test]
    fn test_toggle_missing_todo() {
        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![List::new("Work")]))
            .when_action(ListsAction::ToggleTodo {
                list_id: "1".to_string(),
                todo_id: "1".to_string(),
                completed: "true".to_string(),
            })
            .then_state(|state| {
                assert_eq!(
                    last_flash(state),
                    &FlashMessage::error("The specified todo was not found.")
                );
            })
            .then_effects(|effects| assertions::assert_redirect(effects, "/lists/1"))
            .run();
    }

    #[test]
    fn test_delete_todo() {
        let mut list = List::new("Work");
        list.todos = vec![todo("Email", false), todo("Report", true)];

        ReducerTest::new(ListsReducer::new())
            .with_env(test_env())
            .given_state(session_with(vec![list]))
            .when_action(ListsAction::DeleteTodo {
                list_id: "1".to_string(),
                todo_id: "1".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.lists[0].todos, vec![todo("Report", true)]);
                assert_eq!(
                    last_flash(state),
                    &FlashMessage::success("Todo 'Email' has been removed.")
                );
            })
            .then_effects(|effects| assertions::assert_redirect(effects, "/lists/1"))
            .run();
    }

    #[test]
    fn test_mutations_on_missing_list_leave_state_alone() {
        let actions = vec![
            ListsAction::DeleteList { list_id: "5".to_string() },
            ListsAction::CompleteAll { list_id: "0".to_string() },
            ListsAction::AddTodo {
                list_id: "x".to_string(),
                todo_name: "Milk".to_string(),
            },
            ListsAction::DeleteTodo {
                list_id: "-1".to_string(),
                todo_id: "1".to_string(),
            },
        ];

        for action in actions {
            ReducerTest::new(ListsReducer::new())
                .with_env(test_env())
                .given_state(session_with(vec![List::new("Work")]))
                .when_action(action)
                .then_state(|state| {
                    assert_eq!(state.lists, vec![List::new("Work")]);
                    assert_eq!(state.flash.len(), 1);
                })
                .then_effects(|effects| assertions::assert_redirect(effects, "/lists"))
                .run();
        }
    }

    fn list_scoped_actions(list_id: &str) -> Vec<ListsAction> {
        let list_id = list_id.to_string();
        vec![
            ListsAction::ShowList { list_id: list_id.clone() },
            ListsAction::EditList { list_id: list_id.clone() },
            ListsAction::UpdateList {
                list_id: list_id.clone(),
                list_name: "Home".to_string(),
            },
            ListsAction::DeleteList { list_id: list_id.clone() },
            ListsAction::CompleteAll { list_id: list_id.clone() },
            ListsAction::AddTodo {
                list_id: list_id.clone(),
                todo_name: "Milk".to_string(),
            },
            ListsAction::ToggleTodo {
                list_id: list_id.clone(),
                todo_id: "1".to_string(),
                completed: "true".to_string(),
            },
            ListsAction::DeleteTodo {
                list_id,
                todo_id: "1".to_string(),
            },
        ]
    }

    #[test]
    fn test_every_list_route_checks_the_list_first() {
        for action in list_scoped_actions("2") {
            let name = action.name();
            let mut state = session_with(vec![List::new("Work")]);

            let effects = ListsReducer::new().reduce(&mut state, action, &test_env());

            assertions::assert_redirect(&effects, "/lists");
            assert_eq!(
                last_flash(&state),
                &FlashMessage::error("The specified list was not found."),
                "{name}"
            );
        }
    }

    #[test]
    fn test_every_list_route_answers_once_for_existing_list() {
        for action in list_scoped_actions("1") {
            let name = action.name();
            let mut list = List::new("Work");
            list.todos.push(todo("Email", false));
            let mut state = session_with(vec![list]);

            let effects = ListsReducer::new().reduce(&mut state, action, &test_env());

            assertions::assert_single_response(&effects);
            assert!(
                state.flash.iter().all(|flash| flash.kind == FlashKind::Success),
                "{name}: {:?}",
                state.flash
            );
        }
    }
}
