//! Page rendering with minijinja.
//!
//! Templates are compiled into the binary. Names end in `.html`, which turns
//! on minijinja's HTML auto-escaping for every interpolated value.
//!
//! Rendering a page drains the session's flash queue: each message is shown
//! exactly once.

use minijinja::{context, Environment, Error, ErrorKind};
use serde::Serialize;
use todo_lists::ordering::{list_complete, sort_lists, sort_todos, todos_remaining};
use todo_lists::{FlashMessage, List, ListsView, SessionState};

const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.html");
const LISTS_TEMPLATE: &str = include_str!("../templates/lists.html");
const NEW_LIST_TEMPLATE: &str = include_str!("../templates/new_list.html");
const SHOW_LIST_TEMPLATE: &str = include_str!("../templates/show_list.html");
const EDIT_LIST_TEMPLATE: &str = include_str!("../templates/edit_list.html");

/// Flash message as the layout shows it
#[derive(Debug, Clone, Serialize)]
struct FlashContext {
    class: String,
    text: String,
}

impl From<FlashMessage> for FlashContext {
    fn from(message: FlashMessage) -> Self {
        Self {
            class: format!("flash {}", message.kind.as_str()),
            text: message.text,
        }
    }
}

/// One row of the list index
#[derive(Debug, Clone, Serialize)]
struct ListSummary<'a> {
    position: usize,
    name: &'a str,
    complete: bool,
    todos_count: usize,
    todos_remaining: usize,
}

/// One todo on a list page
#[derive(Debug, Clone, Serialize)]
struct TodoContext<'a> {
    position: usize,
    name: &'a str,
    completed: bool,
}

/// A list with its todos in display order
#[derive(Debug, Clone, Serialize)]
struct ListContext<'a> {
    position: usize,
    name: &'a str,
    complete: bool,
    todos_count: usize,
    todos_remaining: usize,
    todos: Vec<TodoContext<'a>>,
}

impl<'a> ListContext<'a> {
    fn new(index: usize, list: &'a List) -> Self {
        Self {
            position: index + 1,
            name: &list.name,
            complete: list_complete(list),
            todos_count: list.todos.len(),
            todos_remaining: todos_remaining(list),
            todos: sort_todos(&list.todos)
                .into_iter()
                .map(|(position, todo)| TodoContext {
                    position,
                    name: &todo.name,
                    completed: todo.completed,
                })
                .collect(),
        }
    }
}

/// Template engine wrapper around minijinja.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compile the bundled templates.
    ///
    /// # Errors
    ///
    /// Returns error if a template has a syntax error.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT_TEMPLATE)?;
        env.add_template("lists.html", LISTS_TEMPLATE)?;
        env.add_template("new_list.html", NEW_LIST_TEMPLATE)?;
        env.add_template("show_list.html", SHOW_LIST_TEMPLATE)?;
        env.add_template("edit_list.html", EDIT_LIST_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render `view` from `session`, consuming its queued flash messages.
    ///
    /// # Errors
    ///
    /// Returns error if the view names a list the session does not hold or
    /// the template fails to render.
    pub fn render(&self, view: &ListsView, session: &mut SessionState) -> Result<String, Error> {
        let flash: Vec<FlashContext> = session.take_flash().into_iter().map(Into::into).collect();
        let lists = &session.lists;

        match view {
            ListsView::Lists => {
                let summaries: Vec<ListSummary<'_>> = sort_lists(lists)
                    .into_iter()
                    .map(|(position, list)| ListSummary {
                        position,
                        name: &list.name,
                        complete: list_complete(list),
                        todos_count: list.todos.len(),
                        todos_remaining: todos_remaining(list),
                    })
                    .collect();
                self.env
                    .get_template("lists.html")?
                    .render(context! { flash, lists => summaries })
            }
            ListsView::NewList { list_name } => self
                .env
                .get_template("new_list.html")?
                .render(context! { flash, list_name }),
            ListsView::ShowList { index } => {
                let list = ListContext::new(*index, list_at(lists, *index)?);
                self.env
                    .get_template("show_list.html")?
                    .render(context! { flash, list })
            }
            ListsView::EditList { index, list_name } => {
                let stored = list_at(lists, *index)?;
                let list_name = list_name.as_deref().unwrap_or(&stored.name);
                let list = ListContext::new(*index, stored);
                self.env
                    .get_template("edit_list.html")?
                    .render(context! { flash, list, list_name })
            }
        }
    }
}

fn list_at(lists: &[List], index: usize) -> Result<&List, Error> {
    lists.get(index).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("no list at index {index}"),
        )
    })
}
