//! Name normalization and validation.
//!
//! Names typed by the user are normalized first (every whitespace-separated
//! word capitalized, words rejoined with single spaces) and validated after.
//! Lengths are counted in characters.

use crate::types::List;
use std::fmt;
use thiserror::Error;

/// Longest accepted list name
pub const LIST_NAME_MAX: usize = 50;

/// Longest accepted todo name
pub const TODO_NAME_MAX: usize = 100;

/// What kind of name is being validated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    /// A list name
    List,
    /// A todo name
    Todo,
}

impl NameKind {
    /// Longest accepted name of this kind
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            Self::List => LIST_NAME_MAX,
            Self::Todo => TODO_NAME_MAX,
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("List name"),
            Self::Todo => f.write_str("Todo"),
        }
    }
}

/// What a position parameter failed to point at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// A list in the session
    List,
    /// A todo within a list
    Todo,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Todo => f.write_str("todo"),
        }
    }
}

/// Errors recovered by queuing a flash message
///
/// The `Display` output is the text shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Name too short or too long after normalization
    #[error("{kind} must be between 1 and {max} characters.")]
    InvalidLength {
        /// Which name was checked
        kind: NameKind,
        /// Upper bound that applied
        max: usize,
    },

    /// Another list already carries this name
    #[error("List name must be unique.")]
    DuplicateName,

    /// A position parameter does not name an existing item
    #[error("The specified {0} was not found.")]
    NotFound(Resource),
}

/// Capitalizes every whitespace-separated word and joins them with single spaces.
///
/// Each word gets a title-case first character and a lower-case remainder,
/// so `"  gROCERY   list "` becomes `"Grocery List"` and `"ǆem"` becomes
/// `"ǅem"`.
#[must_use]
pub fn capitalize(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut capitalized = String::with_capacity(word.len());
    push_titlecase(&mut capitalized, first);
    capitalized.extend(chars.flat_map(char::to_lowercase));
    capitalized
}

/// Appends the title-case form of `c`.
///
/// Only the Latin digraph letters and the Greek letters with iota subscript
/// have a title case distinct from their upper case. Other letters whose
/// upper case expands to several characters keep just the first one upper
/// (`ß` gives `Ss`, `ﬁ` gives `Fi`).
fn push_titlecase(out: &mut String, c: char) {
    if let Some(title) = single_titlecase(c) {
        out.push(title);
        return;
    }
    if c == '\u{0149}' {
        // ŉ keeps its apostrophe and upper-cases the n
        out.push_str("\u{02BC}N");
        return;
    }

    let mut upper = c.to_uppercase();
    if let Some(head) = upper.next() {
        out.push(head);
    }
    out.extend(upper.flat_map(char::to_lowercase));
}

fn single_titlecase(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(u32::from(c) + 8)
        }
        '\u{1F88}'..='\u{1F8F}'
        | '\u{1F98}'..='\u{1F9F}'
        | '\u{1FA8}'..='\u{1FAF}'
        | '\u{1FBC}'
        | '\u{1FCC}'
        | '\u{1FFC}' => Some(c),
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        _ => None,
    }
}

fn check_length(name: &str, kind: NameKind) -> Result<(), ListError> {
    let max = kind.max_len();
    if (1..=max).contains(&name.chars().count()) {
        Ok(())
    } else {
        Err(ListError::InvalidLength { kind, max })
    }
}

/// Validates a normalized list name against the session's lists.
///
/// Length is checked first; uniqueness is an exact, case-sensitive match
/// against every list except `skip` (the index of the list being renamed,
/// when the caller chooses to exclude it).
///
/// # Errors
///
/// Returns [`ListError::InvalidLength`] or [`ListError::DuplicateName`].
pub fn error_for_list_name(
    name: &str,
    lists: &[List],
    skip: Option<usize>,
) -> Result<(), ListError> {
    check_length(name, NameKind::List)?;

    let taken = lists
        .iter()
        .enumerate()
        .any(|(index, list)| Some(index) != skip && list.name == name);
    if taken {
        return Err(ListError::DuplicateName);
    }

    Ok(())
}

/// Validates a normalized todo name.
///
/// # Errors
///
/// Returns [`ListError::InvalidLength`] when the name is empty or longer
/// than [`TODO_NAME_MAX`] characters.
pub fn error_for_todo_name(name: &str) -> Result<(), ListError> {
    check_length(name, NameKind::Todo)
}
