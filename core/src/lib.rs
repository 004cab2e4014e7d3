//! # Todo Lists Core
//!
//! Core traits and types for the todo lists application.
//!
//! Every request is handled the same way: the web shell turns the request
//! into an action, a reducer validates it and mutates the per-session state,
//! and the reducer answers with an effect describing the response (render a
//! view, or redirect somewhere else). The shell executes that description.
//!
//! ## Core Concepts
//!
//! - **State**: The session-owned data a reducer operates on
//! - **Action**: One input per route (create list, add todo, ...)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Response descriptions (not execution)
//! - **Environment**: Injected policy and dependencies
//!
//! ## Example
//!
//! ```
//! use todo_lists_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = u32;
//!     type Action = ();
//!     type Environment = ();
//!     type View = u32;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut u32,
//!         _action: (),
//!         _env: &(),
//!     ) -> SmallVec<[Effect<u32>; 4]> {
//!         *state += 1;
//!         let mut effects = SmallVec::new();
//!         effects.push(Effect::Render(*state));
//!         effects
//!     }
//! }
//!
//! let mut count = 0;
//! let effects = CounterReducer.reduce(&mut count, (), &());
//! assert_eq!(count, 1);
//! assert!(matches!(effects.as_slice(), [Effect::Render(1)]));
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::SmallVec;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all validation and mutation logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `View`: The render targets this reducer can ask the shell for
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// The view type rendered by [`Effect::Render`]
        type View;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns response descriptions to be executed by the shell
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::View>; 4]>;
    }
}

/// Effect module - Response descriptions
///
/// Effects are values returned from reducers. The web shell turns them into
/// HTTP responses; reducers never touch the transport themselves.
pub mod effect {
    /// Effect type - describes how a request should be answered
    ///
    /// # Type Parameters
    ///
    /// - `View`: The application's render target type
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<View> {
        /// No-op effect
        None,

        /// Stop processing and send the client to another path
        Redirect(String),

        /// Render a view from the (already mutated) state
        Render(View),
    }

    impl<View> Effect<View> {
        /// Build a redirect effect
        #[must_use]
        pub fn redirect(path: impl Into<String>) -> Self {
            Self::Redirect(path.into())
        }

        /// Returns the redirect target, if this is a redirect
        #[must_use]
        pub fn redirect_target(&self) -> Option<&str> {
            match self {
                Self::Redirect(path) => Some(path),
                Self::None | Self::Render(_) => None,
            }
        }

        /// Whether this effect answers the request
        #[must_use]
        pub const fn is_response(&self) -> bool {
            matches!(self, Self::Redirect(_) | Self::Render(_))
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// where they are needed.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
