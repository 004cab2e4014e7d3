//! # Todo Lists Testing
//!
//! Testing utilities for the todo lists application.
//!
//! This crate provides:
//! - `ReducerTest`: Given/When/Then harness for reducers
//! - Effect assertions (`assert_redirect`, `assert_render`, ...)
//! - `FixedClock` for deterministic session expiry
//!
//! ## Example
//!
//! ```ignore
//! use todo_lists_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(ListsReducer::new())
//!     .with_env(ListsEnvironment::default())
//!     .given_state(SessionState::new())
//!     .when_action(ListsAction::CreateList { list_name: "work".into() })
//!     .then_state(|state| assert_eq!(state.lists[0].name, "Work"))
//!     .then_effects(|effects| assertions::assert_redirect(effects, "/lists"))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use todo_lists_core::environment::Clock;


pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use std::sync::{Arc, Mutex, PoisonError};

    /// Fixed clock for deterministic tests
    ///
    /// Returns the same time until it is explicitly advanced. Clones share
    /// the same underlying time, so a test can keep a handle while the code
    /// under test owns another.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_lists_testing::mocks::FixedClock;
    /// use todo_lists_core::environment::Clock;
    /// use chrono::{Duration, Utc};
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// assert_eq!(time1, clock.now());
    ///
    /// clock.advance(Duration::seconds(5));
    /// assert_eq!(clock.now() - time1, Duration::seconds(5));
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: Arc<Mutex<DateTime<Utc>>>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub fn new(time: DateTime<Utc>) -> Self {
            Self {
                time: Arc::new(Mutex::new(time)),
            }
        }

        /// Move the clock forward
        pub fn advance(&self, by: chrono::Duration) {
            let mut time = self.time.lock().unwrap_or_else(PoisonError::into_inner);
            *time += by;
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            *self.time.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{test_clock, FixedClock};
