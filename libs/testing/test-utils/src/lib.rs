//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic user field generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let email = builder.email("primary");
//!     let born = builder.date_of_birth();
//! }
//! ```

use chrono::NaiveDate;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

const FIRST_NAMES: [&str; 6] = ["Emma", "Ada", "Grace", "Alan", "Linus", "Margaret"];
const LAST_NAMES: [&str; 6] = ["Watson", "Lovelace", "Hopper", "Turing", "Torvalds", "Hamilton"];

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same names, emails and dates, so failures
/// reproduce.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn first_name(&self) -> String {
        FIRST_NAMES[(self.seed % FIRST_NAMES.len() as u64) as usize].to_string()
    }

    pub fn last_name(&self) -> String {
        LAST_NAMES[((self.seed / 7) % LAST_NAMES.len() as u64) as usize].to_string()
    }

    /// Unique email per seed and `tag`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.email("main"), "test-12345-main@example.com");
    /// ```
    pub fn email(&self, tag: &str) -> String {
        format!("test-{}-{}@example.com", self.seed, tag)
    }

    /// A date between 1950-01-01 and roughly the end of 2004
    pub fn date_of_birth(&self) -> NaiveDate {
        let base = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or_default();
        base + chrono::Days::new(self.seed % 20_000)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a store-assigned id is present and positive
    pub fn assert_assigned_id(id: Option<i64>, context: &str) -> i64 {
        let id = assert_some(id, context);
        assert!(id > 0, "{}: expected a positive id, got {}", context, id);
        id
    }
}
