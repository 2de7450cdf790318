//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables. Each entity gets its
//! own repository over a shared [`BaseRepository`]; no entity references
//! another entity's identifier, so there are no cross-table operations.

pub mod member;
pub mod order;
pub mod print_file;

// Re-exports
pub use member::MemberRepository;
pub use order::OrderRepository;
pub use print_file::PrintFileRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: the API accepts both "table:id" and bare ids
// =============================================================================

/// Strip a leading "table:" prefix from an id, if present
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Build a record pointer from a table name and a pure id
pub fn make_thing(table: &str, pure_id: &str) -> Thing {
    Thing::from((table, pure_id))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_prefix_handles_both_forms() {
        assert_eq!(strip_table_prefix("member", "member:abc"), "abc");
        assert_eq!(strip_table_prefix("member", "abc"), "abc");
        // Prefix of a different table is left alone
        assert_eq!(strip_table_prefix("member", "order:abc"), "order:abc");
    }
}
