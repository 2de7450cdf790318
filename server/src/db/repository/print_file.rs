//! Print File Repository

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{PrintFile, PrintFileCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "print_file";

#[derive(Clone)]
pub struct PrintFileRepository {
    base: BaseRepository,
}

impl PrintFileRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all uploaded files, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<PrintFile>> {
        let files: Vec<PrintFile> = self
            .base
            .db()
            .query("SELECT * FROM print_file ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(files)
    }

    /// Create a new file record
    pub async fn create(&self, data: PrintFileCreate) -> RepoResult<PrintFile> {
        let file = data.into_print_file();
        let created: Option<PrintFile> = self.base.db().create(TABLE).content(file).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create file record".to_string()))
    }

    /// Hard delete a file record; Ok(false) if the id matched nothing
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<PrintFile> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }
}
