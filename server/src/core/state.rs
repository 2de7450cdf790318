//! Server State
//!
//! Shared handles for every request handler. Cloning is shallow: the
//! database handle and repositories share the same underlying connection,
//! which is safe for concurrent use by the store client's own contract.
//! There is no other in-process shared mutable state between requests.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::AdminCredentials;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{MemberRepository, OrderRepository, PrintFileRepository};
use crate::storage::BlobStore;

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database handle
    pub db: Surreal<Db>,
    /// Admin credential pair for the auth gate
    pub admin: AdminCredentials,
    /// Content-addressed payload storage
    pub blobs: BlobStore,
    /// Repositories
    pub orders: OrderRepository,
    pub members: MemberRepository,
    pub files: PrintFileRepository,
}

impl ServerState {
    fn with_db(config: Config, db: Surreal<Db>, blobs: BlobStore) -> Self {
        Self {
            admin: config.admin.clone(),
            orders: OrderRepository::new(db.clone()),
            members: MemberRepository::new(db.clone()),
            files: PrintFileRepository::new(db.clone()),
            config,
            db,
            blobs,
        }
    }

    /// Initialize state for a real deployment
    ///
    /// # Panics
    ///
    /// Panics when the work directory or database cannot be initialized —
    /// the server has nothing useful to do without them.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("printdesk.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let blobs = BlobStore::new(config.blobs_dir());

        Self::with_db(config.clone(), db_service.db, blobs)
    }

    /// Initialize state over an in-memory database (tests)
    pub async fn initialize_in_memory(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_service = DbService::new_memory()
            .await
            .expect("Failed to initialize in-memory database");

        let blobs = BlobStore::new(config.blobs_dir());

        Self::with_db(config.clone(), db_service.db, blobs)
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
