//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Order, OrderCreate, OrderStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "print_order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM print_order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let order: Option<Order> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(order)
    }

    /// Create a new order (pricing derived, status pending)
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let order = data.into_order();
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Update an order's status — the only mutable field after creation
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing SET status = $status")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
    }

    /// Hard delete one order; Ok(false) if the id matched nothing
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<Order> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }

    /// Hard delete every order, returning the number removed
    pub async fn delete_all(&self) -> RepoResult<usize> {
        let deleted: Vec<Order> = self.base.db().delete(TABLE).await?;
        Ok(deleted.len())
    }
}
