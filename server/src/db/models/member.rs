//! Member Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub type MemberId = Thing;

/// Member category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    Individual,
    Business,
    Corporate,
}

/// Member entity matching the `member` table
///
/// `email` is unique across all members, enforced by a store-level
/// unique index (see [`crate::db::DbService`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(
        with = "super::serde_thing::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<MemberId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub member_type: MemberType,
    pub company: Option<String>,
    /// Unix millis, set at insert
    pub created_at: i64,
}

/// Create member payload (POST /api/members)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub member_type: MemberType,
    #[serde(default)]
    pub company: Option<String>,
}
