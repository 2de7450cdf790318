//! Member Repository

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Member, MemberCreate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "member";

#[derive(Clone)]
pub struct MemberRepository {
    base: BaseRepository,
}

impl MemberRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all members, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let members: Vec<Member> = self
            .base
            .db()
            .query("SELECT * FROM member ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(members)
    }

    /// Find member by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM member WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let members: Vec<Member> = result.take(0)?;
        Ok(members.into_iter().next())
    }

    /// Create a new member
    ///
    /// The pre-check gives the caller a friendly duplicate message; the
    /// store-level unique index on `email` is what actually closes the race
    /// between concurrent registrations.
    pub async fn create(&self, data: MemberCreate) -> RepoResult<Member> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate("Email already exists".to_string()));
        }

        let member = Member {
            id: None,
            name: data.name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            member_type: data.member_type,
            company: data.company,
            created_at: now_millis(),
        };

        let created: Result<Option<Member>, surrealdb::Error> =
            self.base.db().create(TABLE).content(member).await;

        match created {
            Ok(Some(m)) => Ok(m),
            Ok(None) => Err(RepoError::Database("Failed to create member".to_string())),
            // A concurrent registration can still hit the unique index
            Err(e) if e.to_string().contains("member_email_unique") => {
                Err(RepoError::Duplicate("Email already exists".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Hard delete a member; Ok(false) if the id matched nothing
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<Member> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }
}
