//! PostgreSQL-backed `UserStore` adapter using Diesel ORM.
//!
//! Name uniqueness is enforced by the `users_name_key` constraint. The
//! adapter never checks for an existing name before writing; a unique
//! violation from the database is reported as a conflict.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{ListLimit, User, UserId, UserName};

use super::error_mapping::{map_diesel_error, map_name_write_error, map_pool_error};
use super::models::{NewUserRow, UserRename, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the user store port.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    /// Create a store over an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserStoreError> {
    let name = UserName::new(row.name).map_err(|err| {
        UserStoreError::query(format!("stored user {} is invalid: {err}", row.id))
    })?;
    Ok(User::new(UserId::new(row.id), name))
}

fn rows_to_users(rows: Vec<UserRow>) -> Result<Vec<User>, UserStoreError> {
    rows.into_iter().map(row_to_user).collect()
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn list(&self, limit: ListLimit) -> Result<Vec<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .limit(limit.get())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_users(rows)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn create(&self, name: &UserName) -> Result<User, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow {
                name: name.as_str(),
            })
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_name_write_error(err, name.as_str()))?;
        row_to_user(row)
    }

    async fn update(&self, id: UserId, name: &UserName) -> Result<User, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = diesel::update(users::table.find(id.get()))
            .set(UserRename {
                name: name.as_str(),
                updated_at: Utc::now(),
            })
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_name_write_error(err, name.as_str()))?;
        row.map(row_to_user)
            .transpose()?
            .ok_or_else(|| UserStoreError::not_found(id))
    }

    async fn delete(&self, id: UserId) -> Result<(), UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if removed == 0 {
            return Err(UserStoreError::not_found(id));
        }
        Ok(())
    }

    async fn bulk_create(&self, names: &[UserName]) -> Result<Vec<User>, UserStoreError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_rows: Vec<NewUserRow<'_>> = names
            .iter()
            .map(|name| NewUserRow {
                name: name.as_str(),
            })
            .collect();

        // A single multi-row INSERT is atomic, so one duplicate rejects the
        // whole batch.
        let mut rows: Vec<UserRow> = diesel::insert_into(users::table)
            .values(&new_rows)
            .returning(UserRow::as_returning())
            .get_results(&mut conn)
            .await
            .map_err(|err| map_name_write_error(err, &batch_label(names)))?;
        rows.sort_by_key(|row| row.id);
        debug!(count = rows.len(), "bulk inserted users");
        rows_to_users(rows)
    }

    async fn reset(&self) -> Result<(), UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::sql_query("TRUNCATE TABLE users RESTART IDENTITY")
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}

/// The database does not report which row of a batch collided, so the
/// conflict names the first duplicate within the batch when there is one.
fn batch_label(names: &[UserName]) -> String {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .find(|name| !seen.insert(name.as_str()))
        .or_else(|| names.first())
        .map(|name| name.as_str().to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn names(raw: &[&str]) -> Vec<UserName> {
        raw.iter()
            .map(|name| UserName::new(*name).expect("valid name"))
            .collect()
    }

    #[rstest]
    #[case(&["alice", "bek", "alice"], "alice")]
    #[case(&["daniel", "erin"], "daniel")]
    fn batch_label_prefers_in_batch_duplicates(#[case] raw: &[&str], #[case] expected: &str) {
        assert_eq!(batch_label(&names(raw)), expected);
    }

    #[rstest]
    fn row_to_user_rejects_blank_names() {
        let err = row_to_user(UserRow {
            id: 7,
            name: "  ".to_owned(),
        })
        .expect_err("blank stored name");
        assert!(matches!(err, UserStoreError::Query { .. }));
    }
}
