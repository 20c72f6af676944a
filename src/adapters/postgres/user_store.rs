//! PostgreSQL adapter for UserReader and UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, FirebaseUid, UserId};
use crate::domain::user::UserProfile;
use crate::ports::{UserReader, UserRepository};

/// PostgreSQL implementation of the user ports over the `users` table.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::postgres::PgRow) -> Result<UserProfile, DomainError> {
        let id: i64 = row.get("id");
        let firebase_uid: String = row.get("firebase_uid");
        let age: i32 = row.get("age");
        let gender: String = row.get("gender");
        let created_at: DateTime<Utc> = row.get("created_at");

        let uid = FirebaseUid::new(firebase_uid)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;
        UserProfile::new(UserId::new(id), uid, age, gender, created_at)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))
    }
}

#[async_trait]
impl UserReader for PgUserStore {
    async fn find_by_external_id(
        &self,
        uid: &FirebaseUid,
    ) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, firebase_uid, age, gender, created_at
            FROM users
            WHERE firebase_uid = $1
            "#,
        )
        .bind(uid.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e)))?;

        row.as_ref().map(Self::row_to_profile).transpose()
    }
}

#[async_trait]
impl UserRepository for PgUserStore {
    async fn upsert(
        &self,
        uid: &FirebaseUid,
        age: i32,
        gender: &str,
    ) -> Result<UserProfile, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (firebase_uid, age, gender, created_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (firebase_uid)
            DO UPDATE SET age = EXCLUDED.age, gender = EXCLUDED.gender
            RETURNING id, firebase_uid, age, gender, created_at
            "#,
        )
        .bind(uid.as_str())
        .bind(age)
        .bind(gender)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e)))?;

        Self::row_to_profile(&row)
    }
}
