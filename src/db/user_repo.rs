// src/db/user_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::{AppError, map_unique_violation},
    models::user::{Subscription, User, UserRole},
};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_user<'e, E>(
        &self,
        executor: E,
        fullname: &str,
        email: &str,
        phone: Option<&str>,
        address: Option<&str>,
        role: UserRole,
    ) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (fullname, email, phone, address, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, fullname, email, phone, address, role, metadata, created_at, updated_at
            "#,
        )
        .bind(fullname)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(role)
        .fetch_one(executor)
        .await
        .map_err(|e| map_unique_violation(e, AppError::EmailAlreadyExists))?;

        Ok(user)
    }

    pub async fn get_user<'e, E>(&self, executor: E, user_id: Uuid) -> Result<Option<User>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, fullname, email, phone, address, role, metadata, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

        Ok(user)
    }

    pub async fn get_all_users<'e, E>(&self, executor: E) -> Result<Vec<User>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, fullname, email, phone, address, role, metadata, created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(users)
    }

    pub async fn list_subscriptions<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Vec<Subscription>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let subs = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT id, user_id, plan_code, price, start_date, end_date, status, meta, created_at
            FROM subscriptions
            WHERE user_id = $1
            ORDER BY start_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(subs)
    }
}
