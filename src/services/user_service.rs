// src/services/user_service.rs

use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::{error::AppError, policy},
    db::UserRepository,
    models::user::{CreateUserPayload, PanelAccessResponse, Subscription, User, UserRole},
};

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn create_user<'e, E>(
        &self,
        executor: E,
        payload: &CreateUserPayload,
    ) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .create_user(
                executor,
                &payload.fullname,
                &payload.email,
                payload.phone.as_deref(),
                payload.address.as_deref(),
                payload.role.unwrap_or(UserRole::Customer),
            )
            .await
    }

    pub async fn get_user<'e, E>(&self, executor: E, user_id: Uuid) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .get_user(executor, user_id)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    pub async fn get_all_users<'e, E>(&self, executor: E) -> Result<Vec<User>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.get_all_users(executor).await
    }

    pub async fn list_subscriptions<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Vec<Subscription>, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        self.repo
            .get_user(&mut *tx, user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let subs = self.repo.list_subscriptions(&mut *tx, user_id).await?;

        tx.commit().await?;
        Ok(subs)
    }

    /// Acesso ao painel decidido pela função de política sobre o papel.
    pub async fn panel_access<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<PanelAccessResponse, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let user = self.get_user(executor, user_id).await?;

        Ok(PanelAccessResponse {
            user_id: user.id,
            role: user.role,
            can_access_panel: policy::can_access_panel(&user),
        })
    }
}
