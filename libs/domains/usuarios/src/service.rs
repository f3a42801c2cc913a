use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, RoleAssignment, User};
use crate::repository::UserRepository;

/// The only place with account policy: unique usernames and non-blank lookups
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create an account and link it to the assigned roles.
    ///
    /// Fails with [`UserError::DuplicateUsername`] before any write when the
    /// username is taken.
    pub async fn create_user(
        &self,
        input: CreateUser,
        assignments: Vec<RoleAssignment>,
    ) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        if self
            .repository
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            tracing::warn!(username = %input.username, "Username already exists");
            return Err(UserError::DuplicateUsername(input.username));
        }

        let roles = assignments.into_iter().map(|a| a.role).collect();
        let user = self.repository.save_with_roles(input.into(), roles).await?;

        tracing::info!(
            user_id = user.id,
            username = %user.username,
            role_count = user.roles.len(),
            "Created user"
        );
        Ok(user)
    }

    /// `Ok(None)` when no account has this username
    pub async fn get_user(&self, username: &str) -> UserResult<Option<User>> {
        if username.trim().is_empty() {
            return Err(UserError::InvalidUsername);
        }

        self.repository.find_by_username(username).await
    }

    pub async fn delete_user(&self, username: &str) -> UserResult<()> {
        if username.trim().is_empty() {
            return Err(UserError::InvalidUsername);
        }

        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;

        // Lost a race with a concurrent delete
        if !self.repository.delete(user.id).await? {
            return Err(UserError::NotFound(username.to_string()));
        }

        tracing::info!(user_id = user.id, username, "Deleted user");
        Ok(())
    }
}
