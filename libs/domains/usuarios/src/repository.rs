use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, Role, User};

/// Storage for users, roles and their association rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Exact-match lookup, roles resolved through the association rows
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// In one transaction: upsert every role by id, insert the user, then link
    /// each role to it. A taken username fails with
    /// [`UserError::DuplicateUsername`] and writes nothing.
    async fn save_with_roles(&self, user: NewUser, roles: Vec<Role>) -> UserResult<User>;

    /// Remove the user and its association rows. Returns whether a user was removed.
    async fn delete(&self, id: i64) -> UserResult<bool>;
}

#[derive(Debug, Default)]
struct Tables {
    usuarios: HashMap<i64, NewUser>,
    roles: HashMap<i64, String>,
    /// (usuario_id, rol_id), insertion ordered
    usuario_rol: Vec<(i64, i64)>,
    next_usuario_id: i64,
}

impl Tables {
    fn roles_of(&self, usuario_id: i64) -> Vec<Role> {
        self.usuario_rol
            .iter()
            .filter(|(uid, _)| *uid == usuario_id)
            .filter_map(|(_, rol_id)| {
                self.roles
                    .get(rol_id)
                    .map(|nombre| Role::new(*rol_id, nombre.clone()))
            })
            .collect()
    }
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let tables = self.tables.read().await;

        let found = tables
            .usuarios
            .iter()
            .find(|(_, u)| u.username == username)
            .map(|(id, u)| u.clone().into_user(*id, tables.roles_of(*id)));

        Ok(found)
    }

    async fn save_with_roles(&self, user: NewUser, roles: Vec<Role>) -> UserResult<User> {
        // Single write lock: the duplicate check and the inserts are one unit
        let mut tables = self.tables.write().await;

        if tables.usuarios.values().any(|u| u.username == user.username) {
            return Err(UserError::DuplicateUsername(user.username));
        }

        for role in &roles {
            tables.roles.insert(role.id, role.nombre.clone());
        }

        tables.next_usuario_id += 1;
        let id = tables.next_usuario_id;
        tables.usuarios.insert(id, user.clone());

        for role in &roles {
            tables.usuario_rol.push((id, role.id));
        }

        tracing::info!(
            user_id = id,
            username = %user.username,
            role_count = roles.len(),
            "Saved user"
        );
        Ok(user.into_user(id, tables.roles_of(id)))
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut tables = self.tables.write().await;

        if tables.usuarios.remove(&id).is_none() {
            return Ok(false);
        }
        tables.usuario_rol.retain(|(uid, _)| *uid != id);

        tracing::info!(user_id = id, "Deleted user");
        Ok(true)
    }
}
