use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, SqlErr, TransactionTrait,
};

use crate::{
    entity::{rol, usuario, usuario_rol},
    error::{UserError, UserResult},
    models::{NewUser, Role, User},
    repository::UserRepository,
};

/// SeaORM-backed store over the `usuarios`, `roles` and `usuario_rol` tables
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A unique violation on insert can only come from `usuarios.username`
fn map_insert_error(err: DbErr, username: &str) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            UserError::DuplicateUsername(username.to_string())
        }
        _ => err.into(),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let Some(model) = usuario::Entity::find()
            .filter(usuario::Column::Username.eq(username))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let roles = model.find_related(rol::Entity).all(&self.db).await?;
        Ok(Some(model.into_user(roles)))
    }

    async fn save_with_roles(&self, user: NewUser, roles: Vec<Role>) -> UserResult<User> {
        let username = user.username.clone();
        let txn = self.db.begin().await?;

        // Roles first, the association rows reference them
        for role in &roles {
            rol::Entity::insert(rol::ActiveModel {
                id: Set(role.id),
                nombre: Set(role.nombre.clone()),
            })
            .on_conflict(
                OnConflict::column(rol::Column::Id)
                    .update_column(rol::Column::Nombre)
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        }

        let model = usuario::ActiveModel {
            id: NotSet,
            username: Set(user.username),
            password: Set(user.password),
            nombre: Set(user.nombre),
            apellido: Set(user.apellido),
            telefono: Set(user.telefono),
            enabled: Set(user.enabled),
            perfil: Set(user.perfil),
        }
        .insert(&txn)
        .await
        .map_err(|e| map_insert_error(e, &username))?;

        if !roles.is_empty() {
            let links = roles.iter().map(|role| usuario_rol::ActiveModel {
                id: NotSet,
                usuario_id: Set(model.id),
                rol_id: Set(role.id),
            });
            usuario_rol::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            user_id = model.id,
            username = %username,
            role_count = roles.len(),
            "Saved user"
        );
        let mut saved = model.into_user(Vec::new());
        saved.roles = roles;
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let txn = self.db.begin().await?;

        usuario_rol::Entity::delete_many()
            .filter(usuario_rol::Column::UsuarioId.eq(id))
            .exec(&txn)
            .await?;
        let result = usuario::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
