use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Id of the role every new account receives
pub const NORMAL_ROLE_ID: i64 = 1;
pub const NORMAL_ROLE_NAME: &str = "NORMAL";

/// A persisted user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Stored as given; never written to responses
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub telefono: Option<String>,
    pub enabled: bool,
    pub perfil: Option<String>,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub id: i64,
    pub nombre: String,
}

impl Role {
    pub fn new(id: i64, nombre: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
        }
    }

    pub fn normal() -> Self {
        Self::new(NORMAL_ROLE_ID, NORMAL_ROLE_NAME)
    }
}

/// A role to link to a user being created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub role: Role,
}

impl RoleAssignment {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn normal() -> Self {
        Self::new(Role::normal())
    }
}

/// Request body for `POST /usuarios/`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "usuarioprueba")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "123456")]
    pub password: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    /// `enable` is accepted as well
    #[serde(default = "default_enabled", alias = "enable")]
    pub enabled: bool,
    #[serde(default)]
    pub perfil: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("username must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// A validated [`CreateUser`], ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub telefono: Option<String>,
    pub enabled: bool,
    pub perfil: Option<String>,
}

impl From<CreateUser> for NewUser {
    fn from(input: CreateUser) -> Self {
        Self {
            username: input.username,
            password: input.password,
            nombre: input.nombre,
            apellido: input.apellido,
            telefono: input.telefono,
            enabled: input.enabled,
            perfil: input.perfil,
        }
    }
}

impl NewUser {
    /// Attach the store-assigned id and resolved roles
    pub fn into_user(self, id: i64, roles: Vec<Role>) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            nombre: self.nombre,
            apellido: self.apellido,
            telefono: self.telefono,
            enabled: self.enabled,
            perfil: self.perfil,
            roles,
        }
    }
}
