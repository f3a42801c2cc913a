use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub password: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub telefono: Option<String>,
    pub enabled: bool,
    pub perfil: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::usuario_rol::Entity")]
    UsuarioRol,
}

impl Related<super::usuario_rol::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsuarioRol.def()
    }
}

impl Related<super::rol::Entity> for Entity {
    fn to() -> RelationDef {
        super::usuario_rol::Relation::Rol.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::usuario_rol::Relation::Usuario.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Domain view of this row with its resolved roles
    pub fn into_user(self, roles: Vec<super::rol::Model>) -> crate::models::User {
        crate::models::User {
            id: self.id,
            username: self.username,
            password: self.password,
            nombre: self.nombre,
            apellido: self.apellido,
            telefono: self.telefono,
            enabled: self.enabled,
            perfil: self.perfil,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}
