use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub nombre: String,
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

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Role {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
        }
    }
}
