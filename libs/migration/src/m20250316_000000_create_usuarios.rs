use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(big_integer(Usuarios::Id).auto_increment().primary_key())
                    .col(
                        ColumnDef::new(Usuarios::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(string_null(Usuarios::Password))
                    .col(string_null(Usuarios::Nombre))
                    .col(string_null(Usuarios::Apellido))
                    .col(string_null(Usuarios::Telefono))
                    .col(boolean(Usuarios::Enabled).default(true))
                    .col(string_null(Usuarios::Perfil))
                    .to_owned(),
            )
            .await?;

        // Role ids are assigned by callers, never generated
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(big_integer(Roles::Id).primary_key())
                    .col(string(Roles::Nombre))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsuarioRol::Table)
                    .if_not_exists()
                    .col(big_integer(UsuarioRol::Id).auto_increment().primary_key())
                    .col(big_integer(UsuarioRol::UsuarioId))
                    .col(big_integer(UsuarioRol::RolId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuario_rol_usuario")
                            .from(UsuarioRol::Table, UsuarioRol::UsuarioId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuario_rol_rol")
                            .from(UsuarioRol::Table, UsuarioRol::RolId)
                            .to(Roles::Table, Roles::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_usuario_rol_usuario_id")
                    .table(UsuarioRol::Table)
                    .col(UsuarioRol::UsuarioId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsuarioRol::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
    Username,
    Password,
    Nombre,
    Apellido,
    Telefono,
    Enabled,
    Perfil,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
    Nombre,
}

#[derive(DeriveIden)]
enum UsuarioRol {
    Table,
    Id,
    UsuarioId,
    RolId,
}
