//! SeaORM entities for the `usuarios`, `roles` and `usuario_rol` tables

pub mod rol;
pub mod usuario;
pub mod usuario_rol;
