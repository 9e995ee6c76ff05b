//! `SeaORM` entities for the todo database.

pub mod todo;
