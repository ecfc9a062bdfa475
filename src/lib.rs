//! Registro de clientes: el modelo `Cliente` con sus datos personales
//! embebidos y la capa de acceso a datos sobre SQLite.

pub mod db;
pub mod error;
pub mod models;
pub mod repo;

pub use db::Database;
pub use error::{Error, Resultado};
pub use models::{Cliente, DatosPersonales};
