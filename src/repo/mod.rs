pub mod clientes;

pub use clientes::*;
