pub mod cliente;

pub use cliente::*;
