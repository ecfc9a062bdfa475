use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error de base de datos: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("ID requerido para actualizar")]
    IdRequerido,

    #[error("la conexion a la base de datos no esta disponible")]
    Conexion,
}

pub type Resultado<T> = std::result::Result<T, Error>;
