pub mod schema;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;

use crate::error::Resultado;

pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    /// Abre (o crea) la base de datos en el directorio de datos del sistema.
    pub fn new() -> Resultado<Self> {
        let db_path = Self::ruta_por_defecto();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        Self::abrir(&db_path)
    }

    /// Abre (o crea) la base de datos en la ruta indicada.
    pub fn abrir(ruta: &Path) -> Resultado<Self> {
        let conn = Connection::open(ruta)?;
        let db = Self::preparar(conn)?;
        tracing::debug!(ruta = %ruta.display(), "base de datos abierta");
        Ok(db)
    }

    /// Base de datos en memoria, para pruebas o uso efimero.
    pub fn en_memoria() -> Resultado<Self> {
        let conn = Connection::open_in_memory()?;
        Self::preparar(conn)
    }

    fn preparar(conn: Connection) -> Resultado<Self> {
        // Optimizaciones SQLite
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA cache_size = -8000;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;

        schema::create_tables(&conn)?;

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    fn ruta_por_defecto() -> PathBuf {
        let mut ruta = dir_datos().unwrap_or_else(|| PathBuf::from("."));
        ruta.push("registro-clientes.db");
        ruta
    }
}

/// Retorna el directorio de datos de la aplicacion
fn dir_datos() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("LOCALAPPDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("RegistroClientes"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .ok()
            .map(|p| PathBuf::from(p).join(".registro-clientes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_memoria_deja_el_esquema_listo() {
        let db = Database::en_memoria().unwrap();
        let conn = db.conn.lock().unwrap();
        let total: i64 = conn
            .query_row("SELECT COUNT(*) FROM clientes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn abrir_crea_el_archivo_con_el_esquema() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = dir.path().join("clientes.db");

        let db = Database::abrir(&ruta).unwrap();
        let conn = db.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO clientes (nombre, cpf) VALUES ('Ana', '111')",
            [],
        )
        .unwrap();

        assert!(ruta.exists());
    }
}
