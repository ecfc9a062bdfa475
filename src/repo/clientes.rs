use rusqlite::{params, OptionalExtension};

use crate::db::Database;
use crate::error::{Error, Resultado};
use crate::models::Cliente;

/// Inserta un cliente y retorna el id que asigno la base de datos.
/// El cliente debe tener sus datos personales cargados.
pub fn crear_cliente(db: &Database, cliente: &Cliente) -> Resultado<i64> {
    let conn = db.conn.lock().map_err(|_| Error::Conexion)?;

    conn.execute(
        "INSERT INTO clientes (nombre, cpf) VALUES (?1, ?2)",
        params![cliente.nombre(), cliente.cpf()],
    )?;

    let id = conn.last_insert_rowid();
    tracing::debug!(id, "cliente creado");
    Ok(id)
}

/// Reconstruye un cliente desde su fila. Retorna `None` si el id no existe.
pub fn obtener_cliente(db: &Database, id: i64) -> Resultado<Option<Cliente>> {
    let conn = db.conn.lock().map_err(|_| Error::Conexion)?;

    let cliente = conn
        .query_row(
            "SELECT id, nombre, cpf FROM clientes WHERE id = ?1",
            params![id],
            |row| Ok(Cliente::new(Some(row.get(0)?), row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    Ok(cliente)
}

/// Reescribe nombre y cpf del cliente indicado por su id.
pub fn actualizar_cliente(db: &Database, cliente: &Cliente) -> Resultado<()> {
    let conn = db.conn.lock().map_err(|_| Error::Conexion)?;
    let id = cliente.id().ok_or(Error::IdRequerido)?;

    conn.execute(
        "UPDATE clientes SET nombre=?1, cpf=?2,
         updated_at=datetime('now','localtime')
         WHERE id=?3",
        params![cliente.nombre(), cliente.cpf(), id],
    )?;

    tracing::debug!(id, "cliente actualizado");
    Ok(())
}

pub fn listar_clientes(db: &Database) -> Resultado<Vec<Cliente>> {
    let conn = db.conn.lock().map_err(|_| Error::Conexion)?;

    let mut stmt = conn.prepare("SELECT id, nombre, cpf FROM clientes ORDER BY nombre")?;

    let clientes = stmt
        .query_map([], |row| {
            Ok(Cliente::new(Some(row.get(0)?), row.get(1)?, row.get(2)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(clientes)
}

/// Busca por fragmento de nombre o de cpf.
pub fn buscar_clientes(db: &Database, termino: &str) -> Resultado<Vec<Cliente>> {
    let conn = db.conn.lock().map_err(|_| Error::Conexion)?;
    let busqueda = format!("%{}%", termino);

    let mut stmt = conn.prepare(
        "SELECT id, nombre, cpf FROM clientes
         WHERE nombre LIKE ?1 OR cpf LIKE ?1
         ORDER BY nombre LIMIT 30",
    )?;

    let clientes = stmt
        .query_map(params![busqueda], |row| {
            Ok(Cliente::new(Some(row.get(0)?), row.get(1)?, row.get(2)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(clientes)
}
