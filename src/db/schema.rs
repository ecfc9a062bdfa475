use rusqlite::Connection;

/// Estrategia de generacion del identificador de una entidad.
#[derive(Debug, Clone, Copy)]
pub enum GeneracionId {
    /// El motor de almacenamiento asigna el id al insertar.
    Autoincremental,
}

/// Mapeo declarativo de una entidad a su tabla. La capa de acceso a datos
/// lo interpreta al crear el esquema; las consultas quedan escritas contra
/// las mismas columnas.
#[derive(Debug)]
pub struct MapeoTabla {
    pub tabla: &'static str,
    pub columna_id: &'static str,
    pub generacion: GeneracionId,
    /// Columnas del objeto embebido, aplanadas en la misma fila.
    pub columnas_embebidas: &'static [&'static str],
}

/// Mapeo de la entidad Cliente: tabla `clientes`, id autoincremental,
/// datos personales aplanados.
pub const MAPEO_CLIENTES: MapeoTabla = MapeoTabla {
    tabla: "clientes",
    columna_id: "id",
    generacion: GeneracionId::Autoincremental,
    columnas_embebidas: &["nombre", "cpf"],
};

pub fn create_tables(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(&ddl_entidad(&MAPEO_CLIENTES))
}

/// Interpreta un mapeo y arma su CREATE TABLE. Las columnas embebidas son
/// texto obligatorio; los timestamps los mantiene SQLite.
fn ddl_entidad(mapeo: &MapeoTabla) -> String {
    let id = match mapeo.generacion {
        GeneracionId::Autoincremental => {
            format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", mapeo.columna_id)
        }
    };

    let embebidas = mapeo
        .columnas_embebidas
        .iter()
        .map(|col| format!("{} TEXT NOT NULL", col))
        .collect::<Vec<_>>()
        .join(",\n            ");

    format!(
        "CREATE TABLE IF NOT EXISTS {} (
            {},
            {},
            created_at TEXT NOT NULL DEFAULT (datetime('now', 'localtime')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now', 'localtime'))
        );",
        mapeo.tabla, id, embebidas,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conexion() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn crea_la_tabla_con_las_columnas_del_mapeo() {
        let conn = conexion();
        let mut stmt = conn.prepare("PRAGMA table_info(clientes)").unwrap();
        let columnas: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert!(columnas.contains(&MAPEO_CLIENTES.columna_id.to_string()));
        for col in MAPEO_CLIENTES.columnas_embebidas {
            assert!(columnas.contains(&col.to_string()));
        }
    }

    #[test]
    fn el_id_lo_genera_el_motor() {
        let conn = conexion();
        let sql: String = conn
            .query_row(
                "SELECT sql FROM sqlite_master WHERE name = ?1",
                [MAPEO_CLIENTES.tabla],
                |row| row.get(0),
            )
            .unwrap();
        assert!(sql.contains("AUTOINCREMENT"));
    }

    #[test]
    fn create_tables_es_idempotente() {
        let conn = conexion();
        create_tables(&conn).unwrap();
    }
}
