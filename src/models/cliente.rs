use serde::{Deserialize, Serialize};

/// Datos personales del cliente. Se almacenan aplanados en la misma fila
/// de la tabla `clientes`, no como registro aparte.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DatosPersonales {
    nombre: String,
    cpf: String,
}

impl DatosPersonales {
    pub fn new(nombre: String, cpf: String) -> Self {
        Self { nombre, cpf }
    }

    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    /// Identificador tributario. Cadena opaca, sin validar.
    pub fn cpf(&self) -> &str {
        &self.cpf
    }
}

/// Cliente del negocio. El id lo asigna la base de datos al insertar;
/// un cliente construido por defecto queda sin id y sin datos personales
/// hasta que la capa de persistencia lo reconstruya.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Cliente {
    id: Option<i64>,
    #[serde(flatten)]
    datos_personales: Option<DatosPersonales>,
}

impl Cliente {
    pub fn new(id: Option<i64>, nombre: String, cpf: String) -> Self {
        Self {
            id,
            datos_personales: Some(DatosPersonales::new(nombre, cpf)),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Reemplaza el id sin condiciones. `None` vuelve al estado sin persistir.
    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    pub fn datos_personales(&self) -> Option<&DatosPersonales> {
        self.datos_personales.as_ref()
    }

    /// Nombre del cliente, delegado a los datos personales.
    /// Entra en panico si los datos personales no fueron cargados.
    pub fn nombre(&self) -> &str {
        self.datos().nombre()
    }

    /// CPF del cliente, delegado a los datos personales.
    /// Entra en panico si los datos personales no fueron cargados.
    pub fn cpf(&self) -> &str {
        self.datos().cpf()
    }

    fn datos(&self) -> &DatosPersonales {
        self.datos_personales
            .as_ref()
            .expect("cliente sin datos personales")
    }
}
