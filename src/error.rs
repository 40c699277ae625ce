use thiserror::Error;

/// Fallos del almacén clave-valor.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("error de E/S en el almacén: {0}")]
    Io(#[from] std::io::Error),
    #[error("almacén no disponible: {0}")]
    Unavailable(String),
    #[error("error del navegador: {0}")]
    Web(String),
}

/// Fallos al leer/escribir el progreso (mapa de respuestas).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("JSON de progreso no válido: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("no se pudo serializar el progreso: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fallos al cargar el banco de preguntas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("no se pudo leer el banco de preguntas {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("banco de preguntas JSON no válido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("banco de preguntas YAML no válido: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("identificador de pregunta duplicado: {0}")]
    DuplicateId(String),
}

/// Errores que devuelve el controlador de la sesión.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("las preguntas aún no están cargadas")]
    NotReady,
    #[error("ya se cargó {0}")]
    AlreadyLoaded(&'static str),
    #[error("marca al menos una respuesta antes de comprobar")]
    NoSelection,
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

impl SessionError {
    /// `true` si el fallo viene de un documento de progreso mal formado.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SessionError::Progress(ProgressError::Parse(_)))
    }
}

/// Fallos al exportar/importar ficheros de progreso.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransferError {
    #[error("no se pudo acceder al fichero {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("el fichero soltado no trae contenido")]
    EmptyDrop,
    #[error("error del navegador: {0}")]
    Web(String),
}
