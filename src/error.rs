//! Tipos de error

use thiserror::Error;

/// Error común de la aplicación
#[derive(Error, Debug)]
pub enum InformeError {
    #[error("El N.º Identificador es obligatorio")]
    IdentificadorVacio,

    #[error("Error de almacenamiento: {0}")]
    Almacenamiento(String),

    #[error("Artefacto corrupto: {0}")]
    ArtefactoCorrupto(String),

    #[error("No encontrado: {0}")]
    NoEncontrado(String),

    #[error("Error al generar el PDF: {0}")]
    GeneracionPdf(String),

    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias de Result
pub type Result<T> = std::result::Result<T, InformeError>;
