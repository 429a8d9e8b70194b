//! Modelo del informe de control de calidad
//!
//! Los nombres de campo JSON (`identificador`, `secciones`, `estado`, ...)
//! son el contrato de interoperabilidad con los informes ya guardados y no
//! deben renombrarse.

use crate::error::{InformeError, Result};
use serde::{Deserialize, Serialize};

/// Formato de `creado_en` (ancho fijo, ordenable como texto)
pub const FORMATO_CREADO_EN: &str = "%Y-%m-%d %H:%M:%S";

/// Estado de un punto de revisión
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Estado {
    /// Sin marcar (se serializa como cadena vacía)
    #[default]
    #[serde(rename = "")]
    Vacio,
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOK")]
    Nok,
    #[serde(rename = "N/A")]
    NoAplica,
}

impl Estado {
    /// Texto para el PDF: los estados sin marcar se muestran como guion
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Estado::Vacio => "-",
            Estado::Ok => "OK",
            Estado::Nok => "NOK",
            Estado::NoAplica => "N/A",
        }
    }
}

/// Un punto de revisión de la plantilla
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistItem {
    pub descripcion: String,
    pub estado: Estado,
    pub observacion: String,
}

impl ChecklistItem {
    pub fn nuevo(descripcion: &str) -> Self {
        Self {
            descripcion: descripcion.to_string(),
            ..Default::default()
        }
    }
}

/// Grupo de puntos de revisión (el orden de los items es significativo)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seccion {
    pub titulo: String,
    pub items: Vec<ChecklistItem>,
    pub observacion_general: String,
}

/// Informe de control de calidad: la unidad de persistencia
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InformeQc {
    pub identificador: String,
    pub modelo: String,
    pub cliente: String,
    pub fecha_inspeccion: String,
    pub fecha_fabricacion: String,
    pub documento: String,
    pub secciones: Vec<Seccion>,
    /// Fijado una vez al crear el informe; nunca se regenera
    pub creado_en: String,
}

/// Validación previa al guardado. Deliberadamente laxa: solo el
/// identificador es obligatorio, igual que en la lista de papel.
pub fn validar_para_guardar(informe: &InformeQc) -> Result<()> {
    if informe.identificador.trim().is_empty() {
        return Err(InformeError::IdentificadorVacio);
    }
    Ok(())
}
