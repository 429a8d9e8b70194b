//! Almacén de artefactos
//!
//! Cada informe guardado ocupa una carpeta `raiz/<identificador>/` con dos
//! artefactos: `<identificador>.json` (UTF-8, con sangría) y
//! `<identificador>.pdf`. Guardar dos veces el mismo identificador
//! sobrescribe ambos artefactos; es el comportamiento aceptado, no un error.
//! No hay bloqueo: dos guardados concurrentes del mismo identificador
//! compiten a nivel de sistema de ficheros y gana el último.

use crate::error::{InformeError, Result};
use crate::export;
use crate::modelo::{self, InformeQc};
use std::path::{Path, PathBuf};

/// Rutas del conjunto de artefactos de un informe guardado
#[derive(Debug, Clone)]
pub struct RutasArtefactos {
    pub carpeta: PathBuf,
    pub json: PathBuf,
    pub pdf: PathBuf,
}

/// Valida y guarda el informe bajo `raiz`.
///
/// La validación va antes de cualquier efecto: con identificador vacío no
/// se escribe nada. Los fallos de E/S se devuelven con su causa y abortan
/// este guardado sin limpieza parcial.
pub fn guardar_informe(informe: &InformeQc, raiz: &Path) -> Result<RutasArtefactos> {
    modelo::validar_para_guardar(informe)?;

    // El PDF se genera en memoria antes de tocar el disco
    let pdf_bytes = export::generar_pdf(informe)?;

    let carpeta = raiz.join(&informe.identificador);
    std::fs::create_dir_all(&carpeta).map_err(|e| {
        InformeError::Almacenamiento(format!("no se pudo crear {}: {}", carpeta.display(), e))
    })?;

    let ruta_json = carpeta.join(format!("{}.json", informe.identificador));
    let ruta_pdf = carpeta.join(format!("{}.pdf", informe.identificador));

    let json = serde_json::to_string_pretty(informe)?;
    std::fs::write(&ruta_json, json).map_err(|e| {
        InformeError::Almacenamiento(format!("no se pudo escribir {}: {}", ruta_json.display(), e))
    })?;
    std::fs::write(&ruta_pdf, pdf_bytes).map_err(|e| {
        InformeError::Almacenamiento(format!("no se pudo escribir {}: {}", ruta_pdf.display(), e))
    })?;

    Ok(RutasArtefactos {
        carpeta,
        json: ruta_json,
        pdf: ruta_pdf,
    })
}

/// Carga un informe completo desde su artefacto JSON.
///
/// Un JSON malformado es `ArtefactoCorrupto`; quien lista informes debe
/// saltárselo, nunca abortar el recorrido completo.
pub fn cargar_informe(ruta_json: &Path) -> Result<InformeQc> {
    if !ruta_json.exists() {
        return Err(InformeError::NoEncontrado(ruta_json.display().to_string()));
    }
    let contenido = std::fs::read_to_string(ruta_json)?;
    serde_json::from_str(&contenido).map_err(|e| {
        InformeError::ArtefactoCorrupto(format!("{}: {}", ruta_json.display(), e))
    })
}

/// Bytes del documento PDF guardado (descarga desde la interfaz)
pub fn leer_documento(ruta: &Path) -> Result<Vec<u8>> {
    if !ruta.exists() {
        return Err(InformeError::NoEncontrado(ruta.display().to_string()));
    }
    Ok(std::fs::read(ruta)?)
}

/// Contenido JSON en bruto (vista rápida desde la interfaz)
pub fn leer_json(ruta: &Path) -> Result<serde_json::Value> {
    if !ruta.exists() {
        return Err(InformeError::NoEncontrado(ruta.display().to_string()));
    }
    let contenido = std::fs::read_to_string(ruta)?;
    serde_json::from_str(&contenido)
        .map_err(|e| InformeError::ArtefactoCorrupto(format!("{}: {}", ruta.display(), e)))
}
