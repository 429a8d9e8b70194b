//! qc-informes
//!
//! Informes de control de calidad de dispositivos fabricados: modelo de
//! lista de revisión, generación del PDF imprimible, almacén de artefactos
//! JSON + PDF por identificador y consulta del índice de informes.
//!
//! La interfaz que llama a esta biblioteca (formulario, menú) queda fuera:
//! aquí no hay estado mutable de proceso, solo funciones que reciben el
//! informe y devuelven identificadores, rutas y filas de listado.

pub mod almacen;
pub mod catalogo;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod indice;
pub mod modelo;

pub use almacen::{cargar_informe, guardar_informe, leer_documento, leer_json, RutasArtefactos};
pub use catalogo::plantilla_por_defecto;
pub use error::{InformeError, Result};
pub use export::generar_pdf;
pub use indice::{buscar, consultar_informes, listar_informes, FilaIndice};
pub use modelo::{validar_para_guardar, ChecklistItem, Estado, InformeQc, Seccion};
