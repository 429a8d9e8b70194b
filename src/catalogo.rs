//! Catálogo de revisiones de la plantilla
//!
//! Tabla de datos constante (Source of Truth): tres secciones con sus
//! puntos de revisión fijos. El informe nuevo se construye siempre desde
//! aquí, nunca con secciones escritas a mano en el código de la interfaz.

use crate::modelo::{ChecklistItem, InformeQc, Seccion, FORMATO_CREADO_EN};
use chrono::Local;

/// (título de sección, puntos de revisión)
pub const CATALOGO: &[(&str, &[&str])] = &[
    (
        "REVISIONES ELÉCTRICAS",
        &[
            "Consumo total (0.7A – 0.9A)",
            "Revisión de cortocircuitos",
            "Revisión visual de conexiones",
            "Tensión de alimentación del procesador",
        ],
    ),
    (
        "REVISIONES DE SOFTWARE",
        &[
            "Conexión WiFi",
            "Señal de Apagar con fuente de alimentación",
            "Conexión Ethernet",
            "Señal de Reinicio con fuente de alimentación",
            "Configuración de fecha y hora",
            "Lectura CAN",
            "Configuración",
            "Descarga de datos automática",
        ],
    ),
    (
        "REVISIONES DE HARDWARE",
        &[
            "Tornillos conector militar 19 pines",
            "Temperatura (70 – 80 ºC)",
            "Tornillos conector militar 6 pines",
            "Revisión visual de la carcasa",
            "Tornillos ventilador",
            "Funcionamiento del ventilador",
            "Tornillos disipador",
            "Colocación de las baterías",
            "Tornillos carcasa",
            "Revisión de soldaduras",
            "Tornillo placa relé",
            "Revisión de cableado",
        ],
    ),
];

/// Secciones nuevas a partir del catálogo, todos los estados sin marcar
pub fn secciones_por_defecto() -> Vec<Seccion> {
    CATALOGO
        .iter()
        .map(|(titulo, items)| Seccion {
            titulo: titulo.to_string(),
            items: items.iter().map(|d| ChecklistItem::nuevo(d)).collect(),
            observacion_general: String::new(),
        })
        .collect()
}

/// Informe en blanco: campos escalares vacíos, catálogo completo y
/// `creado_en` fijado en este momento
pub fn plantilla_por_defecto() -> InformeQc {
    InformeQc {
        secciones: secciones_por_defecto(),
        creado_en: Local::now().format(FORMATO_CREADO_EN).to_string(),
        ..Default::default()
    }
}
