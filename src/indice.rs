//! Índice de informes guardados
//!
//! El índice no se cachea: cada consulta recorre de nuevo el árbol de la
//! raíz de almacenamiento y reconstruye las filas leyendo los artefactos
//! JSON. Los ficheros ilegibles o malformados se excluyen del listado sin
//! propagar error; un guardado interrumpido a medias nunca rompe la
//! consulta.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Vista escalar de un informe guardado: para listar no hace falta
/// deserializar las secciones
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ResumenInforme {
    identificador: String,
    modelo: String,
    cliente: String,
    fecha_inspeccion: String,
    fecha_fabricacion: String,
    documento: String,
    creado_en: String,
}

/// Una fila del listado: campos escalares más las rutas resueltas de sus
/// artefactos. Derivada, de solo lectura; se reconstruye en cada consulta.
#[derive(Debug, Clone)]
pub struct FilaIndice {
    pub identificador: String,
    pub modelo: String,
    pub cliente: String,
    pub fecha_inspeccion: String,
    pub fecha_fabricacion: String,
    pub documento: String,
    pub creado_en: String,
    pub carpeta: PathBuf,
    pub json: PathBuf,
    pub pdf: PathBuf,
}

/// Recorre `raiz` de forma perezosa y produce una fila por cada artefacto
/// JSON interpretable. Una raíz inexistente produce un listado vacío.
pub fn listar_informes(raiz: &Path) -> impl Iterator<Item = FilaIndice> {
    WalkDir::new(raiz)
        .into_iter()
        .filter_map(|entrada| entrada.ok())
        .filter(|entrada| {
            entrada.file_type().is_file()
                && entrada
                    .path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
        })
        .filter_map(|entrada| leer_fila(entrada.path()))
}

/// Orden del listado: `creado_en` descendente. El formato es de ancho
/// fijo con ceros de relleno, así que la comparación de cadenas basta.
pub fn ordenar(filas: &mut [FilaIndice]) {
    filas.sort_by(|a, b| b.creado_en.cmp(&a.creado_en));
}

/// Filtro por subcadena, sin distinguir mayúsculas, sobre identificador,
/// cliente o modelo. La consulta vacía devuelve las filas tal cual.
pub fn buscar(filas: Vec<FilaIndice>, consulta: &str) -> Vec<FilaIndice> {
    if consulta.is_empty() {
        return filas;
    }
    let consulta = consulta.to_lowercase();
    filas
        .into_iter()
        .filter(|fila| {
            fila.identificador.to_lowercase().contains(&consulta)
                || fila.cliente.to_lowercase().contains(&consulta)
                || fila.modelo.to_lowercase().contains(&consulta)
        })
        .collect()
}

/// Punto de entrada de la interfaz: recorrer, ordenar y filtrar
pub fn consultar_informes(raiz: &Path, consulta: &str) -> Vec<FilaIndice> {
    let mut filas: Vec<FilaIndice> = listar_informes(raiz).collect();
    ordenar(&mut filas);
    buscar(filas, consulta)
}

fn leer_fila(ruta_json: &Path) -> Option<FilaIndice> {
    let contenido = std::fs::read_to_string(ruta_json).ok()?;
    let resumen: ResumenInforme = serde_json::from_str(&contenido).ok()?;
    let carpeta = ruta_json.parent()?.to_path_buf();

    Some(FilaIndice {
        identificador: resumen.identificador,
        modelo: resumen.modelo,
        cliente: resumen.cliente,
        fecha_inspeccion: resumen.fecha_inspeccion,
        fecha_fabricacion: resumen.fecha_fabricacion,
        documento: resumen.documento,
        creado_en: resumen.creado_en,
        carpeta,
        json: ruta_json.to_path_buf(),
        pdf: ruta_json.with_extension("pdf"),
    })
}
