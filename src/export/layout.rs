//! Geometría fija del documento
//!
//! Definición en mm (Source of Truth). Los anchos de columna son
//! constantes: el texto largo se parte dentro de su celda, las columnas
//! nunca se redimensionan según el contenido.

// ============================================
// Página (mm)
// ============================================

/// A4 (mm)
pub const A4_ANCHO_MM: f32 = 210.0;
pub const A4_ALTO_MM: f32 = 297.0;

/// Margen en los cuatro lados (mm)
pub const MARGEN_MM: f32 = 10.0;

/// Ancho útil (mm)
pub const ANCHO_UTIL_MM: f32 = A4_ANCHO_MM - MARGEN_MM * 2.0; // 190mm

// ============================================
// Tablas (mm)
// ============================================

/// Tabla de metadatos: etiqueta, valor, etiqueta, valor
pub const COLUMNAS_META_MM: [f32; 4] = [38.0, 62.0, 48.0, 42.0];

/// Tabla de sección: descripción, estado, observación
pub const COLUMNAS_SECCION_MM: [f32; 3] = [90.0, 25.0, 75.0];

/// Alto de una línea de texto dentro de una celda (mm)
pub const ALTO_LINEA_MM: f32 = 4.2;

/// Relleno interior de celda (mm)
pub const RELLENO_CELDA_MM: f32 = 1.5;

/// Subida de la línea base respecto al borde inferior de su línea (mm)
pub const AJUSTE_LINEA_BASE_MM: f32 = 1.2;

// ============================================
// Tipografía (pt)
// ============================================

pub const TAMANO_TITULO_PT: f32 = 16.0;
pub const TAMANO_CABECERA_PT: f32 = 11.0;
pub const TAMANO_CUERPO_PT: f32 = 9.0;

/// Grosor de las líneas de la rejilla (pt)
pub const GROSOR_REJILLA_PT: f32 = 0.5;

// ============================================
// Conversión y ajuste de texto
// ============================================

/// pt → mm (1pt = 25.4/72 mm)
pub const PT_A_MM: f32 = 25.4 / 72.0;

/// Ancho medio aproximado de un carácter de Helvetica (en em)
const ANCHO_MEDIO_CARACTER_EM: f32 = 0.5;

/// Caracteres que caben en una celda de `ancho_mm` con letra de `tamano_pt`
pub fn max_caracteres(ancho_mm: f32, tamano_pt: f32) -> usize {
    let ancho_caracter_mm = tamano_pt * ANCHO_MEDIO_CARACTER_EM * PT_A_MM;
    let utiles = (ancho_mm - RELLENO_CELDA_MM * 2.0) / ancho_caracter_mm;
    (utiles as usize).max(1)
}

/// Parte `texto` en líneas de como mucho `max` caracteres.
/// Corta por espacios; las palabras más largas que la celda se trocean.
pub fn ajustar_texto(texto: &str, max: usize) -> Vec<String> {
    let texto = texto.trim();
    if texto.is_empty() {
        return vec![String::new()];
    }

    let mut lineas = Vec::new();
    let mut actual = String::new();

    for palabra in texto.split_whitespace() {
        let mut palabra = palabra;
        // Trocear palabras que no caben ni solas en una línea
        while palabra.chars().count() > max {
            if !actual.is_empty() {
                lineas.push(std::mem::take(&mut actual));
            }
            let corte: String = palabra.chars().take(max).collect();
            let resto_desde = corte.len();
            lineas.push(corte);
            palabra = &palabra[resto_desde..];
        }

        let largo_actual = actual.chars().count();
        let largo_palabra = palabra.chars().count();
        if actual.is_empty() {
            actual.push_str(palabra);
        } else if largo_actual + 1 + largo_palabra <= max {
            actual.push(' ');
            actual.push_str(palabra);
        } else {
            lineas.push(std::mem::take(&mut actual));
            actual.push_str(palabra);
        }
    }

    if !actual.is_empty() {
        lineas.push(actual);
    }
    if lineas.is_empty() {
        lineas.push(String::new());
    }
    lineas
}
