//! Generación del documento PDF del informe
//!
//! El diseño es fijo: A4, tabla de metadatos a dos parejas
//! etiqueta/valor, una tabla de tres columnas por sección y el párrafo de
//! observaciones generales. El texto largo se ajusta dentro de su columna.
//!
//! La generación es pura y determinista: el mismo informe produce siempre
//! los mismos bytes (las fechas de los metadatos del PDF van fijadas y el
//! `creado_en` que aparece en la página forma parte de la entrada).

use crate::error::{InformeError, Result};
use crate::export::layout::{
    ajustar_texto, max_caracteres, A4_ALTO_MM, A4_ANCHO_MM, AJUSTE_LINEA_BASE_MM, ANCHO_UTIL_MM,
    ALTO_LINEA_MM, COLUMNAS_META_MM, COLUMNAS_SECCION_MM, GROSOR_REJILLA_PT, MARGEN_MM,
    RELLENO_CELDA_MM, TAMANO_CABECERA_PT, TAMANO_CUERPO_PT, TAMANO_TITULO_PT,
};
use crate::modelo::{InformeQc, Seccion};
use printpdf::*;
use time::OffsetDateTime;

/// Fuentes integradas usadas en todo el documento
struct Fuentes {
    normal: IndirectFontRef,
    negrita: IndirectFontRef,
}

/// Una celda de tabla: texto, ancho fijo y peso de letra
struct Celda<'a> {
    texto: &'a str,
    ancho_mm: f32,
    negrita: bool,
}

pub fn generar_pdf(informe: &InformeQc) -> Result<Vec<u8>> {
    let titulo = format!("Informe de Control de Calidad — {}", informe.identificador);
    let (doc, pagina1, capa1) =
        PdfDocument::new(titulo.as_str(), Mm(A4_ANCHO_MM), Mm(A4_ALTO_MM), "Capa 1");

    // Metadatos fijos para que los bytes no dependan del momento de la generación
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH);

    // TODO: fuente TTF embebida; con Helvetica integrada las tildes dependen del visor
    let fuentes = Fuentes {
        normal: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| InformeError::GeneracionPdf(format!("fuente: {:?}", e)))?,
        negrita: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| InformeError::GeneracionPdf(format!("fuente: {:?}", e)))?,
    };

    let mut capa = doc.get_page(pagina1).get_layer(capa1);
    let mut y = A4_ALTO_MM - MARGEN_MM;

    // Título
    y -= 8.0;
    capa.use_text(titulo.as_str(), TAMANO_TITULO_PT, Mm(MARGEN_MM), Mm(y), &fuentes.negrita);
    y -= 8.0;

    // Tabla de metadatos
    let meta: [[&str; 4]; 4] = [
        [
            "N.º Identificador",
            &informe.identificador,
            "Fecha de inspección",
            &informe.fecha_inspeccion,
        ],
        [
            "Modelo",
            &informe.modelo,
            "Fecha de fabricación",
            &informe.fecha_fabricacion,
        ],
        [
            "Cliente",
            &informe.cliente,
            "N.º de documento",
            &informe.documento,
        ],
        ["Creado en", &informe.creado_en, "", ""],
    ];
    for fila in &meta {
        let celdas = [
            Celda { texto: fila[0], ancho_mm: COLUMNAS_META_MM[0], negrita: true },
            Celda { texto: fila[1], ancho_mm: COLUMNAS_META_MM[1], negrita: false },
            Celda { texto: fila[2], ancho_mm: COLUMNAS_META_MM[2], negrita: true },
            Celda { texto: fila[3], ancho_mm: COLUMNAS_META_MM[3], negrita: false },
        ];
        dibujar_fila(&doc, &mut capa, &mut y, &celdas, &fuentes);
    }
    y -= 6.0;

    // Secciones, en el orden del informe
    for seccion in &informe.secciones {
        dibujar_seccion(&doc, &mut capa, &mut y, seccion, &fuentes);
    }

    let mut bytes = doc
        .save_to_bytes()
        .map_err(|e| InformeError::GeneracionPdf(format!("guardado: {:?}", e)))?;
    fijar_id_documento(&mut bytes, &id_documento(informe));
    Ok(bytes)
}

/// printpdf genera en cada guardado un par `/ID` aleatorio en el trailer.
/// Se reescribe con un valor derivado del informe; sin esto, dos
/// generaciones del mismo informe darían bytes distintos.
fn fijar_id_documento(bytes: &mut [u8], id: &[u8; 32]) {
    let Some(marca) = posicion(bytes, b"/ID", 0) else {
        return;
    };
    let mut desde = marca;
    for _ in 0..2 {
        let Some(abre) = posicion(bytes, b"(", desde) else {
            return;
        };
        let Some(cierra) = posicion(bytes, b")", abre) else {
            return;
        };
        if cierra - abre - 1 == id.len() {
            bytes[abre + 1..cierra].copy_from_slice(id);
        }
        desde = cierra + 1;
    }
}

/// Identificador de documento con el mismo formato que el generado
/// (32 letras mayúsculas), derivado del identificador y el creado_en
fn id_documento(informe: &InformeQc) -> [u8; 32] {
    let semilla = format!("{}|{}", informe.identificador, informe.creado_en);
    let mut id = [b'A'; 32];
    let mut acumulador: u32 = 0;
    for (i, byte) in semilla.bytes().enumerate() {
        acumulador = acumulador.wrapping_mul(31).wrapping_add(byte as u32);
        id[i % 32] = b'A' + (acumulador % 26) as u8;
    }
    id
}

fn posicion(bytes: &[u8], patron: &[u8], desde: usize) -> Option<usize> {
    bytes[desde..]
        .windows(patron.len())
        .position(|ventana| ventana == patron)
        .map(|p| p + desde)
}

fn dibujar_seccion(
    doc: &PdfDocumentReference,
    capa: &mut PdfLayerReference,
    y: &mut f32,
    seccion: &Seccion,
    fuentes: &Fuentes,
) {
    // Encabezado junto con al menos una fila; si no cabe, página nueva
    if *y - 20.0 < MARGEN_MM {
        *capa = nueva_pagina(doc);
        *y = A4_ALTO_MM - MARGEN_MM;
    }

    *y -= 6.0;
    capa.use_text(seccion.titulo.as_str(), TAMANO_CABECERA_PT, Mm(MARGEN_MM), Mm(*y), &fuentes.negrita);
    *y -= 3.0;

    let cabecera = [
        Celda { texto: "Descripción", ancho_mm: COLUMNAS_SECCION_MM[0], negrita: true },
        Celda { texto: "Estado", ancho_mm: COLUMNAS_SECCION_MM[1], negrita: true },
        Celda { texto: "Observación", ancho_mm: COLUMNAS_SECCION_MM[2], negrita: true },
    ];
    dibujar_fila(doc, capa, y, &cabecera, fuentes);

    for item in &seccion.items {
        // Estado y observación sin rellenar se imprimen como guion, nunca en blanco
        let celdas = [
            Celda { texto: &item.descripcion, ancho_mm: COLUMNAS_SECCION_MM[0], negrita: false },
            Celda { texto: item.estado.etiqueta(), ancho_mm: COLUMNAS_SECCION_MM[1], negrita: false },
            Celda {
                texto: valor_o_guion(&item.observacion),
                ancho_mm: COLUMNAS_SECCION_MM[2],
                negrita: false,
            },
        ];
        dibujar_fila(doc, capa, y, &celdas, fuentes);
    }

    if !seccion.observacion_general.trim().is_empty() {
        *y -= 4.0;
        let parrafo = format!("Observaciones: {}", seccion.observacion_general.trim());
        let max = max_caracteres(ANCHO_UTIL_MM, TAMANO_CUERPO_PT);
        for linea in ajustar_texto(&parrafo, max) {
            if *y - ALTO_LINEA_MM < MARGEN_MM {
                *capa = nueva_pagina(doc);
                *y = A4_ALTO_MM - MARGEN_MM;
            }
            *y -= ALTO_LINEA_MM;
            capa.use_text(linea, TAMANO_CUERPO_PT, Mm(MARGEN_MM), Mm(*y), &fuentes.normal);
        }
    }
    *y -= 2.0;
}

/// Dibuja una fila de tabla con rejilla; salta de página si no cabe entera
fn dibujar_fila(
    doc: &PdfDocumentReference,
    capa: &mut PdfLayerReference,
    y: &mut f32,
    celdas: &[Celda<'_>],
    fuentes: &Fuentes,
) {
    let lineas: Vec<Vec<String>> = celdas
        .iter()
        .map(|c| ajustar_texto(c.texto, max_caracteres(c.ancho_mm, TAMANO_CUERPO_PT)))
        .collect();
    let num_lineas = lineas.iter().map(|l| l.len()).max().unwrap_or(1);
    let alto = num_lineas as f32 * ALTO_LINEA_MM + RELLENO_CELDA_MM * 2.0;

    if *y - alto < MARGEN_MM {
        *capa = nueva_pagina(doc);
        *y = A4_ALTO_MM - MARGEN_MM;
    }

    capa.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    capa.set_outline_thickness(GROSOR_REJILLA_PT);

    let mut x = MARGEN_MM;
    for (celda, lineas_celda) in celdas.iter().zip(&lineas) {
        rectangulo(capa, x, *y, celda.ancho_mm, alto);
        let fuente = if celda.negrita { &fuentes.negrita } else { &fuentes.normal };
        for (i, linea) in lineas_celda.iter().enumerate() {
            capa.use_text(
                linea.as_str(),
                TAMANO_CUERPO_PT,
                Mm(x + RELLENO_CELDA_MM),
                Mm(*y - RELLENO_CELDA_MM - ALTO_LINEA_MM * (i as f32 + 1.0) + AJUSTE_LINEA_BASE_MM),
                fuente,
            );
        }
        x += celda.ancho_mm;
    }
    *y -= alto;
}

fn nueva_pagina(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (pagina, capa) = doc.add_page(Mm(A4_ANCHO_MM), Mm(A4_ALTO_MM), "Capa 1");
    doc.get_page(pagina).get_layer(capa)
}

fn rectangulo(capa: &PdfLayerReference, x: f32, y_superior: f32, ancho: f32, alto: f32) {
    let puntos = vec![
        (Point::new(Mm(x), Mm(y_superior)), false),
        (Point::new(Mm(x + ancho), Mm(y_superior)), false),
        (Point::new(Mm(x + ancho), Mm(y_superior - alto)), false),
        (Point::new(Mm(x), Mm(y_superior - alto)), false),
    ];
    capa.add_line(Line { points: puntos, is_closed: true });
}

fn valor_o_guion(texto: &str) -> &str {
    if texto.trim().is_empty() {
        "-"
    } else {
        texto
    }
}
