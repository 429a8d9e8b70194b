//! Pruebas de integración de la generación del PDF

use qc_informes::modelo::{Estado, InformeQc};
use qc_informes::{catalogo, generar_pdf};

fn informe_rellenado() -> InformeQc {
    let mut informe = catalogo::plantilla_por_defecto();
    informe.identificador = "Q-100".to_string();
    informe.modelo = "X1".to_string();
    informe.cliente = "Acme".to_string();
    informe.fecha_inspeccion = "15/03/2024".to_string();
    informe.fecha_fabricacion = "02/2024".to_string();
    informe.documento = "DOC-100".to_string();
    informe.creado_en = "2024-03-15 10:30:00".to_string();
    for seccion in &mut informe.secciones {
        for item in &mut seccion.items {
            item.estado = Estado::Ok;
        }
    }
    informe
}

#[test]
fn test_generacion_valida() {
    let bytes = generar_pdf(&informe_rellenado()).expect("fallo al generar el PDF");
    assert!(bytes.starts_with(b"%PDF"), "cabecera PDF ausente");
    assert!(bytes.len() > 1000);
}

#[test]
fn test_generacion_determinista() {
    // Mismo informe, mismos bytes: el creado_en forma parte de la entrada y
    // los metadatos del documento van fijados
    let informe = informe_rellenado();
    let primera = generar_pdf(&informe).unwrap();
    let segunda = generar_pdf(&informe).unwrap();
    assert_eq!(primera, segunda);
}

#[test]
fn test_informes_distintos_dan_bytes_distintos() {
    let primero = informe_rellenado();
    let mut segundo = informe_rellenado();
    segundo.secciones[0].items[0].estado = Estado::Nok;
    segundo.secciones[0].items[0].observacion = "fuera de rango".to_string();

    let bytes_primero = generar_pdf(&primero).unwrap();
    let bytes_segundo = generar_pdf(&segundo).unwrap();
    assert_ne!(bytes_primero, bytes_segundo);
}

#[test]
fn test_plantilla_sin_rellenar_tambien_genera() {
    // Todos los estados sin marcar: se imprimen como guion, nunca en blanco
    let mut informe = catalogo::plantilla_por_defecto();
    informe.identificador = "Q-VACIO".to_string();
    let bytes = generar_pdf(&informe).expect("la plantilla vacía debe generar PDF");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_observaciones_muy_largas() {
    let mut informe = informe_rellenado();
    informe.secciones[2].items[5].observacion =
        "ventilador con holgura en el eje y ruido intermitente a máxima velocidad ".repeat(12);
    informe.secciones[2].observacion_general = "palabrainterminablesinespacios".repeat(20);

    let bytes = generar_pdf(&informe).expect("el texto largo debe ajustarse, no fallar");
    assert!(bytes.starts_with(b"%PDF"));
}
