//! Pruebas de integración del almacén de artefactos

use qc_informes::modelo::{Estado, InformeQc};
use qc_informes::{almacen, catalogo, InformeError};
use tempfile::tempdir;

fn informe_de_prueba(identificador: &str, creado_en: &str) -> InformeQc {
    let mut informe = catalogo::plantilla_por_defecto();
    informe.identificador = identificador.to_string();
    informe.modelo = "X1".to_string();
    informe.cliente = "Acme".to_string();
    informe.fecha_inspeccion = "15/03/2024".to_string();
    informe.fecha_fabricacion = "02/2024".to_string();
    informe.documento = "DOC-41".to_string();
    informe.creado_en = creado_en.to_string();
    informe.secciones[0].items[0].estado = Estado::Ok;
    informe.secciones[0].items[1].estado = Estado::Nok;
    informe.secciones[0].items[1].observacion = "cortocircuito en J3".to_string();
    informe.secciones[1].observacion_general = "repetir tras actualizar firmware".to_string();
    informe
}

#[test]
fn test_guardar_y_cargar_ida_y_vuelta() {
    let dir = tempdir().expect("no se pudo crear carpeta temporal");
    let original = informe_de_prueba("Q-001", "2024-03-15 10:30:00");

    let rutas = almacen::guardar_informe(&original, dir.path()).expect("fallo al guardar");
    let restaurado = almacen::cargar_informe(&rutas.json).expect("fallo al cargar");

    // Igualdad completa: escalares, secciones e items con su orden
    assert_eq!(original, restaurado);
}

#[test]
fn test_identificador_vacio_no_escribe_nada() {
    let dir = tempdir().unwrap();
    let mut informe = catalogo::plantilla_por_defecto();
    informe.identificador = "   ".to_string();

    let resultado = almacen::guardar_informe(&informe, dir.path());
    assert!(matches!(resultado, Err(InformeError::IdentificadorVacio)));

    let entradas: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entradas.is_empty(), "la validación debe ir antes de cualquier escritura");
}

#[test]
fn test_estructura_de_carpetas() {
    let dir = tempdir().unwrap();
    let informe = informe_de_prueba("Q-014", "2024-03-15 10:30:00");

    let rutas = almacen::guardar_informe(&informe, dir.path()).unwrap();

    // raiz/<id>/<id>.json + <id>.pdf, sin nada más
    assert_eq!(rutas.carpeta, dir.path().join("Q-014"));
    assert_eq!(rutas.json, rutas.carpeta.join("Q-014.json"));
    assert_eq!(rutas.pdf, rutas.carpeta.join("Q-014.pdf"));

    let mut nombres: Vec<String> = std::fs::read_dir(&rutas.carpeta)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    nombres.sort();
    assert_eq!(nombres, vec!["Q-014.json", "Q-014.pdf"]);
}

#[test]
fn test_guardar_mismo_identificador_sobrescribe() {
    let dir = tempdir().unwrap();

    let primero = informe_de_prueba("Q-007", "2024-01-01 08:00:00");
    let rutas_primero = almacen::guardar_informe(&primero, dir.path()).unwrap();

    let mut segundo = informe_de_prueba("Q-007", "2024-02-02 09:00:00");
    segundo.cliente = "Beta Industrial".to_string();
    segundo.secciones[2].items[0].estado = Estado::NoAplica;
    let rutas_segundo = almacen::guardar_informe(&segundo, dir.path()).unwrap();

    // Misma carpeta y mismas rutas: el segundo guardado reemplaza al primero
    assert_eq!(rutas_primero.json, rutas_segundo.json);
    assert_eq!(rutas_primero.pdf, rutas_segundo.pdf);

    let restaurado = almacen::cargar_informe(&rutas_segundo.json).unwrap();
    assert_eq!(restaurado, segundo);
    assert_ne!(restaurado.cliente, primero.cliente);

    // El PDF también es el del segundo informe
    let pdf_guardado = almacen::leer_documento(&rutas_segundo.pdf).unwrap();
    let pdf_esperado = qc_informes::generar_pdf(&segundo).unwrap();
    assert_eq!(pdf_guardado, pdf_esperado);
}

#[test]
fn test_json_guardado_conserva_el_esquema_de_interop() {
    let dir = tempdir().unwrap();
    let informe = informe_de_prueba("Q-020", "2024-03-15 10:30:00");

    let rutas = almacen::guardar_informe(&informe, dir.path()).unwrap();
    let valor = almacen::leer_json(&rutas.json).unwrap();

    // Claves de nivel superior del contrato
    for clave in [
        "identificador",
        "modelo",
        "cliente",
        "fecha_inspeccion",
        "fecha_fabricacion",
        "documento",
        "secciones",
        "creado_en",
    ] {
        assert!(valor.get(clave).is_some(), "falta la clave {}", clave);
    }

    let seccion = &valor["secciones"][0];
    assert!(seccion.get("titulo").is_some());
    assert!(seccion.get("observacion_general").is_some());
    let item = &seccion["items"][1];
    assert_eq!(item["estado"], "NOK");
    assert_eq!(item["observacion"], "cortocircuito en J3");
}

#[test]
fn test_raiz_no_escribible() {
    let informe = informe_de_prueba("Q-030", "2024-03-15 10:30:00");
    // En /proc no se pueden crear carpetas
    let resultado = almacen::guardar_informe(&informe, std::path::Path::new("/proc/qc"));
    assert!(matches!(resultado, Err(InformeError::Almacenamiento(_))));
}
