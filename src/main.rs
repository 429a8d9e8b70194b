use clap::Parser;
use qc_informes::cli::{Cli, Comando};
use qc_informes::config::Config;
use qc_informes::error::{InformeError, Result};
use qc_informes::{almacen, catalogo, indice, modelo};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::cargar()?;
    let raiz = cli.carpeta.clone().unwrap_or_else(|| config.carpeta_raiz());

    match cli.comando {
        Comando::Plantilla { salida } => {
            let informe = catalogo::plantilla_por_defecto();
            let json = serde_json::to_string_pretty(&informe)?;
            std::fs::write(&salida, json)?;
            println!("✔ Plantilla creada: {}", salida.display());
            println!("  Rellénala y guárdala con: qc-informes guardar {}", salida.display());
        }

        Comando::Guardar { entrada, si } => {
            println!("📋 qc-informes - Guardar informe\n");

            let contenido = std::fs::read_to_string(&entrada)?;
            let informe: modelo::InformeQc = serde_json::from_str(&contenido)?;

            // La validación va antes de cualquier escritura
            modelo::validar_para_guardar(&informe)?;

            // Confirmación del destino (el equivalente del "preparar guardado"
            // de la interfaz original); --si la omite
            if !si {
                let pregunta = format!("Se guardará en {}. ¿Continuar?", raiz.display());
                let confirmado = dialoguer::Confirm::new()
                    .with_prompt(pregunta)
                    .default(true)
                    .interact()
                    .map_err(|e| {
                        InformeError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
                    })?;
                if !confirmado {
                    println!("Guardado cancelado");
                    return Ok(());
                }
            }

            let rutas = almacen::guardar_informe(&informe, &raiz)?;
            println!("✔ JSON guardado: {}", rutas.json.display());
            println!("✔ PDF guardado:  {}", rutas.pdf.display());
        }

        Comando::Listar { buscar } => {
            let filas = indice::consultar_informes(&raiz, buscar.as_deref().unwrap_or(""));
            if filas.is_empty() {
                println!("No hay informes aún.");
                return Ok(());
            }

            println!(
                "{:<16} {:<20} {:<14} {:<14} {:<20}",
                "Identificador", "Cliente", "Modelo", "Inspección", "Creado en"
            );
            for fila in &filas {
                println!(
                    "{:<16} {:<20} {:<14} {:<14} {:<20}",
                    fila.identificador, fila.cliente, fila.modelo, fila.fecha_inspeccion, fila.creado_en
                );
            }
            println!("\n{} informe(s)", filas.len());
        }

        Comando::Ver { identificador } => {
            let filas = indice::consultar_informes(&raiz, "");
            let fila = filas
                .iter()
                .find(|f| f.identificador == identificador)
                .ok_or_else(|| InformeError::NoEncontrado(identificador.clone()))?;

            println!("Carpeta: {}", fila.carpeta.display());
            println!("Creado:  {}", fila.creado_en);
            if !fila.pdf.exists() {
                println!("⚠ PDF no encontrado: {}", fila.pdf.display());
            }

            let valor = almacen::leer_json(&fila.json)?;
            println!("\n{}", serde_json::to_string_pretty(&valor)?);
        }

        Comando::Config { carpeta_informes, mostrar } => {
            let mut config = config;

            if let Some(carpeta) = carpeta_informes {
                config.carpeta_informes = carpeta;
                config.guardar()?;
                println!("✔ Carpeta de informes actualizada");
            }

            if mostrar {
                println!("Configuración:");
                println!("  Carpeta de informes: {}", config.carpeta_informes.display());
                println!("  Raíz efectiva:       {}", config.carpeta_raiz().display());
            }
        }
    }

    Ok(())
}
