use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qc-informes")]
#[command(about = "Informes de control de calidad de dispositivos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub comando: Comando,

    /// Carpeta raíz de almacenamiento (por defecto la de la configuración)
    #[arg(short, long, global = true)]
    pub carpeta: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Comando {
    /// Genera un informe en blanco (JSON) para rellenar
    Plantilla {
        /// Fichero de salida
        #[arg(short, long, default_value = "plantilla.json")]
        salida: PathBuf,
    },

    /// Valida un informe rellenado y guarda la pareja JSON + PDF
    Guardar {
        /// Fichero JSON con el informe rellenado
        #[arg(required = true)]
        entrada: PathBuf,

        /// No pedir confirmación de la carpeta de destino
        #[arg(long)]
        si: bool,
    },

    /// Lista los informes guardados
    Listar {
        /// Filtrar por identificador, cliente o modelo
        #[arg(short, long)]
        buscar: Option<String>,
    },

    /// Muestra la carpeta y el contenido JSON de un informe guardado
    Ver {
        /// Identificador del informe
        #[arg(required = true)]
        identificador: String,
    },

    /// Consulta o cambia la configuración
    Config {
        /// Fija la carpeta de informes por defecto
        #[arg(long)]
        carpeta_informes: Option<PathBuf>,

        /// Muestra la configuración actual
        #[arg(long)]
        mostrar: bool,
    },
}
