use crate::error::{InformeError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Carpeta de informes por defecto, relativa al directorio de trabajo
pub const CARPETA_POR_DEFECTO: &str = "informes";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub carpeta_informes: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carpeta_informes: PathBuf::from(CARPETA_POR_DEFECTO),
        }
    }
}

impl Config {
    pub fn cargar() -> Result<Self> {
        let ruta = Self::ruta_config()?;

        if ruta.exists() {
            let contenido = std::fs::read_to_string(&ruta)?;
            let config: Config = serde_json::from_str(&contenido)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn guardar(&self) -> Result<()> {
        let ruta = Self::ruta_config()?;

        if let Some(padre) = ruta.parent() {
            std::fs::create_dir_all(padre)?;
        }

        let contenido = serde_json::to_string_pretty(self)?;
        std::fs::write(&ruta, contenido)?;
        Ok(())
    }

    pub fn ruta_config() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| InformeError::Config("no se encontró el directorio del usuario".into()))?;
        Ok(home.join(".config").join("qc-informes").join("config.json"))
    }

    /// Raíz de almacenamiento efectiva. La variable de entorno
    /// `QC_INFORMES_DIR` tiene prioridad sobre el fichero de configuración.
    pub fn carpeta_raiz(&self) -> PathBuf {
        if let Ok(ruta) = std::env::var("QC_INFORMES_DIR") {
            return PathBuf::from(ruta);
        }
        self.carpeta_informes.clone()
    }
}
