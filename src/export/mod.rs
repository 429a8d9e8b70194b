//! Documento imprimible del informe

pub mod layout;
pub mod pdf;

pub use pdf::generar_pdf;
