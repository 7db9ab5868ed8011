//! Simulated data upload. Only the filename extension is checked; no
//! ingestion pipeline exists behind it, the UI just surfaces the
//! outcome as a notification.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Csv,
    Excel,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("formato no soportado: {0} (se admiten .csv, .xlsx y .xls)")]
    UnsupportedExtension(String),
}

/// Classify an upload by extension, case-insensitively.
pub fn classify_upload(filename: &str) -> Result<UploadKind, UploadError> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".csv") {
        Ok(UploadKind::Csv)
    } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
        Ok(UploadKind::Excel)
    } else {
        Err(UploadError::UnsupportedExtension(filename.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_are_accepted() {
        assert_eq!(classify_upload("ventas.csv").unwrap(), UploadKind::Csv);
        assert_eq!(classify_upload("VENTAS.XLSX").unwrap(), UploadKind::Excel);
        assert_eq!(classify_upload("histórico.xls").unwrap(), UploadKind::Excel);
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(classify_upload("ventas.pdf").is_err());
        assert!(classify_upload("csv").is_err());
        assert!(classify_upload("").is_err());
    }
}
