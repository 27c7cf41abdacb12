use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid content file: {0}")]
    Content(#[from] serde_json::Error),

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_pdf_error_display() {
        let error = PdfError::InvalidStructure("too many pages".to_string());
        assert_eq!(error.to_string(), "Invalid PDF structure: too many pages");
    }

    #[test]
    fn test_pdf_error_from_io_error() {
        let io_error = IoError::new(ErrorKind::PermissionDenied, "access denied");
        let pdf_error = PdfError::from(io_error);

        match pdf_error {
            PdfError::Io(ref err) => {
                assert_eq!(err.kind(), ErrorKind::PermissionDenied);
                assert_eq!(err.to_string(), "access denied");
            }
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_pdf_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let pdf_error = PdfError::from(json_error);

        assert!(matches!(pdf_error, PdfError::Content(_)));
        assert!(pdf_error.to_string().starts_with("Invalid content file:"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PdfError>();
    }
}
