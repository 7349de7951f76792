pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("XML parsing failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid UTF-8 in XML input: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required configuration key: {0}")]
    MissingConfig(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Spec analysis failed: {0}")]
    SpecAnalysis(String),

    #[error("cannot bind type signature '{signature}' (semantic type {semantic:?})")]
    TypeMapping {
        signature: String,
        semantic: Option<String>,
    },

    #[error("interfaces '{first}' and '{second}' both derive proxy class name '{class}'")]
    DuplicateClassName {
        class: String,
        first: String,
        second: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    mod error_variants {
        use super::*;

        #[test]
        fn test_io_error_creation() {
            let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
            let err = Error::from(io_err);
            assert!(matches!(err, Error::Io(_)));
            assert!(err.to_string().contains("file not found"));
        }

        #[test]
        fn test_missing_config_names_key() {
            let err = Error::MissingConfig("specxml".to_string());
            assert_eq!(
                err.to_string(),
                "Missing required configuration key: specxml"
            );
        }

        #[test]
        fn test_type_mapping_error() {
            let err = Error::TypeMapping {
                signature: "a(ss)".to_string(),
                semantic: None,
            };
            assert!(err.to_string().contains("a(ss)"));
        }

        #[test]
        fn test_duplicate_class_name_error() {
            let err = Error::DuplicateClassName {
                class: "ConnectionInterface".to_string(),
                first: "/Connection".to_string(),
                second: "/Connection_".to_string(),
            };
            let display = err.to_string();
            assert!(display.contains("ConnectionInterface"));
            assert!(display.contains("/Connection"));
        }
    }

    mod result_type {
        use super::*;

        #[test]
        fn test_result_with_question_mark() {
            fn test_fn() -> Result<String> {
                let err = Error::SpecAnalysis("test".to_string());
                Err(err)?;
                Ok("success".to_string())
            }

            assert!(test_fn().is_err());
        }
    }
}
