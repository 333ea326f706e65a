use std::fmt;

/// Errors from serializing or parsing exported documents.
///
/// The model itself cannot fail; only the export layer has an error type.
#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
    /// Exported text was not valid UTF-8
    Encoding(std::string::FromUtf8Error),
    /// First CSV record was not `type,variable,value`
    Header(String),
    /// `type` column named no known sweep variable
    UnknownType { line: u64, value: String },
    /// `value` column was not a number
    Value { line: u64, value: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Csv(e) => write!(f, "csv error: {e}"),
            ExportError::Json(e) => write!(f, "json error: {e}"),
            ExportError::Io(e) => write!(f, "io error: {e}"),
            ExportError::Encoding(e) => write!(f, "export is not valid utf-8: {e}"),
            ExportError::Header(found) => {
                write!(f, "expected header 'type,variable,value', found '{found}'")
            }
            ExportError::UnknownType { line, value } => {
                write!(f, "line {line}: unknown sweep type '{value}'")
            }
            ExportError::Value { line, value } => {
                write!(f, "line {line}: '{value}' is not a number")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Csv(e) => Some(e),
            ExportError::Json(e) => Some(e),
            ExportError::Io(e) => Some(e),
            ExportError::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Json(e)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<std::string::FromUtf8Error> for ExportError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        ExportError::Encoding(e)
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
