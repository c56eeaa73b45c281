use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl From<CatalogError> for std::io::Error {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Io(inner) => inner,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}
