use thiserror::Error;

/// Failures surfaced by the data-fetching layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The backend rejected the credentials. Never recovered locally.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not connected to any catalog server")]
    NotConnected,

    #[error("Connection to the catalog server was lost")]
    ConnectionLost,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchError::Unauthorized(_))
    }
}

/// Cart edits that were refused. The cart is unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Quantity must be at least 1.")]
    ZeroQuantity,

    #[error("At most {max} of one item per order.")]
    TooMany { max: u32 },

    #[error("`{0}` is not in your cart.")]
    NotInCart(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

impl From<ConfigError> for std::io::Error {
    fn from(e: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    }
}
