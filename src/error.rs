pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    IOError(std::io::Error),
    SerializeError(String),
    DeserializeError(String),
    ItemExists(String),
    ItemNotFound(String),
    InvalidNumber { field: &'static str, input: String },
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::IOError(err) => write!(f, "{}", err),
            Self::SerializeError(msg) => write!(f, "SerializeError: {}", msg),
            Self::DeserializeError(msg) => write!(f, "DeserializeError: {}", msg),
            Self::ItemExists(id) => write!(f, "Item \"{}\" already exists", id),
            Self::ItemNotFound(id) => write!(f, "Item \"{}\" not found", id),
            Self::InvalidNumber { field, input } => {
                write!(f, "Invalid {}: \"{}\"", field, input)
            }
        }
    }
}

impl Error {
    /// Returns `true` for errors the menu reports and recovers from
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ItemExists(_) | Self::ItemNotFound(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IOError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        // Decode failures are reported by `persist::load` with the file path
        if err.is_io() {
            Self::IOError(err.into())
        } else {
            Self::SerializeError(err.to_string())
        }
    }
}
