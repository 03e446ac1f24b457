use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    EmptyValue(String),
    DirectoryDoesNotExist(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::EmptyValue(e) => write!(f, "Empty configuration value: {}", e),
            ConfigError::DirectoryDoesNotExist(e) => write!(f, "Directory error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

/// Errors raised by the in-memory quote store.
#[derive(Debug, PartialEq)]
pub enum QuoteError {
    /// A required field was blank after trimming. Carries the field name.
    Validation(String),
    /// A random pick was requested over an empty subset.
    EmptyCollection,
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::Validation(field) => write!(f, "Quote {} must not be empty", field),
            QuoteError::EmptyCollection => write!(f, "No quotes to choose from"),
        }
    }
}

impl std::error::Error for QuoteError {}

#[derive(Debug)]
pub enum StorageError {
    ConnectionFailed,
    WriteFailed,
    ReadFailed,
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionFailed => write!(f, "Storage connection failed"),
            StorageError::WriteFailed => write!(f, "Storage write failed"),
            StorageError::ReadFailed => write!(f, "Storage read failed"),
            StorageError::Serialization(e) => write!(f, "Storage serialization failed: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

/// Errors raised while importing or exporting quote files.
#[derive(Debug)]
pub enum TransferError {
    InvalidJson(String),
    UnsupportedFormat,
    Serialization(String),
    IoError(std::io::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::InvalidJson(e) => write!(f, "Invalid JSON file: {}", e),
            TransferError::UnsupportedFormat => write!(
                f,
                "Unsupported file format: expected an array of quotes or an object with a `quotes` array"
            ),
            TransferError::Serialization(e) => write!(f, "Export serialization failed: {}", e),
            TransferError::IoError(e) => write!(f, "Transfer IO error: {}", e),
        }
    }
}

impl std::error::Error for TransferError {}

impl From<std::io::Error> for TransferError {
    fn from(err: std::io::Error) -> Self {
        TransferError::IoError(err)
    }
}

#[derive(Debug)]
pub enum SyncError {
    FetchFailed(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::FetchFailed(e) => write!(f, "Server sync failed: {}", e),
        }
    }
}

impl std::error::Error for SyncError {}

#[derive(Debug)]
pub enum ControllerError {
    ConfigurationError(ConfigError),
    QuoteError(QuoteError),
    StorageError(StorageError),
    TransferError(TransferError),
    SyncError(SyncError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::ConfigurationError(e) => write!(f, "Configuration error: {}", e),
            ControllerError::QuoteError(e) => write!(f, "{}", e),
            ControllerError::StorageError(e) => write!(f, "Storage error: {}", e),
            ControllerError::TransferError(e) => write!(f, "{}", e),
            ControllerError::SyncError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        ControllerError::ConfigurationError(err)
    }
}

impl From<QuoteError> for ControllerError {
    fn from(err: QuoteError) -> Self {
        ControllerError::QuoteError(err)
    }
}

impl From<StorageError> for ControllerError {
    fn from(err: StorageError) -> Self {
        ControllerError::StorageError(err)
    }
}

impl From<TransferError> for ControllerError {
    fn from(err: TransferError) -> Self {
        ControllerError::TransferError(err)
    }
}

impl From<SyncError> for ControllerError {
    fn from(err: SyncError) -> Self {
        ControllerError::SyncError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = QuoteError::Validation("category".into());
        assert_eq!(err.to_string(), "Quote category must not be empty");
    }

    #[test]
    fn controller_error_wraps_storage_error() {
        let err: ControllerError = StorageError::WriteFailed.into();
        assert!(matches!(err, ControllerError::StorageError(StorageError::WriteFailed)));
        assert_eq!(err.to_string(), "Storage error: Storage write failed");
    }
}
