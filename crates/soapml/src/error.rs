//! Error types for soapml

use std::fmt;
use thiserror::Error;

use crate::version::SoapVersion;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The envelope body (elements or fault) was configured more than once
    DuplicateBody,
    /// A fault operation was invoked on the fault shape of the other SOAP version
    VersionMismatch {
        method: &'static str,
        required: SoapVersion,
    },
    /// A protocol version was requested for which no envelope namespace is known
    UnknownVersion { version: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBody => write!(f, "body already set"),
            Self::VersionMismatch { method, required } => {
                write!(f, "{method} requires SOAP {required}")
            }
            Self::UnknownVersion { version } => write!(f, "unknown SOAP version: {version}"),
        }
    }
}

/// Main error type for soapml
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn duplicate_body() -> Self {
        Self::new(ErrorKind::DuplicateBody)
    }

    pub fn version_mismatch(method: &'static str, required: SoapVersion) -> Self {
        Self::new(ErrorKind::VersionMismatch { method, required })
    }

    pub fn unknown_version(version: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownVersion {
            version: version.into(),
        })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result type alias for soapml
pub type Result<T> = std::result::Result<T, Error>;
