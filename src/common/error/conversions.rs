//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from third-party
//! and internal error types to the unified Error type.

use super::types::Error;

impl From<crate::ooxml::opc::error::OpcError> for Error {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        match err {
            crate::ooxml::opc::error::OpcError::IoError(e) => Error::Io(e),
            other => Error::Ooxml(other.into()),
        }
    }
}

impl From<serde_saphyr::Error> for Error {
    fn from(err: serde_saphyr::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Ooxml(crate::ooxml::error::OoxmlError::Opc(err.into()))
    }
}
