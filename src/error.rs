//! Error Module for the libclang bridge
//!
//! Only marshaling failures live here. Native outcomes (error codes,
//! severities, null handles) are plain values and never become errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("libclang is not loaded on this thread: {0}")]
    LibraryNotLoaded(String),

    #[error("{what} contains an interior NUL byte at offset {offset}")]
    InteriorNul { what: String, offset: usize },

    #[error("visitor returned {0}, which is not a visit directive")]
    InvalidDirective(String),

    #[error("visitor failed: {0}")]
    VisitorFailed(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

impl BridgeError {
    pub fn interior_nul(what: &str, err: &std::ffi::NulError) -> Self {
        BridgeError::InteriorNul {
            what: what.to_string(),
            offset: err.nul_position(),
        }
    }
}

#[cfg(feature = "napi")]
impl From<BridgeError> for napi::Error {
    fn from(err: BridgeError) -> Self {
        napi::Error::from_reason(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_interior_nul_reports_offset() {
        let err = CString::new("ab\0cd").unwrap_err();
        let bridge = BridgeError::interior_nul("command-line argument", &err);
        assert_eq!(
            bridge.to_string(),
            "command-line argument contains an interior NUL byte at offset 2"
        );
    }

    #[test]
    fn test_invalid_directive_message() {
        let err = BridgeError::InvalidDirective("7".to_string());
        assert!(err.to_string().starts_with("visitor returned 7"));
    }
}
