// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the file picker bridge.

use thiserror::Error;

/// Rejection message surfaced to the host when the user dismisses the chooser.
pub const PICK_FILES_CANCELED: &str = "pickFiles canceled.";

/// Rejection message surfaced to the host for every other failure.
pub const PICK_FILES_FAILED: &str = "pickFiles failed.";

/// Top-level error type for all file picker operations.
#[derive(Debug, Error)]
pub enum PickerError {
    // -- Terminal pick outcomes --
    #[error("pickFiles canceled.")]
    Canceled,

    #[error("pickFiles failed.")]
    Failed,

    // -- Resolution --
    #[error("could not resolve {uri}: {reason}")]
    Resolve { uri: String, reason: String },

    #[error("unsupported URI: {0}")]
    UnsupportedUri(String),

    #[error("{uri} is larger than {limit} bytes")]
    ContentTooLarge { uri: String, limit: u64 },

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

impl PickerError {
    /// The fixed message handed back to the host when a call is rejected.
    ///
    /// Everything except a user cancellation collapses into the generic
    /// failure message; the detail only reaches the log.
    pub fn reject_message(&self) -> &'static str {
        match self {
            Self::Canceled => PICK_FILES_CANCELED,
            _ => PICK_FILES_FAILED,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_messages_are_canonical() {
        assert_eq!(PickerError::Canceled.to_string(), "pickFiles canceled.");
        assert_eq!(PickerError::Failed.to_string(), "pickFiles failed.");
    }

    #[test]
    fn only_cancel_keeps_its_own_reject_message() {
        assert_eq!(PickerError::Canceled.reject_message(), PICK_FILES_CANCELED);
        assert_eq!(PickerError::Failed.reject_message(), PICK_FILES_FAILED);
        assert_eq!(
            PickerError::Bridge("startActivityForResult threw".into()).reject_message(),
            PICK_FILES_FAILED
        );
        assert_eq!(PickerError::PlatformUnavailable.reject_message(), PICK_FILES_FAILED);
        let too_large = PickerError::ContentTooLarge {
            uri: "file:///tmp/a.bin".into(),
            limit: 16,
        };
        assert_eq!(too_large.to_string(), "file:///tmp/a.bin is larger than 16 bytes");
        assert_eq!(too_large.reject_message(), PICK_FILES_FAILED);
    }
}
