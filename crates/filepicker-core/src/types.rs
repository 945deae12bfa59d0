// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the file picker bridge.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Correlation token for a single in-flight pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallId(pub Uuid);

impl CallId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque platform locator for a selected file.
///
/// On Android this is usually a `content://` URI handed out by a document
/// provider; it is not guaranteed to name anything on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentUri(String);

const FILE_SCHEME_PREFIX: &str = "file://";

impl ContentUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Build a `file://` URI for a local path, percent-encoding each
    /// path segment.
    pub fn from_path(path: &Path) -> Self {
        let path = path.to_string_lossy();
        let encoded: Vec<_> = path.split('/').map(urlencoding::encode).collect();
        Self(format!("{FILE_SCHEME_PREFIX}{}", encoded.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scheme part of the URI (`content`, `file`, ...), if any.
    pub fn scheme(&self) -> Option<&str> {
        let (scheme, _) = self.0.split_once(':')?;
        if scheme.is_empty() {
            None
        } else {
            Some(scheme)
        }
    }

    /// Local filesystem path for `file://` URIs. Other schemes, and paths
    /// that do not decode to UTF-8, return `None`.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        let rest = self.0.strip_prefix(FILE_SCHEME_PREFIX)?;
        // file://localhost/tmp/x is the same file as file:///tmp/x
        let rest = rest.strip_prefix("localhost").unwrap_or(rest);
        let rest = rest.find(['?', '#']).map_or(rest, |end| &rest[..end]);
        if rest.is_empty() {
            return None;
        }
        let decoded = urlencoding::decode(rest).ok()?;
        Some(PathBuf::from(decoded.into_owned()))
    }
}

impl std::fmt::Display for ContentUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single `pickFiles` invocation as requested by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    /// Accepted MIME types, in caller order. Only honoured for single picks.
    pub types: Option<Vec<String>>,
    /// Whether the user may select more than one file.
    pub multiple: bool,
    /// Whether each descriptor carries the file's bytes.
    pub read_data: bool,
}

impl Default for SelectionRequest {
    fn default() -> Self {
        Self {
            types: None,
            multiple: false,
            read_data: true,
        }
    }
}

impl SelectionRequest {
    /// Parse the host's call object `{ types?, multiple?, readData? }`.
    ///
    /// Never fails. A malformed `types` value is logged and treated as if no
    /// filter had been supplied. A missing or non-boolean `multiple` is
    /// `false`; `readData` falls back to `default_read_data`.
    pub fn from_call(call: &Value, default_read_data: bool) -> Self {
        Self {
            types: parse_types_option(call.get("types")),
            multiple: call.get("multiple").and_then(Value::as_bool).unwrap_or(false),
            read_data: call
                .get("readData")
                .and_then(Value::as_bool)
                .unwrap_or(default_read_data),
        }
    }
}

fn parse_types_option(types: Option<&Value>) -> Option<Vec<String>> {
    let types = match types {
        None | Some(Value::Null) => return None,
        Some(types) => types,
    };
    let Some(items) = types.as_array() else {
        tracing::error!(value = %types, "types option is not an array, ignoring filter");
        return None;
    };
    let parsed: Option<Vec<String>> = items
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect();
    if parsed.is_none() {
        tracing::error!(value = %types, "types option has a non-string entry, ignoring filter");
    }
    parsed
}

/// Metadata (and optionally content) for one selected file.
///
/// Every field is best-effort; anything the platform could not report is
/// left out of the serialized object rather than sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base64 (standard alphabet) file content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Resolved value of a successful pick: one descriptor per selected URI,
/// in the order the platform reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub files: Vec<FileDescriptor>,
}

impl SelectionResult {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
