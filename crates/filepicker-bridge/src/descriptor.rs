// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Best-effort URI -> FileDescriptor resolution.
//
// Each field is looked up on its own. A lookup that errors is logged and
// leaves its field empty; it never takes the rest of the descriptor (or the
// rest of the selection) down with it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use filepicker_core::error::{PickerError, Result};
use filepicker_core::types::{ContentUri, FileDescriptor};
use tracing::{debug, warn};

use crate::traits::ContentResolver;

/// Resolve one selected URI.
///
/// `max_read_bytes` caps inline content: when the known size exceeds it the
/// content is not read at all, and when the size is unknown the read stops
/// one byte past the cap. Either way `data` is left out.
pub fn resolve_descriptor<R>(
    resolver: &R,
    uri: &ContentUri,
    read_data: bool,
    max_read_bytes: Option<u64>,
) -> FileDescriptor
where
    R: ContentResolver + ?Sized,
{
    let path = best_effort(uri, "path", resolver.path(uri));
    let name = best_effort(uri, "name", resolver.display_name(uri));
    let mime_type = best_effort(uri, "mimeType", resolver.mime_type(uri));
    let size = best_effort(uri, "size", resolver.size(uri));

    let data = if read_data {
        read_data_field(resolver, uri, size, max_read_bytes)
    } else {
        None
    };

    FileDescriptor {
        path,
        name,
        data,
        mime_type,
        size,
    }
}

fn best_effort<T>(uri: &ContentUri, field: &str, lookup: Result<Option<T>>) -> Option<T> {
    match lookup {
        Ok(value) => value,
        Err(e) => {
            debug!(%uri, field, error = %e, "field lookup failed, leaving it absent");
            None
        }
    }
}

fn read_data_field<R>(
    resolver: &R,
    uri: &ContentUri,
    known_size: Option<u64>,
    max_read_bytes: Option<u64>,
) -> Option<String>
where
    R: ContentResolver + ?Sized,
{
    if let (Some(size), Some(limit)) = (known_size, max_read_bytes) {
        if size > limit {
            warn!(%uri, size, limit, "file exceeds inline data limit, skipping read");
            return None;
        }
    }

    match resolver.read_bytes(uri, max_read_bytes) {
        Ok(bytes) => Some(STANDARD.encode(&bytes)),
        Err(PickerError::ContentTooLarge { limit, .. }) => {
            warn!(%uri, limit, "file exceeds inline data limit");
            None
        }
        Err(e) => {
            debug!(%uri, error = %e, "could not read file content");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBridge;

    fn uri() -> ContentUri {
        ContentUri::new("content://com.example.docs/document/1")
    }

    #[test]
    fn all_fields_resolved() {
        let bridge = MockBridge::new().with_file(&uri(), "hello.txt", "text/plain", b"hello");
        let descriptor = resolve_descriptor(&bridge, &uri(), true, None);

        assert_eq!(descriptor.path.as_deref(), Some(uri().as_str()));
        assert_eq!(descriptor.name.as_deref(), Some("hello.txt"));
        assert_eq!(descriptor.mime_type.as_deref(), Some("text/plain"));
        assert_eq!(descriptor.size, Some(5));
        assert_eq!(descriptor.data.as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn no_data_unless_requested() {
        let bridge = MockBridge::new().with_file(&uri(), "hello.txt", "text/plain", b"hello");
        let descriptor = resolve_descriptor(&bridge, &uri(), false, None);
        assert!(descriptor.data.is_none());
        assert_eq!(bridge.reads(), 0);
    }

    #[test]
    fn one_failing_field_leaves_the_others() {
        let bridge = MockBridge::new()
            .with_file(&uri(), "hello.txt", "text/plain", b"hello")
            .failing_path(&uri())
            .failing_size(&uri());
        let descriptor = resolve_descriptor(&bridge, &uri(), true, None);

        assert!(descriptor.path.is_none());
        assert!(descriptor.size.is_none());
        assert_eq!(descriptor.name.as_deref(), Some("hello.txt"));
        assert_eq!(descriptor.mime_type.as_deref(), Some("text/plain"));
        assert!(descriptor.data.is_some());
    }

    #[test]
    fn unreadable_content_leaves_data_absent() {
        let bridge = MockBridge::new()
            .with_file(&uri(), "hello.txt", "text/plain", b"hello")
            .failing_read(&uri());
        let descriptor = resolve_descriptor(&bridge, &uri(), true, None);
        assert!(descriptor.data.is_none());
        assert_eq!(descriptor.size, Some(5));
    }

    #[test]
    fn oversized_file_is_not_read() {
        let bridge = MockBridge::new().with_file(&uri(), "big.bin", "application/zip", &[0u8; 64]);
        let descriptor = resolve_descriptor(&bridge, &uri(), true, Some(16));
        assert!(descriptor.data.is_none());
        assert_eq!(bridge.reads(), 0);
    }

    #[test]
    fn limit_applies_when_size_is_unknown() {
        let bridge = MockBridge::new()
            .with_file(&uri(), "big.bin", "application/zip", &[0u8; 64])
            .failing_size(&uri());
        let descriptor = resolve_descriptor(&bridge, &uri(), true, Some(16));
        assert!(descriptor.data.is_none());
        assert_eq!(bridge.reads(), 1);
        assert_eq!(bridge.bytes_read(), 17);
    }

    #[test]
    fn file_at_the_limit_is_inlined() {
        let bridge = MockBridge::new()
            .with_file(&uri(), "exact.bin", "application/zip", &[1u8; 16])
            .failing_size(&uri());
        let descriptor = resolve_descriptor(&bridge, &uri(), true, Some(16));
        assert!(descriptor.data.is_some());
        assert_eq!(bridge.bytes_read(), 16);
    }

    #[test]
    fn unknown_uri_yields_empty_descriptor() {
        let bridge = MockBridge::new();
        let descriptor = resolve_descriptor(&bridge, &uri(), true, None);
        assert_eq!(descriptor, FileDescriptor::default());
    }
}
