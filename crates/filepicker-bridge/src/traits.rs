// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the two native collaborators of
// the file picker: something that can show a chooser, and something that can
// turn a returned URI into metadata and bytes.

use filepicker_core::error::Result;
use filepicker_core::types::ContentUri;

use crate::activity::ActivityCallback;
use crate::intent::ChooserRequest;

/// Unified bridge that groups the native capabilities the picker needs.
pub trait PlatformBridge: ActivityLauncher + ContentResolver + Send + Sync {
    /// Human-readable platform name (e.g. "Android", "Desktop").
    fn platform_name(&self) -> &str;
}

/// Presents a chooser and reports the user's choice exactly once.
pub trait ActivityLauncher {
    /// Launch the chooser described by `request`.
    ///
    /// Must return without waiting for the user. The outcome is reported
    /// later by consuming `callback`; dropping it unfired is treated as a
    /// failed pick. An `Err` here means nothing was presented.
    fn launch(&self, request: ChooserRequest, callback: ActivityCallback) -> Result<()>;
}

/// Resolves a platform URI into file metadata and content.
///
/// Every method is queried independently. Implementations should return
/// `Ok(None)` when the platform simply does not know a value and `Err` when
/// the lookup itself broke; callers treat both as "absent".
pub trait ContentResolver {
    /// Filesystem path, or the content identifier when no path exists.
    fn path(&self, uri: &ContentUri) -> Result<Option<String>>;

    /// Display name of the resource.
    fn display_name(&self, uri: &ContentUri) -> Result<Option<String>>;

    /// MIME type reported for the resource.
    fn mime_type(&self, uri: &ContentUri) -> Result<Option<String>>;

    /// Size in bytes.
    fn size(&self, uri: &ContentUri) -> Result<Option<u64>>;

    /// Full content of the resource.
    ///
    /// With a `limit`, reading stops as soon as more than `limit` bytes have
    /// arrived and the call fails with [`PickerError::ContentTooLarge`].
    ///
    /// [`PickerError::ContentTooLarge`]: filepicker_core::error::PickerError::ContentTooLarge
    fn read_bytes(&self, uri: &ContentUri, limit: Option<u64>) -> Result<Vec<u8>>;
}
