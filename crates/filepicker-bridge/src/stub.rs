// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for targets without a chooser implementation (iOS for now).
//
// Launching returns `PlatformUnavailable`; `file://` URIs still resolve
// through the local resolver.

use filepicker_core::error::{PickerError, Result};
use filepicker_core::types::ContentUri;

use crate::activity::ActivityCallback;
use crate::intent::ChooserRequest;
use crate::local::LocalFileResolver;
use crate::traits::*;

/// Bridge returned on platforms with no native chooser wiring.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Unsupported (stub)"
    }
}

impl ActivityLauncher for StubBridge {
    fn launch(&self, _request: ChooserRequest, _callback: ActivityCallback) -> Result<()> {
        tracing::warn!("ActivityLauncher::launch called on stub bridge");
        Err(PickerError::PlatformUnavailable)
    }
}

impl ContentResolver for StubBridge {
    fn path(&self, uri: &ContentUri) -> Result<Option<String>> {
        LocalFileResolver.path(uri)
    }

    fn display_name(&self, uri: &ContentUri) -> Result<Option<String>> {
        LocalFileResolver.display_name(uri)
    }

    fn mime_type(&self, uri: &ContentUri) -> Result<Option<String>> {
        LocalFileResolver.mime_type(uri)
    }

    fn size(&self, uri: &ContentUri) -> Result<Option<u64>> {
        LocalFileResolver.size(uri)
    }

    fn read_bytes(&self, uri: &ContentUri, limit: Option<u64>) -> Result<Vec<u8>> {
        LocalFileResolver.read_bytes(uri, limit)
    }
}
