// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content resolver for `file://` URIs, backed by the local filesystem.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use filepicker_core::error::{PickerError, Result};
use filepicker_core::mime;
use filepicker_core::types::ContentUri;

use crate::traits::ContentResolver;

/// Resolves `file://` URIs with `std::fs`. Any other scheme is unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileResolver;

impl LocalFileResolver {
    fn local_path(uri: &ContentUri) -> Result<PathBuf> {
        uri.to_file_path()
            .ok_or_else(|| PickerError::UnsupportedUri(uri.to_string()))
    }
}

impl ContentResolver for LocalFileResolver {
    fn path(&self, uri: &ContentUri) -> Result<Option<String>> {
        let path = Self::local_path(uri)?;
        Ok(Some(path.display().to_string()))
    }

    fn display_name(&self, uri: &ContentUri) -> Result<Option<String>> {
        let path = Self::local_path(uri)?;
        Ok(path.file_name().map(|n| n.to_string_lossy().to_string()))
    }

    fn mime_type(&self, uri: &ContentUri) -> Result<Option<String>> {
        let path = Self::local_path(uri)?;
        Ok(path
            .extension()
            .and_then(|ext| mime::from_extension(&ext.to_string_lossy()))
            .map(String::from))
    }

    fn size(&self, uri: &ContentUri) -> Result<Option<u64>> {
        let path = Self::local_path(uri)?;
        let metadata = std::fs::metadata(&path)?;
        Ok(metadata.is_file().then(|| metadata.len()))
    }

    fn read_bytes(&self, uri: &ContentUri, limit: Option<u64>) -> Result<Vec<u8>> {
        let path = Self::local_path(uri)?;
        let Some(limit) = limit else {
            return Ok(std::fs::read(&path)?);
        };

        let mut bytes = Vec::new();
        File::open(&path)?
            .take(limit.saturating_add(1))
            .read_to_end(&mut bytes)?;
        if bytes.len() as u64 > limit {
            return Err(PickerError::ContentTooLarge {
                uri: uri.to_string(),
                limit,
            });
        }
        Ok(bytes)
    }
}
