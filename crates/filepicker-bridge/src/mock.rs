// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scriptable in-memory bridge for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use filepicker_core::error::{PickerError, Result};
use filepicker_core::types::ContentUri;

use crate::activity::{ActivityCallback, ActivityResult};
use crate::intent::ChooserRequest;
use crate::traits::*;

/// How the mock launcher answers a launch.
#[derive(Debug, Clone)]
pub enum LaunchScript {
    /// Deliver this result immediately.
    Deliver(ActivityResult),
    /// Drop the callback without delivering anything.
    Drop,
    /// Refuse to launch.
    Fail,
}

struct MockFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

pub struct MockBridge {
    files: HashMap<ContentUri, MockFile>,
    failing_paths: HashSet<ContentUri>,
    failing_sizes: HashSet<ContentUri>,
    failing_reads: HashSet<ContentUri>,
    script: LaunchScript,
    launched: Mutex<Vec<ChooserRequest>>,
    reads: AtomicUsize,
    bytes_read: AtomicUsize,
}

impl MockBridge {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            failing_paths: HashSet::new(),
            failing_sizes: HashSet::new(),
            failing_reads: HashSet::new(),
            script: LaunchScript::Deliver(ActivityResult::canceled()),
            launched: Mutex::new(Vec::new()),
            reads: AtomicUsize::new(0),
            bytes_read: AtomicUsize::new(0),
        }
    }

    pub fn with_file(mut self, uri: &ContentUri, name: &str, mime_type: &str, bytes: &[u8]) -> Self {
        self.files.insert(
            uri.clone(),
            MockFile {
                name: name.into(),
                mime_type: mime_type.into(),
                bytes: bytes.to_vec(),
            },
        );
        self
    }

    pub fn failing_path(mut self, uri: &ContentUri) -> Self {
        self.failing_paths.insert(uri.clone());
        self
    }

    pub fn failing_size(mut self, uri: &ContentUri) -> Self {
        self.failing_sizes.insert(uri.clone());
        self
    }

    pub fn failing_read(mut self, uri: &ContentUri) -> Self {
        self.failing_reads.insert(uri.clone());
        self
    }

    pub fn answering(mut self, script: LaunchScript) -> Self {
        self.script = script;
        self
    }

    pub fn launched(&self) -> Vec<ChooserRequest> {
        self.launched.lock().expect("launch log poisoned").clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Bytes handed out by `read_bytes`, counting the one that tripped a limit.
    pub fn bytes_read(&self) -> usize {
        self.bytes_read.load(Ordering::SeqCst)
    }

    fn file(&self, uri: &ContentUri) -> Option<&MockFile> {
        self.files.get(uri)
    }
}

fn broken(uri: &ContentUri, reason: &str) -> PickerError {
    PickerError::Resolve {
        uri: uri.to_string(),
        reason: reason.into(),
    }
}

impl PlatformBridge for MockBridge {
    fn platform_name(&self) -> &str {
        "Mock"
    }
}

impl ActivityLauncher for MockBridge {
    fn launch(&self, request: ChooserRequest, callback: ActivityCallback) -> Result<()> {
        if matches!(self.script, LaunchScript::Fail) {
            return Err(PickerError::Bridge("launch refused".into()));
        }
        self.launched.lock().expect("launch log poisoned").push(request);
        match &self.script {
            LaunchScript::Deliver(result) => {
                callback.deliver(result.clone());
            }
            LaunchScript::Drop | LaunchScript::Fail => drop(callback),
        }
        Ok(())
    }
}

impl ContentResolver for MockBridge {
    fn path(&self, uri: &ContentUri) -> Result<Option<String>> {
        if self.failing_paths.contains(uri) {
            return Err(broken(uri, "path lookup failed"));
        }
        Ok(self.file(uri).map(|_| uri.to_string()))
    }

    fn display_name(&self, uri: &ContentUri) -> Result<Option<String>> {
        Ok(self.file(uri).map(|f| f.name.clone()))
    }

    fn mime_type(&self, uri: &ContentUri) -> Result<Option<String>> {
        Ok(self.file(uri).map(|f| f.mime_type.clone()))
    }

    fn size(&self, uri: &ContentUri) -> Result<Option<u64>> {
        if self.failing_sizes.contains(uri) {
            return Err(broken(uri, "size column missing"));
        }
        Ok(self.file(uri).map(|f| f.bytes.len() as u64))
    }

    fn read_bytes(&self, uri: &ContentUri, limit: Option<u64>) -> Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.failing_reads.contains(uri) {
            return Err(broken(uri, "stream closed"));
        }
        let file = self.file(uri).ok_or_else(|| broken(uri, "no such document"))?;
        match limit {
            Some(limit) if file.bytes.len() as u64 > limit => {
                let consumed = usize::try_from(limit.saturating_add(1)).unwrap_or(usize::MAX);
                self.bytes_read.fetch_add(consumed, Ordering::SeqCst);
                Err(PickerError::ContentTooLarge {
                    uri: uri.to_string(),
                    limit,
                })
            }
            _ => {
                self.bytes_read.fetch_add(file.bytes.len(), Ordering::SeqCst);
                Ok(file.bytes.clone())
            }
        }
    }
}
