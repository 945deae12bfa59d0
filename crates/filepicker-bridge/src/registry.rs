// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request-code bookkeeping for launchers whose results come back through a
// host callback (Android's `onActivityResult`) rather than to the caller.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::activity::{ActivityCallback, ActivityResult};

/// First request code handed out. androidx `FragmentActivity` only accepts
/// codes that fit in the lower 16 bits.
pub const REQUEST_CODE_BASE: i32 = 0x4650; // "FP"

/// Number of distinct codes cycled through before reuse.
pub const REQUEST_CODE_SPAN: i32 = 0x100;

/// Maps in-flight request codes to the callback waiting on them.
#[derive(Debug, Default)]
pub struct RequestRegistry {
    next: AtomicI32,
    pending: Mutex<HashMap<i32, ActivityCallback>>,
}

impl RequestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `callback` and return the request code to launch with.
    pub fn register(&self, callback: ActivityCallback) -> i32 {
        let offset = self.next.fetch_add(1, Ordering::Relaxed).rem_euclid(REQUEST_CODE_SPAN);
        let request_code = REQUEST_CODE_BASE + offset;
        if let Some(stale) = self.lock().insert(request_code, callback) {
            // Dropping the stale callback fails that pick.
            tracing::warn!(
                request_code,
                call_id = %stale.call_id(),
                "request code reused while a pick was still pending"
            );
        }
        request_code
    }

    /// Remove the callback for `request_code` without delivering anything.
    pub fn take(&self, request_code: i32) -> Option<ActivityCallback> {
        self.lock().remove(&request_code)
    }

    /// Route a finished activity to its waiting pick.
    ///
    /// Returns `false` when the code is not one of ours or the caller has
    /// already gone away.
    pub fn deliver(&self, request_code: i32, result: ActivityResult) -> bool {
        match self.take(request_code) {
            Some(callback) => {
                tracing::debug!(request_code, call_id = %callback.call_id(), "routing activity result");
                callback.deliver(result)
            }
            None => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i32, ActivityCallback>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
