// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Activity-result protocol: what the chooser hands back, and the one-shot
// handle a launcher uses to hand it back.

use filepicker_core::types::{CallId, ContentUri};
use tokio::sync::oneshot;

/// `Activity.RESULT_OK`
pub const RESULT_OK: i32 = -1;
/// `Activity.RESULT_CANCELED`
pub const RESULT_CANCELED: i32 = 0;

/// Platform result code of a finished chooser activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Ok,
    Canceled,
    /// Any other code, including app-defined ones.
    Other(i32),
}

impl From<i32> for ResultCode {
    fn from(code: i32) -> Self {
        match code {
            RESULT_OK => Self::Ok,
            RESULT_CANCELED => Self::Canceled,
            other => Self::Other(other),
        }
    }
}

/// Payload of a successful chooser result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultData {
    /// Single selected item (`Intent.getData()`).
    pub uri: Option<ContentUri>,
    /// Multi-item selection (`Intent.getClipData()`), in selection order.
    pub clip_data: Option<Vec<ContentUri>>,
}

impl ResultData {
    pub fn single(uri: ContentUri) -> Self {
        Self {
            uri: Some(uri),
            clip_data: None,
        }
    }

    pub fn clip(uris: Vec<ContentUri>) -> Self {
        Self {
            uri: None,
            clip_data: Some(uris),
        }
    }

    /// Selected URIs in platform order. Clip data wins over the single URI.
    pub fn uris(&self) -> Vec<ContentUri> {
        match &self.clip_data {
            Some(items) => items.clone(),
            None => self.uri.iter().cloned().collect(),
        }
    }
}

/// What the launcher reports when the chooser closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityResult {
    pub code: ResultCode,
    pub data: Option<ResultData>,
}

impl ActivityResult {
    pub fn ok(data: Option<ResultData>) -> Self {
        Self {
            code: ResultCode::Ok,
            data,
        }
    }

    pub fn canceled() -> Self {
        Self {
            code: ResultCode::Canceled,
            data: None,
        }
    }

    pub fn from_raw(code: i32, data: Option<ResultData>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Selected URIs, empty when the platform sent no payload.
    pub fn uris(&self) -> Vec<ContentUri> {
        self.data.as_ref().map(ResultData::uris).unwrap_or_default()
    }
}

/// Completion handle given to a launcher together with the chooser request.
///
/// `deliver` consumes the handle, so a launcher can report at most one
/// terminal result per pick.
#[derive(Debug)]
pub struct ActivityCallback {
    call_id: CallId,
    sender: oneshot::Sender<ActivityResult>,
}

impl ActivityCallback {
    /// Create a callback and the receiver its result will arrive on.
    pub fn channel(call_id: CallId) -> (Self, oneshot::Receiver<ActivityResult>) {
        let (sender, receiver) = oneshot::channel();
        (Self { call_id, sender }, receiver)
    }

    pub fn call_id(&self) -> CallId {
        self.call_id
    }

    /// Hand the result back to the waiting caller.
    ///
    /// Returns `false` if the caller stopped waiting.
    pub fn deliver(self, result: ActivityResult) -> bool {
        let call_id = self.call_id;
        if self.sender.send(result).is_err() {
            tracing::warn!(%call_id, "activity result delivered after caller went away");
            return false;
        }
        true
    }
}

/// Lifecycle of a single pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Pending,
    Succeeded,
    Canceled,
    Failed,
}

impl SelectionState {
    /// Apply a result code. Only `Pending` moves; terminal states stay put.
    pub fn advance(self, code: ResultCode) -> Self {
        match self {
            Self::Pending => match code {
                ResultCode::Ok => Self::Succeeded,
                ResultCode::Canceled => Self::Canceled,
                ResultCode::Other(_) => Self::Failed,
            },
            terminal => terminal,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Self::Pending
    }
}
