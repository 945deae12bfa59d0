// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The `pickFiles` request/response handler.
//
// A pick is launch-then-wait: `initiate` hands a chooser to the platform
// launcher and returns immediately; the single activity result arrives on a
// one-shot channel and `on_selection_complete` turns it into descriptors or
// one of the two fixed rejections.

use std::sync::Arc;

use filepicker_core::config::PickerConfig;
use filepicker_core::error::{PickerError, Result};
use filepicker_core::types::{CallId, SelectionRequest, SelectionResult};
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

use crate::activity::{ActivityCallback, ActivityResult, ResultCode, SelectionState};
use crate::descriptor::resolve_descriptor;
use crate::intent::{ChooserRequest, ContentIntent};
use crate::traits::PlatformBridge;

/// Host-facing file picker.
pub struct FilePickerPlugin {
    bridge: Arc<dyn PlatformBridge>,
    config: PickerConfig,
}

/// A launched chooser whose result has not arrived yet.
#[derive(Debug)]
pub struct PendingSelection {
    call_id: CallId,
    read_data: bool,
    receiver: oneshot::Receiver<ActivityResult>,
}

impl PendingSelection {
    pub fn call_id(&self) -> CallId {
        self.call_id
    }

    pub fn read_data(&self) -> bool {
        self.read_data
    }

    /// Suspend until the launcher reports the chooser's result.
    ///
    /// A launcher that drops its callback without reporting counts as a
    /// failed pick.
    pub async fn wait(self) -> Result<ActivityResult> {
        let call_id = self.call_id;
        self.receiver.await.map_err(|_| {
            warn!(%call_id, "launcher dropped the pick without a result");
            PickerError::Failed
        })
    }
}

impl FilePickerPlugin {
    pub fn new(bridge: Arc<dyn PlatformBridge>, config: PickerConfig) -> Self {
        Self { bridge, config }
    }

    /// Plugin backed by the bridge for the current target OS.
    pub fn for_platform(config: PickerConfig) -> Self {
        Self::new(crate::platform_bridge(), config)
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn platform_name(&self) -> &str {
        self.bridge.platform_name()
    }

    /// Present the chooser for `request`. Does not wait for the user.
    pub fn initiate(&self, request: &SelectionRequest) -> Result<PendingSelection> {
        let call_id = CallId::new();
        let intent = ContentIntent::for_selection(request);
        let chooser = ChooserRequest::new(intent, self.config.chooser_title.as_str());
        let (callback, receiver) = ActivityCallback::channel(call_id);

        info!(
            %call_id,
            multiple = request.multiple,
            types = ?chooser.target.accepted_types,
            platform = self.bridge.platform_name(),
            "launching file chooser"
        );

        self.bridge.launch(chooser, callback)?;

        Ok(PendingSelection {
            call_id,
            read_data: request.read_data,
            receiver,
        })
    }

    /// Turn the chooser's result into the call's outcome.
    ///
    /// Descriptors come back in the order the platform reported the URIs,
    /// one per URI, even when some of their fields could not be resolved.
    pub fn on_selection_complete(
        &self,
        result: ActivityResult,
        read_data: bool,
    ) -> Result<SelectionResult> {
        match SelectionState::Pending.advance(result.code) {
            SelectionState::Succeeded => {
                let uris = result.uris();
                let files = uris
                    .iter()
                    .map(|uri| {
                        resolve_descriptor(
                            self.bridge.as_ref(),
                            uri,
                            read_data,
                            self.config.max_read_bytes,
                        )
                    })
                    .collect();
                info!(count = uris.len(), "file selection resolved");
                Ok(SelectionResult { files })
            }
            SelectionState::Canceled => {
                info!("file selection canceled by user");
                Err(PickerError::Canceled)
            }
            SelectionState::Failed | SelectionState::Pending => {
                if let ResultCode::Other(code) = result.code {
                    warn!(code, "file chooser finished with unexpected result code");
                }
                Err(PickerError::Failed)
            }
        }
    }

    /// Launch a chooser and wait for its resolved result.
    pub async fn pick_files(&self, request: SelectionRequest) -> Result<SelectionResult> {
        let pending = self.initiate(&request)?;
        let read_data = pending.read_data();
        let result = pending.wait().await?;
        self.on_selection_complete(result, read_data)
    }

    /// Host call surface: `pickFiles({ types?, multiple?, readData? })`.
    ///
    /// Resolves with `{ files: [...] }` or rejects with one of the two fixed
    /// messages. Anything other than a cancellation is logged here, since
    /// the rejection itself carries no detail.
    pub async fn handle_call(&self, call: &Value) -> std::result::Result<Value, String> {
        let request = SelectionRequest::from_call(call, self.config.default_read_data);
        let outcome = self
            .pick_files(request)
            .await
            .and_then(|result| serde_json::to_value(result).map_err(PickerError::from));

        outcome.map_err(|e| {
            if !matches!(e, PickerError::Canceled) {
                error!(error = %e, "pickFiles rejected");
            }
            e.reject_message().to_string()
        })
    }
}
