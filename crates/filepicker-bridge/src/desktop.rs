// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge: native open-file dialog via `rfd`, local file resolution.
//
// The dialog is modal and blocking. By default each launch runs it on a
// thread of its own. macOS only allows dialogs on the process main thread,
// so a host can instead build the bridge with
// [`DesktopBridge::with_main_thread_dialogs`] and drive the returned
// [`DialogPump`] from `main` while the async runtime lives elsewhere. Either
// way the result is delivered through the activity callback like on Android.
//
// The chooser's MIME filters become extension filters through the core MIME
// table; `*/*` and types the table does not know leave the dialog unfiltered.

use std::path::PathBuf;
use std::sync::mpsc;

use filepicker_core::error::{PickerError, Result};
use filepicker_core::types::ContentUri;

use crate::activity::{ActivityCallback, ActivityResult, ResultData};
use crate::intent::{ChooserRequest, ContentIntent};
use crate::local::LocalFileResolver;
use crate::traits::*;

/// Bridge used on desktop and CI builds.
#[derive(Debug, Default)]
pub struct DesktopBridge {
    resolver: LocalFileResolver,
    host: DialogHost,
}

/// Where dialogs are shown.
#[derive(Debug, Default)]
enum DialogHost {
    /// A fresh thread per launch.
    #[default]
    Spawned,
    /// Queued for the thread running a [`DialogPump`].
    Pump(mpsc::Sender<DialogJob>),
}

/// A chooser waiting to be shown, with the callback that receives its result.
#[derive(Debug)]
struct DialogJob {
    request: ChooserRequest,
    callback: ActivityCallback,
}

impl DialogJob {
    fn run(self) {
        let multiple = self.request.target.allow_multiple;
        let selection = show_dialog(&self.request);
        self.callback.deliver(activity_result(selection, multiple));
    }
}

/// Runs queued dialogs on the thread that calls [`DialogPump::run`].
#[derive(Debug)]
pub struct DialogPump {
    jobs: mpsc::Receiver<DialogJob>,
}

impl DialogPump {
    /// Show dialogs as they are launched until the paired bridge is dropped.
    pub fn run(self) {
        for job in self.jobs {
            tracing::debug!(call_id = %job.callback.call_id(), "Desktop: showing queued file dialog");
            job.run();
        }
    }
}

impl DesktopBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bridge whose dialogs run wherever the returned pump is driven.
    pub fn with_main_thread_dialogs() -> (Self, DialogPump) {
        let (sender, jobs) = mpsc::channel();
        let bridge = Self {
            resolver: LocalFileResolver,
            host: DialogHost::Pump(sender),
        };
        (bridge, DialogPump { jobs })
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl ActivityLauncher for DesktopBridge {
    fn launch(&self, request: ChooserRequest, callback: ActivityCallback) -> Result<()> {
        let call_id = callback.call_id();
        let job = DialogJob { request, callback };
        match &self.host {
            DialogHost::Spawned => {
                std::thread::Builder::new()
                    .name(format!("file-dialog-{call_id}"))
                    .spawn(move || job.run())
                    .map_err(|e| {
                        PickerError::Bridge(format!("failed to spawn dialog thread: {e}"))
                    })?;
                tracing::debug!(%call_id, "Desktop: file dialog thread started");
            }
            DialogHost::Pump(jobs) => {
                jobs.send(job)
                    .map_err(|_| PickerError::Bridge("dialog pump is no longer running".into()))?;
                tracing::debug!(%call_id, "Desktop: file dialog queued for the main thread");
            }
        }
        Ok(())
    }
}

impl ContentResolver for DesktopBridge {
    fn path(&self, uri: &ContentUri) -> Result<Option<String>> {
        self.resolver.path(uri)
    }

    fn display_name(&self, uri: &ContentUri) -> Result<Option<String>> {
        self.resolver.display_name(uri)
    }

    fn mime_type(&self, uri: &ContentUri) -> Result<Option<String>> {
        self.resolver.mime_type(uri)
    }

    fn size(&self, uri: &ContentUri) -> Result<Option<u64>> {
        self.resolver.size(uri)
    }

    fn read_bytes(&self, uri: &ContentUri, limit: Option<u64>) -> Result<Vec<u8>> {
        self.resolver.read_bytes(uri, limit)
    }
}

fn show_dialog(request: &ChooserRequest) -> Option<Vec<PathBuf>> {
    let mut dialog = rfd::FileDialog::new().set_title(request.title.as_str());
    if let Some(extensions) = dialog_extensions(&request.target) {
        dialog = dialog.add_filter("Accepted files", extensions.as_slice());
    }

    if request.target.allow_multiple {
        dialog.pick_files()
    } else {
        dialog.pick_file().map(|path| vec![path])
    }
}

/// Extension filter for the dialog, or `None` to accept everything.
fn dialog_extensions(intent: &ContentIntent) -> Option<Vec<&'static str>> {
    let types = intent.accepted_types.as_ref()?;
    let mut extensions = Vec::new();
    for mime_type in types {
        let known = filepicker_core::mime::extensions_for(mime_type);
        if known.is_empty() {
            // Unmappable type: fall back to an unfiltered dialog.
            return None;
        }
        for ext in known {
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
    }
    (!extensions.is_empty()).then_some(extensions)
}

fn activity_result(selection: Option<Vec<PathBuf>>, multiple: bool) -> ActivityResult {
    match selection {
        None => ActivityResult::canceled(),
        Some(paths) => {
            let uris: Vec<ContentUri> = paths.iter().map(|p| ContentUri::from_path(p)).collect();
            let data = if multiple {
                ResultData::clip(uris)
            } else {
                match uris.into_iter().next() {
                    Some(uri) => ResultData::single(uri),
                    None => ResultData::default(),
                }
            };
            ActivityResult::ok(Some(data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filepicker_core::types::{CallId, SelectionRequest};

    fn intent(types: Option<Vec<&str>>, multiple: bool) -> ContentIntent {
        ContentIntent::for_selection(&SelectionRequest {
            types: types.map(|t| t.into_iter().map(String::from).collect()),
            multiple,
            read_data: true,
        })
    }

    #[test]
    fn any_type_leaves_dialog_unfiltered() {
        assert_eq!(dialog_extensions(&intent(None, false)), None);
        assert_eq!(dialog_extensions(&intent(Some(vec!["image/png"]), true)), None);
    }

    #[test]
    fn known_types_become_extensions() {
        let exts = dialog_extensions(&intent(Some(vec!["application/pdf", "image/jpeg"]), false))
            .expect("filter");
        assert_eq!(exts, vec!["pdf", "jpg", "jpeg"]);
    }

    #[test]
    fn unknown_type_disables_filter() {
        let exts = dialog_extensions(&intent(
            Some(vec!["application/pdf", "application/x-custom"]),
            false,
        ));
        assert_eq!(exts, None);
    }

    fn chooser(multiple: bool) -> ChooserRequest {
        ChooserRequest {
            title: "Choose a file".into(),
            target: intent(None, multiple),
        }
    }

    #[test]
    fn pump_receives_launched_dialogs() {
        let (bridge, pump) = DesktopBridge::with_main_thread_dialogs();
        let call_id = CallId::new();
        let (callback, _receiver) = ActivityCallback::channel(call_id);

        bridge.launch(chooser(true), callback).expect("launch");

        let job = pump.jobs.try_recv().expect("queued job");
        assert_eq!(job.callback.call_id(), call_id);
        assert!(job.request.target.allow_multiple);
    }

    #[test]
    fn pump_stops_when_bridge_is_dropped() {
        let (bridge, pump) = DesktopBridge::with_main_thread_dialogs();
        drop(bridge);
        pump.run();
    }

    #[tokio::test]
    async fn launch_without_pump_is_an_error_and_fails_the_pick() {
        let (bridge, pump) = DesktopBridge::with_main_thread_dialogs();
        drop(pump);
        let (callback, receiver) = ActivityCallback::channel(CallId::new());

        assert!(matches!(
            bridge.launch(chooser(false), callback),
            Err(PickerError::Bridge(_))
        ));
        assert!(receiver.await.is_err());
    }

    #[test]
    fn dismissed_dialog_is_a_cancel() {
        assert_eq!(activity_result(None, false), ActivityResult::canceled());
    }

    #[test]
    fn multi_selection_reports_clip_data() {
        let paths = vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")];
        let result = activity_result(Some(paths), true);
        assert_eq!(
            result.uris(),
            vec![
                ContentUri::new("file:///tmp/a.txt"),
                ContentUri::new("file:///tmp/b.txt"),
            ]
        );
        assert!(result.data.as_ref().and_then(|d| d.clip_data.as_ref()).is_some());
    }

    #[test]
    fn single_selection_reports_one_uri() {
        let result = activity_result(Some(vec![PathBuf::from("/tmp/a.txt")]), false);
        let data = result.data.expect("data");
        assert_eq!(data.uri, Some(ContentUri::new("file:///tmp/a.txt")));
        assert!(data.clip_data.is_none());
    }
}
