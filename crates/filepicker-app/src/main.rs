// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File picker host shim.
//
// Entry point. Initialises logging, loads settings, then runs one
// `pickFiles` call whose options are given as a JSON object argument:
//
//     filepicker '{"types":["application/pdf"],"readData":false}'
//
// The resolved `{ files: [...] }` object is printed to stdout; a rejection
// message goes to stderr with a non-zero exit status.

mod services;

use std::process::ExitCode;

use filepicker_bridge::FilePickerPlugin;
use filepicker_core::PickerConfig;
use serde_json::Value;
use tokio::runtime::Runtime;

use services::{config_store, data_dir};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let call = match parse_call(std::env::args().nth(1).as_deref()) {
        Ok(call) => call,
        Err(e) => {
            eprintln!("invalid call options: {e}");
            return ExitCode::from(2);
        }
    };

    let config = config_store::load_config(&config_store::config_path(&data_dir::data_dir()));
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "could not start async runtime");
            return ExitCode::FAILURE;
        }
    };

    match run_call(runtime, config, call) {
        Some(outcome) => report(outcome),
        None => ExitCode::FAILURE,
    }
}

/// Desktop: the call runs on a worker thread and the main thread shows the
/// dialog, which macOS requires.
#[cfg(not(any(target_os = "ios", target_os = "android")))]
fn run_call(runtime: Runtime, config: PickerConfig, call: Value) -> Option<Result<Value, String>> {
    use std::sync::Arc;

    use filepicker_bridge::desktop::DesktopBridge;

    let (bridge, pump) = DesktopBridge::with_main_thread_dialogs();
    let plugin = FilePickerPlugin::new(Arc::new(bridge), config);
    tracing::info!(platform = plugin.platform_name(), "file picker starting");

    // The plugin, and with it the pump's sender, is dropped when the call
    // finishes, which ends `pump.run()`.
    let worker = std::thread::Builder::new()
        .name("pick-files".into())
        .spawn(move || runtime.block_on(async move { plugin.handle_call(&call).await }));
    let worker = match worker {
        Ok(worker) => worker,
        Err(e) => {
            tracing::error!(error = %e, "could not start call thread");
            return None;
        }
    };

    pump.run();
    match worker.join() {
        Ok(outcome) => Some(outcome),
        Err(_) => {
            tracing::error!("call thread panicked");
            None
        }
    }
}

#[cfg(any(target_os = "ios", target_os = "android"))]
fn run_call(runtime: Runtime, config: PickerConfig, call: Value) -> Option<Result<Value, String>> {
    let plugin = FilePickerPlugin::for_platform(config);
    tracing::info!(platform = plugin.platform_name(), "file picker starting");
    Some(runtime.block_on(plugin.handle_call(&call)))
}

/// Print a resolved call to stdout, or its rejection message to stderr.
fn report(outcome: Result<Value, String>) -> ExitCode {
    match outcome {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "could not encode result");
                ExitCode::FAILURE
            }
        },
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Call options from the first argument; no argument means `{}`.
fn parse_call(arg: Option<&str>) -> serde_json::Result<Value> {
    match arg {
        Some(raw) => serde_json::from_str(raw),
        None => Ok(Value::Object(Default::default())),
    }
}
