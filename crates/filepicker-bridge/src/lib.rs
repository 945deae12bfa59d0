// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Native file picker bridge.
//!
//! Defines the launcher/resolver traits, the chooser request model, the
//! activity-result protocol and the `pickFiles` handler, plus the platform
//! bridges that implement the traits on Android (JNI) and desktop (`rfd`).

pub mod activity;
pub mod descriptor;
pub mod intent;
pub mod local;
pub mod plugin;
pub mod registry;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod desktop;

#[cfg(target_os = "ios")]
pub mod stub;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

pub use plugin::{FilePickerPlugin, PendingSelection};

/// Retrieves the bridge implementation for the target operating system.
pub fn platform_bridge() -> Arc<dyn traits::PlatformBridge> {
    #[cfg(target_os = "android")]
    {
        // Android: intents and ContentResolver through `jni`.
        Arc::new(android::AndroidBridge::new())
    }
    #[cfg(target_os = "ios")]
    {
        Arc::new(stub::StubBridge)
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        // DESKTOP/CI: native dialog through `rfd`.
        Arc::new(desktop::DesktopBridge::new())
    }
}
