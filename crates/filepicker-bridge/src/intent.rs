// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-neutral description of the "get content" chooser request.
//
// The Android bridge turns this into a real `Intent`; the desktop bridge
// reads the same fields to configure its dialog.

use filepicker_core::mime;
use filepicker_core::types::SelectionRequest;

pub const ACTION_GET_CONTENT: &str = "android.intent.action.GET_CONTENT";
pub const CATEGORY_OPENABLE: &str = "android.intent.category.OPENABLE";
pub const EXTRA_ALLOW_MULTIPLE: &str = "android.intent.extra.ALLOW_MULTIPLE";
pub const EXTRA_MIME_TYPES: &str = "android.intent.extra.MIME_TYPES";

/// The content request the chooser is asked to satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIntent {
    pub action: &'static str,
    /// General content type set on the intent itself.
    pub mime_type: &'static str,
    pub categories: Vec<&'static str>,
    pub allow_multiple: bool,
    /// Accepted MIME types. `None` means no explicit restriction.
    pub accepted_types: Option<Vec<String>>,
}

impl ContentIntent {
    /// Build the content request for a selection.
    ///
    /// Multi-select ignores `types`. A single pick always carries an
    /// accepted-type list, falling back to `*/*` when none was supplied.
    pub fn for_selection(request: &SelectionRequest) -> Self {
        let accepted_types = if request.multiple {
            None
        } else {
            match request.types.as_deref() {
                Some(types) if !types.is_empty() => Some(types.to_vec()),
                _ => Some(vec![mime::ANY.to_string()]),
            }
        };

        Self {
            action: ACTION_GET_CONTENT,
            mime_type: mime::ANY,
            categories: vec![CATEGORY_OPENABLE],
            allow_multiple: request.multiple,
            accepted_types,
        }
    }
}

/// A content request wrapped in a user-facing chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserRequest {
    pub title: String,
    pub target: ContentIntent,
}

impl ChooserRequest {
    pub fn new(target: ContentIntent, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(types: Option<Vec<&str>>, multiple: bool) -> SelectionRequest {
        SelectionRequest {
            types: types.map(|t| t.into_iter().map(String::from).collect()),
            multiple,
            read_data: false,
        }
    }

    #[test]
    fn single_pick_without_types_accepts_anything() {
        let intent = ContentIntent::for_selection(&request(None, false));
        assert_eq!(intent.accepted_types, Some(vec!["*/*".to_string()]));

        let intent = ContentIntent::for_selection(&request(Some(vec![]), false));
        assert_eq!(intent.accepted_types, Some(vec!["*/*".to_string()]));
    }

    #[test]
    fn single_pick_keeps_types_in_order() {
        let intent = ContentIntent::for_selection(&request(
            Some(vec!["image/png", "application/pdf", "text/plain"]),
            false,
        ));
        assert_eq!(
            intent.accepted_types,
            Some(vec![
                "image/png".to_string(),
                "application/pdf".to_string(),
                "text/plain".to_string(),
            ])
        );
    }

    #[test]
    fn multiple_pick_drops_type_restriction() {
        for types in [None, Some(vec![]), Some(vec!["image/png"])] {
            let intent = ContentIntent::for_selection(&request(types, true));
            assert_eq!(intent.accepted_types, None);
            assert!(intent.allow_multiple);
        }
    }

    #[test]
    fn intent_is_an_openable_get_content() {
        let intent = ContentIntent::for_selection(&request(None, false));
        assert_eq!(intent.action, ACTION_GET_CONTENT);
        assert_eq!(intent.mime_type, "*/*");
        assert_eq!(intent.categories, vec![CATEGORY_OPENABLE]);
        assert!(!intent.allow_multiple);
    }
}
