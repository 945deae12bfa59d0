// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// MIME type <-> file extension table.
//
// Used where the platform has no content resolver to ask: the desktop
// dialog filters by extension, and local files report a type from theirs.

/// Wildcard accepted-type value.
pub const ANY: &str = "*/*";

const TABLE: &[(&str, &[&str])] = &[
    ("application/pdf", &["pdf"]),
    ("application/json", &["json"]),
    ("application/zip", &["zip"]),
    ("application/xml", &["xml"]),
    ("application/msword", &["doc"]),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        &["docx"],
    ),
    ("application/vnd.ms-excel", &["xls"]),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        &["xlsx"],
    ),
    ("application/vnd.oasis.opendocument.text", &["odt"]),
    ("application/postscript", &["ps", "eps"]),
    ("audio/mpeg", &["mp3"]),
    ("audio/wav", &["wav"]),
    ("image/jpeg", &["jpg", "jpeg"]),
    ("image/png", &["png"]),
    ("image/gif", &["gif"]),
    ("image/webp", &["webp"]),
    ("image/tiff", &["tif", "tiff"]),
    ("image/svg+xml", &["svg"]),
    ("text/plain", &["txt"]),
    ("text/csv", &["csv"]),
    ("text/html", &["html", "htm"]),
    ("text/markdown", &["md"]),
    ("video/mp4", &["mp4"]),
    ("video/webm", &["webm"]),
];

/// Infer a MIME type from a file extension (case-insensitive).
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    TABLE
        .iter()
        .find(|(_, exts)| exts.contains(&ext.as_str()))
        .map(|(mime, _)| *mime)
}

/// Extensions matching a MIME type. `image/*` style wildcards expand to
/// every known extension of that top-level type; `*/*` matches nothing
/// specific and returns an empty list.
pub fn extensions_for(mime: &str) -> Vec<&'static str> {
    let mime = mime.trim().to_ascii_lowercase();
    if mime == ANY {
        return Vec::new();
    }
    match mime.strip_suffix("/*") {
        Some(top) => TABLE
            .iter()
            .filter(|(known, _)| known.split('/').next() == Some(top))
            .flat_map(|(_, exts)| exts.iter().copied())
            .collect(),
        None => TABLE
            .iter()
            .find(|(known, _)| *known == mime)
            .map(|(_, exts)| exts.to_vec())
            .unwrap_or_default(),
    }
}
