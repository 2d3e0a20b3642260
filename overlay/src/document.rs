//! Documents shown in the viewer: file types, their sources, display height
//! and header configuration.
//!
//! The viewer itself is the browser (PDFs) or the Office web viewer
//! (spreadsheets); this module only decides *what* to show and *how tall*.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::fmt;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_VIEWER_HEIGHT_PX, OFFICE_EMBED_URL, SAMPLE_PDF_FILE, SAMPLE_XLSX_URL, SPREADSHEET_VIEWER_HEIGHT_VH,
};

/// Kind of document currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Pdf,
    Xlsx,
}

impl FileType {
    /// The other file type.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pdf => Self::Xlsx,
            Self::Xlsx => Self::Pdf,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xlsx => "xlsx",
        }
    }
}

/// The two document URIs the panel switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSources {
    pdf_uri: String,
    xlsx_uri: String,
}

impl DocumentSources {
    /// Sources with the sample PDF under `base_path` and the remote sample
    /// spreadsheet.
    ///
    /// `base_path` may be empty; a trailing `/` is dropped so the result never
    /// contains `//` before the file name.
    #[must_use]
    pub fn from_base_path(base_path: &str) -> Self {
        let base = base_path.trim_end_matches('/');
        Self { pdf_uri: format!("{base}/{SAMPLE_PDF_FILE}"), xlsx_uri: SAMPLE_XLSX_URL.to_owned() }
    }

    #[must_use]
    pub fn uri_for(&self, file_type: FileType) -> &str {
        match file_type {
            FileType::Pdf => &self.pdf_uri,
            FileType::Xlsx => &self.xlsx_uri,
        }
    }
}

impl Default for DocumentSources {
    fn default() -> Self {
        Self::from_base_path("")
    }
}

/// Display height of the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerHeight {
    /// Absolute height in CSS pixels.
    Px(f64),
    /// Percentage of the viewport height.
    Vh(f64),
}

impl ViewerHeight {
    /// Height to store after measuring the rendered document.
    ///
    /// PDFs take their full scroll height so the page scrolls instead of the
    /// viewer; spreadsheets scroll inside a fixed-height frame.
    #[must_use]
    pub fn from_measurement(file_type: FileType, scroll_height: f64) -> Self {
        match file_type {
            FileType::Pdf => Self::Px(scroll_height),
            FileType::Xlsx => Self::Vh(SPREADSHEET_VIEWER_HEIGHT_VH),
        }
    }
}

impl Default for ViewerHeight {
    fn default() -> Self {
        Self::Px(DEFAULT_VIEWER_HEIGHT_PX)
    }
}

impl fmt::Display for ViewerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Vh(v) => write!(f, "{v}vh"),
        }
    }
}

/// Header options for the viewer chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerConfig {
    /// Hide the header bar entirely.
    pub disable_header: bool,
    /// Hide the file name inside the header.
    pub disable_file_name: bool,
    /// Keep the query string when showing the file name.
    pub retain_url_params: bool,
}

impl ViewerConfig {
    /// Text shown in the header for `uri`, or `None` when nothing is shown.
    #[must_use]
    pub fn header_label(&self, uri: &str) -> Option<String> {
        if self.disable_header || self.disable_file_name {
            return None;
        }
        Some(file_name(uri, self.retain_url_params).to_owned())
    }
}

/// Last path segment of `uri`, without fragment, and without the query
/// string unless `retain_params`.
#[must_use]
pub fn file_name(uri: &str, retain_params: bool) -> &str {
    let uri = uri.split('#').next().unwrap_or(uri);
    let (path, query_start) = match uri.find('?') {
        Some(i) => (&uri[..i], Some(i)),
        None => (uri, None),
    };
    let start = path.rfind('/').map_or(0, |i| i + 1);
    match (retain_params, query_start) {
        (true, Some(_)) => &uri[start..],
        _ => &path[start..],
    }
}

/// URL to load in the viewer frame for a document.
#[must_use]
pub fn embed_url(file_type: FileType, uri: &str) -> String {
    match file_type {
        FileType::Pdf => uri.to_owned(),
        FileType::Xlsx => format!("{OFFICE_EMBED_URL}?src={}", utf8_percent_encode(uri, NON_ALPHANUMERIC)),
    }
}
