//! Shared constants for the overlay crate.

// ── Cards ───────────────────────────────────────────────────────

/// Width of a newly added card, in CSS pixels.
pub const DEFAULT_CARD_WIDTH: f64 = 200.0;

/// Height of a newly added card, in CSS pixels.
pub const DEFAULT_CARD_HEIGHT: f64 = 150.0;

/// Smallest width or height a resize can produce, in CSS pixels.
pub const MIN_CARD_SIZE: f64 = 20.0;

/// Text a new card starts with.
pub const DEFAULT_CARD_TEXT: &str = "text";

// ── Viewer ──────────────────────────────────────────────────────

/// Display height before the first measurement.
pub const DEFAULT_VIEWER_HEIGHT_PX: f64 = 1800.0;

/// Fixed display height for spreadsheets, in viewport-height units.
pub const SPREADSHEET_VIEWER_HEIGHT_VH: f64 = 70.0;

// ── Documents ───────────────────────────────────────────────────

/// File name of the bundled sample PDF, relative to the public base path.
pub const SAMPLE_PDF_FILE: &str = "c4611_sample_explain.pdf";

/// Remote sample spreadsheet.
pub const SAMPLE_XLSX_URL: &str =
    "https://uploads.codesandbox.io/uploads/user/46ef5051-8a21-46a0-ab94-60d6cd53ab10/jYVg-test-excelaki.xlsx";

/// Office web viewer endpoint used to embed spreadsheets.
pub const OFFICE_EMBED_URL: &str = "https://view.officeapps.live.com/op/embed.aspx";
