//! Panel state construction and action logging.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use overlay::document::{DocumentSources, ViewerConfig};
use overlay::{Action, PanelCore, PanelError};

/// Base path the bundled sample PDF is served under, fixed at build time from
/// `PUBLIC_URL`. Empty when unset.
pub const BASE_PATH: &str = match option_env!("PUBLIC_URL") {
    Some(path) => path,
    None => "",
};

/// Panel state for a fresh page: PDF selected, no shapes.
pub fn initial_panel() -> PanelCore {
    panel_for_base_path(BASE_PATH)
}

/// Header options for the page's viewer: header and file name shown, query
/// string hidden.
pub const VIEWER_CONFIG: ViewerConfig =
    ViewerConfig { disable_header: false, disable_file_name: false, retain_url_params: false };

/// Panel state with the sample PDF under `base_path`.
pub fn panel_for_base_path(base_path: &str) -> PanelCore {
    PanelCore::new(DocumentSources::from_base_path(base_path)).with_config(VIEWER_CONFIG)
}

/// One-line JSON rendering of an action for the console log.
pub fn describe_action(action: &Action) -> String {
    serde_json::to_string(action).unwrap_or_else(|_| format!("{action:?}"))
}

/// Log actions reported by a panel operation.
pub fn log_actions(actions: &[Action]) {
    #[cfg(feature = "hydrate")]
    {
        for action in actions {
            log::debug!("panel {}", describe_action(action));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = actions;
    }
}

/// Log a rejected panel operation. State is unchanged when this happens.
pub fn log_rejected(op: &str, err: &PanelError) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("panel {op} rejected: {err}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (op, err);
    }
}
