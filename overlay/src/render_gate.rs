//! Render gate for the embedded document viewer.
//!
//! Rebuilding the viewer frame refetches the document, so the host asks the
//! gate before every render and only rebuilds when the URI actually changed.

#[cfg(test)]
#[path = "render_gate_test.rs"]
mod render_gate_test;

/// Remembers the last rendered URI.
#[derive(Debug, Clone, Default)]
pub struct RenderGate {
    last_uri: Option<String>,
    renders: u64,
}

impl RenderGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `uri` differs from the previous accepted render,
    /// and records it as the current one.
    pub fn should_render(&mut self, uri: &str) -> bool {
        if self.last_uri.as_deref() == Some(uri) {
            return false;
        }
        self.last_uri = Some(uri.to_owned());
        self.renders += 1;
        true
    }

    /// URI of the last accepted render.
    #[must_use]
    pub fn last_uri(&self) -> Option<&str> {
        self.last_uri.as_deref()
    }

    /// Number of renders accepted so far.
    #[must_use]
    pub fn renders(&self) -> u64 {
        self.renders
    }
}
