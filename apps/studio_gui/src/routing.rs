use shared::error::StudioException;
use tracing::warn;

use crate::session::SessionState;

/// The closed set of views the orchestrator can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewId {
    #[default]
    Execution,
    Management,
    Dashboard,
}

impl ViewId {
    pub const ALL: [ViewId; 3] = [ViewId::Execution, ViewId::Management, ViewId::Dashboard];

    pub fn label(self) -> &'static str {
        match self {
            ViewId::Execution => "Run Patterns",
            ViewId::Management => "Pattern Management",
            ViewId::Dashboard => "Analysis Dashboard",
        }
    }

    /// The validated boundary for raw view names (persisted settings and the
    /// like). Unknown names are rejected, not defaulted.
    pub fn parse(raw: &str) -> Result<Self, StudioException> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.label() == raw)
            .ok_or_else(|| StudioException::validation(format!("unknown view '{raw}'")))
    }
}

/// Tolerant resolution for consumers that must accept arbitrary stored
/// names: unrecognized input falls back to the default view.
pub fn resolve_or_default(raw: &str) -> ViewId {
    match ViewId::parse(raw) {
        Ok(view) => view,
        Err(err) => {
            warn!(%err, "routing: falling back to the default view");
            ViewId::default()
        }
    }
}

/// The session guarantees a default is present, so this read never fails.
pub fn current_view(session: &SessionState) -> ViewId {
    session.current_view
}

/// Writes the selection unconditionally. Callers are expected to request an
/// immediate repaint so the change takes effect within the same interaction.
pub fn set_view(session: &mut SessionState, view: ViewId) {
    session.current_view = view;
}
