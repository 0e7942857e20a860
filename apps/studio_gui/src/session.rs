use shared::domain::{OutputLog, StarredOutput};
use storage::Storage;
use tracing::{info, warn};

use crate::routing::ViewId;

/// State owned by the execution view that the core does not interpret.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionViewState {
    pub show_preview: bool,
    pub star_name_draft: String,
}

/// State owned by the management view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagementViewState {
    pub filter: String,
}

/// State owned by the dashboard view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardViewState {
    pub starred_only: bool,
}

/// Everything one interactive session holds. Lives for the life of the
/// window and is never persisted as a whole; it is rebuilt from defaults
/// (plus whatever the storage load recovers) on the next launch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    initialized: bool,
    pub(crate) current_view: ViewId,
    pub input_content: String,
    pub selected_patterns: Vec<String>,
    pub chat_output: Vec<String>,
    pub output_logs: Vec<OutputLog>,
    pub starred_outputs: Vec<StarredOutput>,
    pub execution: ExecutionViewState,
    pub management: ManagementViewState,
    pub dashboard: DashboardViewState,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Idempotent per session: the first call performs the best-effort load
    /// of previously saved outputs and flips the marker; every later call
    /// returns immediately and never touches values a view may have mutated.
    /// A failing load is logged at WARN and the session proceeds on
    /// defaults.
    pub fn initialize(&mut self, storage: &Storage) {
        if self.initialized {
            return;
        }
        info!("initializing session state");

        match storage.load_saved_outputs() {
            Ok(saved) => {
                self.output_logs = saved.outputs;
                self.starred_outputs = saved.starred;
            }
            Err(err) => {
                warn!("load_saved_outputs failed: {err:#}");
            }
        }

        self.initialized = true;
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
