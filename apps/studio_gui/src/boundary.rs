use anyhow::Result;
use tracing::error;

use shared::error::{ErrorCode, StudioException};

/// Category label shown on the error surface, derived from the typed error
/// when one is present in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Storage,
    Unknown,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Validation",
            ErrorCategory::NotFound => "Not found",
            ErrorCategory::Storage => "Storage",
            ErrorCategory::Unknown => "Unexpected",
        }
    }
}

fn classify(err: &anyhow::Error) -> ErrorCategory {
    match err.downcast_ref::<StudioException>() {
        Some(exception) => match exception.code {
            ErrorCode::Validation => ErrorCategory::Validation,
            ErrorCode::NotFound => ErrorCategory::NotFound,
            ErrorCode::Storage => ErrorCategory::Storage,
            ErrorCode::Internal => ErrorCategory::Unknown,
        },
        None => ErrorCategory::Unknown,
    }
}

/// What the boundary records about one failed operation. Ephemeral: logged
/// and rendered, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub operation: String,
    pub category: ErrorCategory,
    pub detail: String,
}

/// Runs a fallible operation, converting failure into a logged report.
/// Exactly one ERROR entry is emitted per failure.
pub fn catch<T>(operation: &str, f: impl FnOnce() -> Result<T>) -> Result<T, ErrorReport> {
    match f() {
        Ok(value) => Ok(value),
        Err(err) => {
            error!(operation, "render failed: {err:#}");
            Err(ErrorReport {
                operation: operation.to_string(),
                category: classify(&err),
                detail: format!("{err:?}"),
            })
        }
    }
}

/// Per-view boundary: a failing renderer never propagates past this call.
/// On failure the user sees a generic recoverable surface, the full chain
/// stays behind an explicit disclosure, and the sentinel `None` is returned.
pub fn ui_error_boundary<T>(
    operation: &str,
    ui: &mut egui::Ui,
    f: impl FnOnce(&mut egui::Ui) -> Result<T>,
) -> Option<T> {
    match catch(operation, || f(&mut *ui)) {
        Ok(value) => Some(value),
        Err(report) => {
            render_error_surface(ui, &report);
            None
        }
    }
}

fn render_error_surface(ui: &mut egui::Ui, report: &ErrorReport) {
    ui.add_space(8.0);
    ui.colored_label(
        ui.visuals().error_fg_color,
        format!("{} error: something went wrong in '{}'.", report.category.label(), report.operation),
    );
    ui.label("The rest of the session is unaffected; switch views or retry.");
    ui.collapsing("Error details", |ui| {
        ui.monospace(&report.detail);
    });
}

/// Escalation for conditions the router/state layer cannot recover from.
/// Distinct from the per-view boundary: the orchestrator stops the cycle
/// once this has produced a report.
pub fn fatal_report(err: &anyhow::Error) -> ErrorReport {
    error!(fatal = true, "fatal error: {err:#}");
    ErrorReport {
        operation: "orchestrator".to_string(),
        category: classify(err),
        detail: format!("{err:?}"),
    }
}

#[cfg(test)]
#[path = "tests/boundary_tests.rs"]
mod tests;
