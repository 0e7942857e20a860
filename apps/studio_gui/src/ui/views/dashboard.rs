use anyhow::Result;

use crate::session::SessionState;

/// The "Analysis Dashboard" view: counts over what the session has loaded
/// and starred. History charts and metrics will grow here.
pub fn render(ui: &mut egui::Ui, session: &mut SessionState) -> Result<()> {
    ui.heading("Analysis Dashboard");

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        stat(ui, "Recorded runs", session.output_logs.len());
        ui.separator();
        stat(ui, "Starred outputs", session.starred_outputs.len());
        ui.separator();
        stat(ui, "Patterns selected", session.selected_patterns.len());
    });

    ui.add_space(10.0);
    ui.checkbox(&mut session.dashboard.starred_only, "Starred outputs only");
    ui.add_space(6.0);

    if session.dashboard.starred_only {
        if session.starred_outputs.is_empty() {
            ui.weak("Nothing starred yet.");
        }
        for starred in &session.starred_outputs {
            ui.collapsing(
                format!("⭐ {} ({})", starred.name, starred.pattern),
                |ui| {
                    ui.weak(format!("saved {}", starred.created_at.format("%Y-%m-%d %H:%M")));
                    ui.monospace(&starred.output_text);
                },
            );
        }
    } else {
        if session.output_logs.is_empty() {
            ui.weak("No recorded runs to summarize yet.");
        }
        for log in &session.output_logs {
            ui.label(format!(
                "{} — {} — {} chars",
                log.created_at.format("%Y-%m-%d %H:%M"),
                log.pattern,
                log.output_text.chars().count()
            ));
        }
    }

    Ok(())
}

fn stat(ui: &mut egui::Ui, label: &str, value: usize) {
    ui.vertical(|ui| {
        ui.strong(value.to_string());
        ui.weak(label);
    });
}
