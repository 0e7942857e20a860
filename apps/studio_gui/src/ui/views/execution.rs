use anyhow::{Context as _, Result};
use patterns::PatternCatalog;
use shared::domain::StarredOutput;
use storage::Storage;

use crate::session::SessionState;

/// The "Run Patterns" view: pattern selection, the session input buffer and
/// previously recorded outputs. Running a pattern is delegated to the
/// external runner, which is not wired up yet.
pub fn render(
    ui: &mut egui::Ui,
    session: &mut SessionState,
    catalog: &PatternCatalog,
    storage: &Storage,
) -> Result<()> {
    ui.heading("Pattern Execution");
    ui.horizontal(|ui| {
        ui.label(format!("{} recorded runs", session.output_logs.len()));
        ui.separator();
        ui.label(format!("{} starred", session.starred_outputs.len()));
    });

    ui.add_space(10.0);
    ui.strong("Select patterns");
    let specs = catalog
        .list_patterns()
        .context("failed to list the pattern catalog")?;
    if specs.is_empty() {
        ui.weak(format!(
            "No patterns found under '{}'. Add one to get started.",
            catalog.root().display()
        ));
    } else {
        for spec in &specs {
            let mut selected = session.selected_patterns.contains(&spec.name);
            if ui.checkbox(&mut selected, &spec.name).changed() {
                if selected {
                    session.selected_patterns.push(spec.name.clone());
                } else {
                    session.selected_patterns.retain(|name| name != &spec.name);
                }
            }
        }
    }

    ui.add_space(10.0);
    ui.strong("Input");
    ui.add(
        egui::TextEdit::multiline(&mut session.input_content)
            .desired_rows(8)
            .desired_width(f32::INFINITY)
            .hint_text("Type or paste the content the selected patterns should process"),
    );
    ui.checkbox(&mut session.execution.show_preview, "Show input summary");
    if session.execution.show_preview && !session.input_content.is_empty() {
        let words = session.input_content.split_whitespace().count();
        let chars = session.input_content.chars().count();
        ui.weak(format!("{words} words, {chars} characters"));
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.add_enabled(false, egui::Button::new("Run Patterns"))
            .on_disabled_hover_text("The pattern runner integration is not wired up yet.");
        if ui.button("Clear Output").clicked() {
            session.chat_output.clear();
        }
    });

    ui.add_space(10.0);
    ui.strong("Recent outputs");
    if session.output_logs.is_empty() && session.chat_output.is_empty() {
        ui.weak("Nothing has been recorded in this session yet.");
        return Ok(());
    }
    for line in &session.chat_output {
        ui.label(line);
    }
    if session.output_logs.is_empty() {
        return Ok(());
    }

    ui.horizontal(|ui| {
        ui.label("Star as:");
        ui.add(
            egui::TextEdit::singleline(&mut session.execution.star_name_draft)
                .hint_text("favorite name (defaults to the pattern name)"),
        );
    });

    let mut to_star = None;
    for (idx, log) in session.output_logs.iter().enumerate().rev().take(10) {
        ui.collapsing(
            format!("{} — {}", log.pattern, log.created_at.format("%Y-%m-%d %H:%M")),
            |ui| {
                ui.monospace(&log.output_text);
                if ui.button("Star this output").clicked() {
                    to_star = Some(idx);
                }
            },
        );
    }

    if let Some(idx) = to_star {
        let log = &session.output_logs[idx];
        let draft = session.execution.star_name_draft.trim();
        let name = if draft.is_empty() {
            log.pattern.clone()
        } else {
            draft.to_string()
        };
        let starred = StarredOutput::new(name, log.pattern.clone(), log.output_text.clone());
        session.starred_outputs.push(starred);
        storage
            .write_starred(&session.starred_outputs)
            .context("failed to save starred outputs")?;
        session.execution.star_name_draft.clear();
    }

    Ok(())
}
