use anyhow::{Context as _, Result};
use patterns::PatternCatalog;

use crate::session::SessionState;

/// The "Pattern Management" view: a read-only catalog browser. Editing and
/// creation land together with the runner integration.
pub fn render(
    ui: &mut egui::Ui,
    session: &mut SessionState,
    catalog: &PatternCatalog,
) -> Result<()> {
    ui.heading("Pattern Management");
    ui.weak("Browse the catalog; editing and creation are not available yet.");

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label("Filter:");
        ui.add(
            egui::TextEdit::singleline(&mut session.management.filter)
                .hint_text("name contains…"),
        );
    });

    let specs = catalog
        .list_patterns()
        .context("failed to list the pattern catalog")?;
    let filter = session.management.filter.trim().to_ascii_lowercase();

    ui.add_space(6.0);
    let mut shown = 0;
    for spec in &specs {
        if !filter.is_empty() && !spec.name.to_ascii_lowercase().contains(&filter) {
            continue;
        }
        shown += 1;
        ui.collapsing(&spec.name, |ui| {
            if let Some(modified) = spec.modified_at {
                ui.weak(format!("modified {}", modified.format("%Y-%m-%d %H:%M")));
            }
            ui.weak(spec.path.display().to_string());
            ui.separator();
            ui.monospace(&spec.content);
        });
    }

    if shown == 0 {
        if specs.is_empty() {
            ui.weak(format!(
                "No patterns found under '{}'.",
                catalog.root().display()
            ));
        } else {
            ui.weak("No pattern matches the filter.");
        }
    }

    Ok(())
}
