use crate::routing::{self, ViewId};
use crate::session::SessionState;

/// Navigation sidebar. Selecting a view writes it through the router and
/// requests an immediate repaint so the switch is visible within the same
/// interaction.
pub fn render(ctx: &egui::Context, session: &mut SessionState) {
    egui::SidePanel::left("navigation_panel")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Navigation");
            ui.add_space(4.0);

            let current = routing::current_view(session);
            for view in ViewId::ALL {
                let selected = view == current;
                if ui.selectable_label(selected, view.label()).clicked() && !selected {
                    routing::set_view(session, view);
                    ctx.request_repaint();
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.heading("Configuration");
            ui.weak("Model and provider settings are not wired up yet.");
        });
}
