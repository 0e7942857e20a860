/// Top banner shown on every cycle, independent of the selected view.
pub fn render(ctx: &egui::Context) {
    egui::TopBottomPanel::top("studio_header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(
                egui::RichText::new("Pattern Studio")
                    .strong()
                    .color(egui::Color32::from_rgb(0x6e, 0xa8, 0xd8)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak("session-local workspace");
            });
        });
        ui.add_space(6.0);
    });
}
