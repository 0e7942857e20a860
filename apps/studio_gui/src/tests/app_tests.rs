use std::collections::HashMap;

use anyhow::anyhow;

use super::*;
use crate::routing;
use eframe::Storage;

struct MemoryStore(HashMap<String, String>);

impl eframe::Storage for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}

fn temp_app() -> (tempfile::TempDir, StudioApp) {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths =
        crate::config::resolve_paths(Some(dir.path().to_path_buf()), None).expect("paths");
    (dir, StudioApp::new(paths, None))
}

fn drive_frame(app: &mut StudioApp) {
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| app.run_frame(ctx));
}

#[test]
fn first_cycle_initializes_the_session_on_the_default_view() {
    let (_dir, mut app) = temp_app();
    assert!(!app.session().is_initialized());

    drive_frame(&mut app);

    assert!(app.session().is_initialized());
    assert_eq!(routing::current_view(app.session()), ViewId::Execution);
    assert!(!app.is_halted());
}

#[test]
fn navigation_persists_across_cycles() {
    let (_dir, mut app) = temp_app();
    drive_frame(&mut app);

    routing::set_view(app.session_mut(), ViewId::Dashboard);
    drive_frame(&mut app);
    assert_eq!(routing::current_view(app.session()), ViewId::Dashboard);

    routing::set_view(app.session_mut(), ViewId::Management);
    drive_frame(&mut app);
    assert_eq!(routing::current_view(app.session()), ViewId::Management);
}

#[test]
fn failing_view_render_is_contained_and_other_views_still_work() {
    let (dir, mut app) = temp_app();
    // Occupy the patterns directory path with a file so catalog listing
    // fails inside the execution view.
    std::fs::write(dir.path().join("patterns"), "not a directory").expect("block patterns dir");

    app.session_mut().input_content = "draft the user typed".to_string();
    drive_frame(&mut app);

    // Contained by the per-view boundary: no halt, session data untouched.
    assert!(!app.is_halted());
    assert!(app.session().is_initialized());
    assert_eq!(app.session().input_content, "draft the user typed");

    // A different view renders normally in the next cycle.
    routing::set_view(app.session_mut(), ViewId::Dashboard);
    drive_frame(&mut app);
    assert!(!app.is_halted());
}

#[test]
fn fatal_escalation_halts_every_following_cycle() {
    let (_dir, mut app) = temp_app();
    app.handle_fatal(anyhow!("session state is corrupted beyond recovery"));

    drive_frame(&mut app);
    assert!(app.is_halted());
    // The cycle was skipped entirely: session initialization never ran.
    assert!(!app.session().is_initialized());

    drive_frame(&mut app);
    assert!(app.is_halted());
    assert!(!app.session().is_initialized());
}

#[test]
fn persisted_view_name_is_restored_through_the_validated_boundary() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths =
        crate::config::resolve_paths(Some(dir.path().to_path_buf()), None).expect("paths");

    let restored = StudioApp::new(
        paths.clone(),
        Some(PersistedStudioSettings {
            theme: ThemePreference::Dark,
            last_view: Some("Analysis Dashboard".to_string()),
        }),
    );
    assert_eq!(routing::current_view(restored.session()), ViewId::Dashboard);

    let fallback = StudioApp::new(
        paths,
        Some(PersistedStudioSettings {
            theme: ThemePreference::Dark,
            last_view: Some("No Such View".to_string()),
        }),
    );
    assert_eq!(routing::current_view(fallback.session()), ViewId::Execution);
}

#[test]
fn save_round_trips_the_selection_through_eframe_storage() {
    let (dir, mut app) = temp_app();
    drive_frame(&mut app);
    routing::set_view(app.session_mut(), ViewId::Management);

    let mut store = MemoryStore(HashMap::new());
    eframe::App::save(&mut app, &mut store);

    let raw = store
        .get_string(SETTINGS_STORAGE_KEY)
        .expect("settings written");
    let settings: PersistedStudioSettings = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(settings.last_view.as_deref(), Some("Pattern Management"));

    let paths =
        crate::config::resolve_paths(Some(dir.path().to_path_buf()), None).expect("paths");
    let reborn = StudioApp::new(paths, Some(settings));
    assert_eq!(routing::current_view(reborn.session()), ViewId::Management);
}
