//! Contract tests for the compiled documents.
//!
//! These drive the public API the way a form would (store operations, then
//! `compile`) and check the behavior callers rely on: determinism, pruning,
//! ordering, palette switching, link construction and the export guard.

use pretty_assertions::assert_eq;
use site_prompt::compile::compile;
use site_prompt::export::{
    CollectingNotifier, DirectorySink, ExportFormat, ExportOutcome, Notification, download,
};
use site_prompt::input::load_input;
use site_prompt::palette::CATALOG;
use site_prompt::schema::{PageId, Schema};
use site_prompt::state::ProjectState;
use site_prompt::types::{ButtonPatch, ColorChannel, Platform};
use std::path::PathBuf;

fn fixture_state() -> ProjectState {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/project.toml");
    let mut state = ProjectState::default();
    load_input(&path)
        .unwrap()
        .apply(&mut state, &Schema::standard())
        .unwrap();
    state
}

fn json(state: &ProjectState) -> serde_json::Value {
    serde_json::from_str(&compile(state, &Schema::standard()).json).unwrap()
}

fn markdown(state: &ProjectState) -> String {
    compile(state, &Schema::standard()).markdown
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn compiling_twice_is_identical() {
    let mut state = ProjectState::default();
    state.load_example();
    let a = compile(&state, &Schema::standard());
    let b = compile(&state, &Schema::standard());
    assert_eq!(a.markdown, b.markdown);
    assert_eq!(a.json, b.json);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&a.json).unwrap(),
        serde_json::from_str::<serde_json::Value>(&b.json).unwrap()
    );
}

// =========================================================================
// Field omission and section pruning
// =========================================================================

#[test]
fn empty_field_has_no_markdown_line_but_stays_in_json() {
    let mut state = ProjectState::default();
    state.set_project_name("Acme");
    state.set_field(PageId::Home, "hero", "titulo", "Hola");
    state.set_field(PageId::Home, "hero", "subtitulo", "");

    let md = markdown(&state);
    assert!(md.contains("**Titulo:** Hola"));
    assert!(!md.contains("**Subtitulo:**"));

    let value = json(&state);
    assert_eq!(value["pages"][0]["data"]["hero"]["subtitulo"], "");
}

#[test]
fn empty_section_has_no_header_and_no_counter_step() {
    let state = fixture_state();
    let md = markdown(&state);
    assert!(md.contains("#### Sección 1: Hero\n"));
    assert!(md.contains("#### Sección 2: Stats\n"));
    assert!(!md.contains(": Features\n"));
    assert!(md.contains("**Stat 1 Numero:** 12\n"));

    let value = json(&state);
    assert_eq!(value["pages"][0]["data"]["features"], serde_json::json!({"titulo": ""}));
}

// =========================================================================
// Ordering
// =========================================================================

#[test]
fn pages_follow_selection_order() {
    let state = fixture_state();
    let md = markdown(&state);
    let home = md.find("### HOME\n").unwrap();
    let contact = md.find("### CONTACT\n").unwrap();
    let gallery = md.find("### GALLERY\n").unwrap();
    assert!(home < contact && contact < gallery);

    let names: Vec<String> = json(&state)["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Home", "Contact", "Gallery"]);
}

#[test]
fn toggled_off_and_on_page_moves_to_end() {
    let mut state = ProjectState::default();
    state.toggle_page(PageId::About);
    state.toggle_page(PageId::Services);
    state.toggle_page(PageId::About);
    state.toggle_page(PageId::About);

    let names: Vec<String> = json(&state)["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Home", "Services", "About Us"]);

    let md = markdown(&state);
    assert!(md.find("### SERVICES").unwrap() < md.find("### ABOUT US").unwrap());
}

#[test]
fn sections_follow_write_order() {
    let mut state = ProjectState::default();
    state.set_field(PageId::Home, "cta", "titulo", "Último");
    state.set_field(PageId::Home, "hero", "titulo", "Primero");
    let md = markdown(&state);
    assert!(md.contains("#### Sección 1: Cta\n"));
    assert!(md.contains("#### Sección 2: Hero\n"));
}

#[test]
fn unselected_page_content_is_kept_out_of_output() {
    let state = fixture_state();
    assert_eq!(state.field(PageId::About, "mision", "titulo"), "Stored but not selected");
    assert!(!markdown(&state).contains("Stored but not selected"));
    assert!(!compile(&state, &Schema::standard()).json.contains("Stored but not selected"));
}

// =========================================================================
// Palette
// =========================================================================

#[test]
fn custom_colors_switch_only_the_palette() {
    let mut state = ProjectState::default();
    state.set_project_name("Acme");
    state.select_palette(&CATALOG[3]);
    state.set_custom_color(ColorChannel::Primary, "#111111");
    state.set_custom_color(ColorChannel::Background, "not a color");

    let before = markdown(&state);
    state.set_use_custom_colors(true);
    let after = markdown(&state);

    assert!(before.contains("- **Primary:** #a855f7\n"));
    assert!(after.contains("- **Primary:** #111111\n"));
    assert!(after.contains("  --color-background: not a color;\n"));

    let neutralize = |md: &str, palette: [&str; 5]| {
        palette
            .iter()
            .zip(["P", "S", "A", "B", "T"])
            .fold(md.to_string(), |acc, (color, tag)| acc.replace(color, tag))
    };
    let preset = CATALOG[3].colors();
    let custom = state.custom_colors();
    assert_eq!(
        neutralize(
            &before,
            [
                preset.primary.as_str(),
                preset.secondary.as_str(),
                preset.accent.as_str(),
                preset.background.as_str(),
                preset.text.as_str()
            ]
        ),
        neutralize(
            &after,
            [
                custom.primary.as_str(),
                custom.secondary.as_str(),
                custom.accent.as_str(),
                custom.background.as_str(),
                custom.text.as_str()
            ]
        )
    );
}

// =========================================================================
// Floating buttons
// =========================================================================

#[test]
fn whatsapp_anchor_encodes_message() {
    let mut state = ProjectState::default();
    state.set_floating_button(
        Platform::Whatsapp,
        ButtonPatch::whatsapp("34912345678", "Hola mundo"),
    );
    let md = markdown(&state);
    assert!(md.contains(r#"<a href="https://wa.me/34912345678?text=Hola%20mundo""#));
    assert!(md.contains("background: #25D366"));
}

#[test]
fn user_values_match_between_listing_and_snippets() {
    let mut state = ProjectState::default();
    state.set_project_name("Tom & Jerry");
    state.set_floating_button(
        Platform::Youtube,
        ButtonPatch::link("https://youtube.com/watch?v=x&t=1"),
    );
    let md = markdown(&state);
    assert!(md.starts_with("# Prompt para Crear: Tom & Jerry\n"));
    assert!(md.contains("<title>Tom & Jerry</title>"));
    assert!(md.contains("- **Youtube**: https://youtube.com/watch?v=x&t=1\n"));
    assert!(md.contains(r#"<a href="https://youtube.com/watch?v=x&t=1""#));
    assert!(!md.contains("&amp;"));
}

#[test]
fn no_enabled_buttons_omits_block() {
    let mut state = ProjectState::default();
    state.set_floating_button(
        Platform::Facebook,
        ButtonPatch {
            url: Some("https://facebook.com/acme".into()),
            ..ButtonPatch::default()
        },
    );
    let md = markdown(&state);
    assert!(!md.contains("Botones Flotantes"));
    assert!(!md.contains("facebook.com/acme"));
    assert_eq!(
        json(&state)["floatingButtons"]["facebook"],
        serde_json::json!({"enabled": false, "url": "https://facebook.com/acme"})
    );
}

// =========================================================================
// Export guard and file naming
// =========================================================================

#[test]
fn empty_name_writes_nothing_and_notifies_once() {
    let tmp = tempfile::TempDir::new().unwrap();
    let state = ProjectState::default();
    let snapshot = state.clone();
    let mut sink = DirectorySink::new(tmp.path());
    let mut notifier = CollectingNotifier::default();

    let outcome = download(
        &state,
        &Schema::standard(),
        ExportFormat::Markdown,
        &mut sink,
        &mut notifier,
    )
    .unwrap();

    assert_eq!(outcome, ExportOutcome::Rejected);
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    assert_eq!(notifier.notifications, vec![Notification::missing_project_name()]);
    assert_eq!(state, snapshot);
}

#[test]
fn download_uses_dashed_project_name() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut state = ProjectState::default();
    state.set_project_name("My Site");
    let mut sink = DirectorySink::new(tmp.path());
    let mut notifier = CollectingNotifier::default();

    let outcome = download(
        &state,
        &Schema::standard(),
        ExportFormat::Markdown,
        &mut sink,
        &mut notifier,
    )
    .unwrap();

    let ExportOutcome::Saved { path, file_name, .. } = outcome else {
        panic!("expected a saved export");
    };
    assert_eq!(file_name, "My-Site-prompt.md");
    assert_eq!(path, tmp.path().join("My-Site-prompt.md"));
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        compile(&state, &Schema::standard()).markdown
    );
}

// =========================================================================
// Humanization
// =========================================================================

#[test]
fn field_labels_are_humanized() {
    let mut state = ProjectState::default();
    state.set_field(PageId::Home, "stats", "stat1Numero", "500+");
    assert!(markdown(&state).contains("**Stat 1 Numero:** 500+\n"));
}

// =========================================================================
// Example project
// =========================================================================

#[test]
fn example_renders_every_page_and_three_buttons() {
    let mut state = ProjectState::default();
    state.load_example();
    let md = markdown(&state);
    for header in ["### HOME", "### ABOUT US", "### SERVICES", "### GALLERY", "### CONTACT"] {
        assert!(md.contains(header), "{header} missing");
    }
    assert!(md.contains("#### Sección 10: "));
    assert_eq!(md.matches("target=\"_blank\"").count(), 3);

    state.reset();
    assert_eq!(state, ProjectState::default());
}
