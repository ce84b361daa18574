//! Integration tests for the picker controller.
//!
//! These drive a controller the way a page session does (load, clicks,
//! shuffles, reloads from a shared URL) against a recording surface and an
//! in-memory history.

use palette_core::{
    BootstrapStyles, ColorCatalog, ColorName, History, LoadSource, PaletteConfig,
    PaletteController, SessionHistory, StyleResolver, Stylesheet, Surface,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// Surface that keeps only what is currently displayed.
#[derive(Debug, Default)]
struct Page {
    slots: Vec<Option<String>>,
    background: String,
    code: String,
    renders: usize,
}

impl Page {
    fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![None; count],
            ..Default::default()
        }
    }
}

impl Surface for Page {
    fn show_slot(&mut self, index: usize, name: Option<&ColorName>) {
        self.slots[index] = name.map(ToString::to_string);
    }

    fn set_background(&mut self, gradient_hex: &str) {
        self.background = gradient_hex.to_string();
        self.renders += 1;
    }

    fn set_code(&mut self, code: &str) {
        self.code = code.to_string();
    }
}

fn session(
    config: PaletteConfig,
    location: &str,
) -> PaletteController<Page, SessionHistory> {
    PaletteController::new(
        config,
        &BootstrapStyles::new(),
        Page::with_slots(config.slot_count),
        SessionHistory::new(location),
    )
}

#[test]
fn test_share_url_round_trip() {
    let mut first = session(PaletteConfig::default(), "/picker/");
    first.load_with(&mut StdRng::seed_from_u64(3));
    first.select_color(0, "red-500");
    first.select_color(1, "blue-200");
    first.select_color(2, "gray-700");
    let shared = first.history().location();
    assert_eq!(
        shared,
        "/picker/?colour=red-500&colour=blue-200&colour=gray-700"
    );

    let mut second = session(PaletteConfig::default(), &shared);
    assert_eq!(second.load(), LoadSource::Url);
    assert_eq!(second.slots(), first.slots());
    assert_eq!(second.surface().background, first.surface().background);
    assert_eq!(second.surface().code, first.surface().code);
}

#[test]
fn test_two_slot_round_trip() {
    let mut first = session(PaletteConfig::new(2).unwrap(), "/");
    first.select_color(0, "red-500");
    first.select_color(1, "blue-200");

    let mut second = session(PaletteConfig::new(2).unwrap(), &first.share_url());
    second.load();

    let names: Vec<&str> = second.slots().names().map(ColorName::as_str).collect();
    assert_eq!(names, ["red-500", "blue-200"]);
}

#[test]
fn test_shuffle_draws_from_catalog() {
    let mut page = session(PaletteConfig::default(), "/");
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        page.shuffle_colors_with(&mut rng);
        assert_eq!(page.slots().len(), 3);
        assert!(page.slots().is_complete());
        for name in page.slots().names() {
            assert!(page.catalog().contains(name), "{name} not in catalog");
        }
    }
}

#[test]
fn test_page_shows_selected_slots() {
    let mut page = session(PaletteConfig::default(), "/");
    page.select_color(1, "indigo-300");

    assert_eq!(page.surface().slots[1].as_deref(), Some("indigo-300"));
    assert_eq!(page.surface().slots[0], None);
    assert!(page.surface().code.contains("/* OR */"));
    assert_eq!(page.surface().renders, 1);
}

#[test]
fn test_short_url_leaves_remaining_slots_unset() {
    let mut page = session(PaletteConfig::default(), "/?colour=pink-500");
    page.load();

    assert_eq!(page.slots().get(0).map(ColorName::as_str), Some("pink-500"));
    assert_eq!(page.slots().get(1), None);
    assert_eq!(
        page.surface().background,
        "linear-gradient(to right, #d63384, , )"
    );
}

#[test]
fn test_history_navigation_restores_state() {
    let mut page = session(PaletteConfig::default(), "/");
    page.select_color(0, "red-500");
    page.select_color(1, "green-500");
    page.select_color(2, "blue-500");

    let previous = page.history_mut().back().map(str::to_string).unwrap();
    assert!(page.restore(&previous));
    assert_eq!(page.slots().get(2), None);
    assert_eq!(page.surface().slots[2], None);
    assert_eq!(page.surface().slots[1].as_deref(), Some("green-500"));
    assert_eq!(page.share_url(), "/?colour=red-500&colour=green-500");
}

#[test]
fn test_stylesheet_file_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, ".bd-blue-500 {{ background-color: #123456; }}").unwrap();

    let sheet = Stylesheet::from_file(file.path())
        .unwrap()
        .with_fallback(BootstrapStyles::new());
    assert_eq!(sheet.computed_background("bd-blue-500"), "rgb(18, 52, 86)");

    let catalog = ColorCatalog::resolve(&sheet);
    assert_eq!(catalog.hex(&ColorName::new("blue-500")), Some("#123456"));
    assert_eq!(catalog.hex(&ColorName::new("blue-600")), Some("#0a58ca"));
}

#[test]
fn test_missing_stylesheet_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Stylesheet::from_file(&dir.path().join("missing.css")).unwrap_err();
    assert!(err.to_string().contains("missing.css"));
}
