//! The palette controller: slot selection, shuffle and URL state over one
//! catalog, rendered through a [`Surface`].

use rand::Rng;

use crate::catalog::ColorCatalog;
use crate::config::PaletteConfig;
use crate::history::History;
use crate::model::{ColorName, SlotState};
use crate::projection::{project, Projection};
use crate::share;
use crate::style::StyleResolver;

/// Where the picker draws its output.
pub trait Surface {
    /// A slot's large swatch now shows `name`, or nothing when `None`.
    fn show_slot(&mut self, index: usize, name: Option<&ColorName>);

    /// Apply the hex gradient as the page background.
    fn set_background(&mut self, gradient_hex: &str);

    /// Replace the code display text.
    fn set_code(&mut self, code: &str);
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn show_slot(&mut self, index: usize, name: Option<&ColorName>) {
        (**self).show_slot(index, name)
    }

    fn set_background(&mut self, gradient_hex: &str) {
        (**self).set_background(gradient_hex)
    }

    fn set_code(&mut self, code: &str) {
        (**self).set_code(code)
    }
}

/// How the initial slot state was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// From `colour` query parameters.
    Url,
    /// Randomly.
    Shuffle,
}

/// Picker state for one session.
pub struct PaletteController<S: Surface, H: History> {
    config: PaletteConfig,
    catalog: ColorCatalog,
    slots: SlotState,
    surface: S,
    history: H,
    last: Option<Projection>,
}

impl<S: Surface, H: History> PaletteController<S, H> {
    /// Resolve the catalog and create unset slots. Nothing is rendered until
    /// [`load`](Self::load) or a selection.
    pub fn new(config: PaletteConfig, resolver: &impl StyleResolver, surface: S, history: H) -> Self {
        Self::with_catalog(config, ColorCatalog::resolve(resolver), surface, history)
    }

    /// Use an already resolved catalog.
    pub fn with_catalog(config: PaletteConfig, catalog: ColorCatalog, surface: S, history: H) -> Self {
        Self {
            slots: SlotState::new(config.slot_count),
            config,
            catalog,
            surface,
            history,
            last: None,
        }
    }

    /// Initialise from the current location: `colour` parameters if any,
    /// otherwise a shuffle.
    pub fn load(&mut self) -> LoadSource {
        self.load_with(&mut rand::thread_rng())
    }

    /// [`load`](Self::load) with a caller-supplied random source.
    pub fn load_with<R: Rng>(&mut self, rng: &mut R) -> LoadSource {
        let colours = if self.config.url_sync {
            share::decode_colours(&self.history.location())
        } else {
            Vec::new()
        };

        if colours.is_empty() {
            tracing::debug!("No colours in URL, shuffling");
            self.shuffle_colors_with(rng);
            return LoadSource::Shuffle;
        }

        tracing::debug!("Loading {} colour(s) from URL", colours.len());
        self.apply_colours(colours);
        self.update_gradient();
        LoadSource::Url
    }

    /// Re-apply slots from a location without pushing history (back/forward).
    ///
    /// Returns `false` when the location carries no colours.
    pub fn restore(&mut self, location: &str) -> bool {
        let colours = share::decode_colours(location);
        if colours.is_empty() {
            return false;
        }
        self.slots.clear();
        for index in 0..self.slots.len() {
            self.surface.show_slot(index, None);
        }
        self.apply_colours(colours);
        self.last = Some(self.render());
        true
    }

    fn apply_colours(&mut self, colours: Vec<ColorName>) {
        for (index, name) in colours.into_iter().enumerate() {
            if index >= self.slots.len() {
                tracing::debug!("Ignoring extra URL colour {}", name);
                continue;
            }
            self.set_slot(index, name);
        }
    }

    /// Put `name` into slot `index` and re-project.
    ///
    /// Out-of-range indices are ignored. Returns whether the slot changed.
    pub fn select_color(&mut self, index: usize, name: impl Into<ColorName>) -> bool {
        if !self.set_slot(index, name.into()) {
            tracing::debug!("Ignoring selection for slot {}", index);
            return false;
        }
        self.update_gradient();
        true
    }

    fn set_slot(&mut self, index: usize, name: ColorName) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.surface.show_slot(index, Some(&name));
        self.slots.set(index, name)
    }

    /// Fill every slot with a random catalog color (repeats allowed).
    pub fn shuffle_colors(&mut self) {
        self.shuffle_colors_with(&mut rand::thread_rng());
    }

    /// [`shuffle_colors`](Self::shuffle_colors) with a caller-supplied random source.
    pub fn shuffle_colors_with<R: Rng>(&mut self, rng: &mut R) {
        let keys = self.catalog.keys();
        if keys.is_empty() {
            tracing::warn!("Cannot shuffle: catalog is empty");
            return;
        }

        let picks: Vec<ColorName> = (0..self.slots.len())
            .map(|_| keys[rng.gen_range(0..keys.len())].clone())
            .collect();

        for (index, name) in picks.into_iter().enumerate() {
            self.select_color(index, name);
        }

        // Final projection over the complete selection
        self.update_gradient();
    }

    /// Project the current slots, render, and push the share URL.
    pub fn update_gradient(&mut self) -> &Projection {
        let projection = self.render();
        if self.config.url_sync {
            let url = self.share_url();
            self.history.push_state(&url);
        }
        self.last.insert(projection)
    }

    fn render(&mut self) -> Projection {
        let projection = project(&self.slots, &self.catalog);
        tracing::debug!("Gradient: {}", projection.gradient_hex);
        self.surface.set_background(&projection.gradient_hex);
        self.surface.set_code(&projection.code);
        projection
    }

    /// Share URL for the current slots, at the current path.
    pub fn share_url(&self) -> String {
        let location = self.history.location();
        let (path, _) = share::split_location(&location);
        share::share_url(path, &self.slots)
    }

    pub fn slots(&self) -> &SlotState {
        &self.slots
    }

    pub fn catalog(&self) -> &ColorCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Most recent projection, if anything has been rendered.
    pub fn projection(&self) -> Option<&Projection> {
        self.last.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::SessionHistory;
    use crate::style::BootstrapStyles;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Recorder {
        slots: Vec<(usize, String)>,
        backgrounds: Vec<String>,
        code: Option<String>,
    }

    impl Surface for Recorder {
        fn show_slot(&mut self, index: usize, name: Option<&ColorName>) {
            let shown = name.map(ToString::to_string).unwrap_or_default();
            self.slots.push((index, shown));
        }

        fn set_background(&mut self, gradient_hex: &str) {
            self.backgrounds.push(gradient_hex.to_string());
        }

        fn set_code(&mut self, code: &str) {
            self.code = Some(code.to_string());
        }
    }

    fn controller(
        config: PaletteConfig,
        location: &str,
    ) -> PaletteController<Recorder, SessionHistory> {
        PaletteController::new(
            config,
            &BootstrapStyles::new(),
            Recorder::default(),
            SessionHistory::new(location),
        )
    }

    #[test]
    fn test_select_renders_gradient() {
        let mut c = controller(PaletteConfig::two_slot(), "/");
        c.select_color(0, "blue-500");
        c.select_color(1, "red-100");

        assert_eq!(
            c.surface().backgrounds.last().map(String::as_str),
            Some("linear-gradient(to right, #0d6efd, #f8d7da)")
        );
        let expected: Vec<(usize, String)> =
            vec![(0, "blue-500".to_string()), (1, "red-100".to_string())];
        assert_eq!(c.surface().slots, expected);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut c = controller(PaletteConfig::two_slot(), "/");
        c.select_color(0, "blue-500");
        c.select_color(1, "red-100");
        let slots = c.slots().clone();
        let renders = c.surface().backgrounds.len();
        let code = c.surface().code.clone();
        let pushes = c.history().len();

        assert!(!c.select_color(2, "green-500"));
        assert_eq!(c.slots(), &slots);
        assert_eq!(c.history().len(), pushes);
        assert_eq!(c.surface().backgrounds.len(), renders);
        assert_eq!(c.surface().code, code);
    }

    #[test]
    fn test_shuffle_projects_once_per_slot_plus_one() {
        let mut c = controller(PaletteConfig::default(), "/");
        let mut rng = StdRng::seed_from_u64(7);
        c.shuffle_colors_with(&mut rng);

        assert!(c.slots().is_complete());
        assert_eq!(c.surface().backgrounds.len(), 4);
        // One push per projection, after the initial entry
        assert_eq!(c.history().len(), 5);
        let last_two = &c.surface().backgrounds[2..];
        assert_eq!(last_two[0], last_two[1]);
    }

    #[test]
    fn test_load_from_url() {
        let mut c = controller(PaletteConfig::default(), "/app/?colour=red-500&colour=blue-200");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(c.load_with(&mut rng), LoadSource::Url);

        assert_eq!(c.slots().get(0).map(ColorName::as_str), Some("red-500"));
        assert_eq!(c.slots().get(1).map(ColorName::as_str), Some("blue-200"));
        assert_eq!(c.slots().get(2), None);
        assert_eq!(c.history().location(), "/app/?colour=red-500&colour=blue-200");
        assert_eq!(
            c.projection().map(|p| p.gradient_hex.as_str()),
            Some("linear-gradient(to right, #dc3545, #9ec5fe, )")
        );
    }

    #[test]
    fn test_load_without_url_shuffles() {
        let mut c = controller(PaletteConfig::default(), "/app/");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(c.load_with(&mut rng), LoadSource::Shuffle);
        assert!(c.slots().is_complete());
        assert!(c.history().location().starts_with("/app/?colour="));
    }

    #[test]
    fn test_load_ignores_extra_url_colours() {
        let mut c = controller(
            PaletteConfig::new(2).unwrap(),
            "/?colour=red-500&colour=blue-200&colour=green-300",
        );
        c.load();
        assert_eq!(c.slots().len(), 2);
        assert_eq!(c.share_url(), "/?colour=red-500&colour=blue-200");
    }

    #[test]
    fn test_two_slot_without_url_sync() {
        let mut c = controller(PaletteConfig::two_slot(), "/?colour=red-500");
        assert_eq!(c.load(), LoadSource::Shuffle);
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn test_restore_does_not_push() {
        let mut c = controller(PaletteConfig::default(), "/");
        c.select_color(0, "red-500");
        let len = c.history().len();

        let shown = c.surface().slots.len();

        assert!(c.restore("/?colour=teal-100&colour=teal-900"));
        assert_eq!(c.history().len(), len);
        assert_eq!(c.slots().get(1).map(ColorName::as_str), Some("teal-900"));

        // Every slot is cleared on the surface before the restored names land
        let expected: Vec<(usize, String)> = vec![
            (0, String::new()),
            (1, String::new()),
            (2, String::new()),
            (0, "teal-100".to_string()),
            (1, "teal-900".to_string()),
        ];
        assert_eq!(&c.surface().slots[shown..], &expected[..]);
        assert!(!c.restore("/"));
    }
}
