//! Main application state and eframe integration.

use std::path::PathBuf;

use egui::{CentralPanel, Context, Key, Modifiers, SidePanel, TopBottomPanel, Vec2};
use palette_core::{
    BootstrapStyles, ColorName, History, LoadSource, PaletteConfig, PaletteController, Rgb,
    SessionHistory, StyleResolver, Stylesheet,
};
use palette_core::share;

use crate::canvas::{self, PlacedSwatch};
use crate::gradient;
use crate::surface::ViewSurface;
use crate::theme;

/// Main application state.
pub struct PickerApp {
    /// Slots, catalog and history for this session
    controller: PaletteController<ViewSurface, SessionHistory>,

    /// Swatch under the pointer: (slot, name)
    hovered: Option<(usize, ColorName)>,

    /// Show the code display
    show_code: bool,
    /// Status message
    status_message: String,

    /// Error message to display
    error_message: Option<String>,

    /// Show keyboard shortcuts help dialog
    show_shortcuts_dialog: bool,

    /// Show about dialog
    show_about_dialog: bool,
}

impl PickerApp {
    /// Create the picker and load its initial slots.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        initial_location: Option<String>,
        stylesheet: Option<PathBuf>,
    ) -> Self {
        let mut error_message = None;
        let resolver: Box<dyn StyleResolver> = match stylesheet {
            Some(path) => match Stylesheet::from_file(&path) {
                Ok(sheet) => {
                    tracing::info!("Loaded {} rule(s) from {}", sheet.len(), path.display());
                    Box::new(sheet.with_fallback(BootstrapStyles::new()))
                }
                Err(e) => {
                    error_message = Some(format!("Failed to load stylesheet: {}", e));
                    tracing::error!("Failed to load {}: {}", path.display(), e);
                    Box::new(BootstrapStyles::new())
                }
            },
            None => Box::new(BootstrapStyles::new()),
        };

        let config = PaletteConfig::default();
        let location = share::normalize_location(initial_location.as_deref().unwrap_or("/"));
        let mut controller = PaletteController::new(
            config,
            &resolver,
            ViewSurface::new(config.slot_count),
            SessionHistory::new(location),
        );

        let status_message = match controller.load() {
            LoadSource::Url => "Loaded colours from URL".to_string(),
            LoadSource::Shuffle => "Shuffled".to_string(),
        };

        Self {
            controller,
            hovered: None,
            show_code: true,
            status_message,
            error_message,
            show_shortcuts_dialog: false,
            show_about_dialog: false,
        }
    }

    fn shuffle(&mut self) {
        self.controller.shuffle_colors();
        self.status_message = "Shuffled".to_string();
    }

    /// Step through session history and re-apply that entry's colours.
    fn navigate(&mut self, back: bool) {
        let history = self.controller.history_mut();
        let location = match back {
            true => history.back(),
            false => history.forward(),
        }
        .map(str::to_string);

        let Some(location) = location else {
            return;
        };
        if self.controller.restore(&location) {
            self.status_message = location;
        } else {
            self.status_message = "No colours at this history entry".to_string();
        }
    }

    fn copy_code(&mut self, ctx: &Context) {
        let code = self.controller.surface().code.clone();
        ctx.output_mut(|o| o.copied_text = code);
        self.status_message = "Copied CSS".to_string();
    }

    fn copy_share_url(&mut self, ctx: &Context) {
        let url = self.controller.history().location();
        ctx.output_mut(|o| o.copied_text = url);
        self.status_message = "Copied share URL".to_string();
    }

    /// Export the current gradient to PNG.
    fn export_to_png(&mut self) {
        let stops = &self.controller.surface().stops;
        if stops.is_empty() {
            self.error_message = Some("Nothing to export".to_string());
            return;
        }

        let default_name = format!(
            "gradient-{}.png",
            self.controller
                .slots()
                .names()
                .map(ColorName::as_str)
                .collect::<Vec<_>>()
                .join("-")
        );

        let Some(save_path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(&default_name)
            .save_file()
        else {
            return;
        };

        let missing = Rgb::new(
            theme::MISSING_STOP.r(),
            theme::MISSING_STOP.g(),
            theme::MISSING_STOP.b(),
        );
        let img = gradient::render_image(stops, 1920, 480, missing);

        match img.save(&save_path) {
            Ok(()) => {
                self.status_message = format!("Exported to {}", save_path.display());
                tracing::info!("Exported PNG to {}", save_path.display());
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to save PNG: {}", e));
                tracing::error!("Failed to save PNG: {}", e);
            }
        }
    }

    /// Render the menu bar.
    fn render_menu(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                // File menu
                ui.menu_button("File", |ui| {
                    if ui.button("Export PNG... (Ctrl+E)").clicked() {
                        self.export_to_png();
                        ui.close_menu();
                    }
                    if ui.button("Copy CSS (Ctrl+C)").clicked() {
                        self.copy_code(ctx);
                        ui.close_menu();
                    }
                    if ui.button("Copy Share URL (Ctrl+L)").clicked() {
                        self.copy_share_url(ctx);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit (Ctrl+Q)").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                // Palette menu
                ui.menu_button("Palette", |ui| {
                    if ui.button("Shuffle (Space)").clicked() {
                        self.shuffle();
                        ui.close_menu();
                    }
                    ui.separator();
                    let history = self.controller.history();
                    let (can_back, can_forward) = (history.can_go_back(), history.can_go_forward());
                    if ui
                        .add_enabled(can_back, egui::Button::new("Back (Alt+Left)"))
                        .clicked()
                    {
                        self.navigate(true);
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(can_forward, egui::Button::new("Forward (Alt+Right)"))
                        .clicked()
                    {
                        self.navigate(false);
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.checkbox(&mut self.show_code, "Code Display");
                });

                // Help menu
                ui.menu_button("Help", |ui| {
                    if ui.button("Keyboard Shortcuts (?)").clicked() {
                        self.show_shortcuts_dialog = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("About").clicked() {
                        self.show_about_dialog = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the slot panel: one large swatch and one wheel per slot.
    fn render_palettes(&mut self, ctx: &Context) {
        let mut clicked: Option<(usize, ColorName)> = None;
        let mut hovered: Option<(usize, ColorName)> = None;

        SidePanel::left("palettes")
            .resizable(false)
            .exact_width(theme::WHEEL_SIZE + 24.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let shown = self.controller.surface().slots.clone();
                    for (index, selected) in shown.iter().enumerate() {
                        ui.strong(slot_label(index, shown.len()));

                        // Large swatch
                        let (rect, _) = ui.allocate_exact_size(
                            Vec2::new(theme::WHEEL_SIZE, theme::SLOT_SWATCH_HEIGHT),
                            egui::Sense::hover(),
                        );
                        let fill = selected
                            .as_ref()
                            .and_then(|name| self.controller.catalog().hex(name))
                            .and_then(Rgb::from_hex)
                            .map_or(theme::MISSING_STOP, theme::color32);
                        ui.painter().rect_filled(rect, 4.0, fill);
                        ui.label(
                            egui::RichText::new(
                                selected.as_ref().map_or("(unset)", ColorName::as_str),
                            )
                            .color(theme::DIM_TEXT),
                        );

                        // Wheel
                        let (response, painter) = ui.allocate_painter(
                            Vec2::splat(theme::WHEEL_SIZE),
                            egui::Sense::click(),
                        );
                        let swatches = canvas::layout_wheel(response.rect, self.controller.catalog());
                        let under_pointer: Option<&PlacedSwatch> = response
                            .hover_pos()
                            .and_then(|pos| canvas::hit_test(&swatches, pos));

                        if let Some(swatch) = under_pointer {
                            hovered = Some((index, swatch.name.clone()));
                            if response.clicked() {
                                clicked = Some((index, swatch.name.clone()));
                            }
                        }

                        canvas::render_wheel(
                            &painter,
                            response.rect,
                            &swatches,
                            under_pointer.map(|s| &s.name),
                            selected.as_ref(),
                        );
                        ui.add_space(12.0);
                    }
                });
            });

        self.hovered = hovered;
        if let Some((index, name)) = clicked {
            self.status_message = format!("Slot {}: {}", index + 1, name);
            self.controller.select_color(index, name);
        }
    }

    /// Render the status bar.
    fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let history = self.controller.history();
                    ui.label(format!("History: {}", history.len()));
                    ui.separator();
                    ui.label(egui::RichText::new(history.location()).monospace());
                });
            });
        });
    }

    /// Render the gradient page with the code display on top.
    fn render_canvas(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::CANVAS_BG))
            .show(ctx, |ui| {
                // Handle keyboard shortcuts
                self.handle_keyboard(ctx);

                let rect = ui.max_rect();
                canvas::render_gradient(ui.painter(), rect, &self.controller.surface().stops);

                if !self.show_code {
                    return;
                }

                let mut copy_code = false;
                let mut copy_url = false;
                let mut shuffle = false;

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(24.0);
                    egui::Frame::none()
                        .fill(theme::CODE_BG)
                        .rounding(6.0)
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&self.controller.surface().code)
                                    .monospace()
                                    .color(theme::CODE_TEXT),
                            );
                            ui.separator();
                            ui.horizontal(|ui| {
                                shuffle = ui.button("Shuffle").clicked();
                                copy_code = ui.button("Copy CSS").clicked();
                                if self.controller.config().url_sync {
                                    copy_url = ui.button("Copy Share URL").clicked();
                                }
                            });
                        });
                });

                if shuffle {
                    self.shuffle();
                }
                if copy_code {
                    self.copy_code(ctx);
                }
                if copy_url {
                    self.copy_share_url(ctx);
                }
            });
    }

    /// Handle keyboard shortcuts.
    fn handle_keyboard(&mut self, ctx: &Context) {
        let mut shuffle = false;
        let mut copy_code = false;
        let mut copy_url = false;
        let mut export = false;
        let mut quit = false;
        let mut navigate: Option<bool> = None;

        ctx.input(|i| {
            // Space: Shuffle
            if i.key_pressed(Key::Space) && i.modifiers == Modifiers::NONE {
                shuffle = true;
            }

            // Ctrl+C: Copy CSS
            if i.modifiers.ctrl && i.key_pressed(Key::C) {
                copy_code = true;
            }

            // Ctrl+L: Copy share URL
            if i.modifiers.ctrl && i.key_pressed(Key::L) {
                copy_url = true;
            }

            // Ctrl+E: Export PNG
            if i.modifiers.ctrl && i.key_pressed(Key::E) {
                export = true;
            }

            // Ctrl+Q: Quit
            if i.modifiers.ctrl && i.key_pressed(Key::Q) {
                quit = true;
            }

            // Alt+Left/Right: History
            if i.modifiers.alt && i.key_pressed(Key::ArrowLeft) {
                navigate = Some(true);
            }
            if i.modifiers.alt && i.key_pressed(Key::ArrowRight) {
                navigate = Some(false);
            }

            // ?: Show keyboard shortcuts
            if i.key_pressed(Key::Questionmark) || (i.modifiers.shift && i.key_pressed(Key::Slash))
            {
                self.show_shortcuts_dialog = true;
            }

            // Escape: Close dialogs
            if i.key_pressed(Key::Escape) {
                self.show_shortcuts_dialog = false;
                self.show_about_dialog = false;
            }
        });

        if shuffle {
            self.shuffle();
        }
        if copy_code {
            self.copy_code(ctx);
        }
        if copy_url {
            self.copy_share_url(ctx);
        }
        if export {
            self.export_to_png();
        }
        if let Some(back) = navigate {
            self.navigate(back);
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Show error dialog if there's an error.
    fn show_error_dialog(&mut self, ctx: &Context) {
        if let Some(error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(&error);
                    ui.separator();
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }
    }

    /// Show keyboard shortcuts help dialog.
    fn show_shortcuts_help(&mut self, ctx: &Context) {
        if !self.show_shortcuts_dialog {
            return;
        }

        egui::Window::new("Keyboard Shortcuts")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 4.0])
                    .show(ui, |ui| {
                        for (keys, action) in [
                            ("Click swatch", "Pick into that slot"),
                            ("Space", "Shuffle"),
                            ("Alt+Left", "Previous gradient"),
                            ("Alt+Right", "Next gradient"),
                            ("Ctrl+C", "Copy CSS"),
                            ("Ctrl+L", "Copy share URL"),
                            ("Ctrl+E", "Export PNG"),
                            ("Ctrl+Q", "Quit"),
                            ("Escape", "Close dialogs"),
                        ] {
                            ui.label(keys);
                            ui.label(action);
                            ui.end_row();
                        }
                    });

                ui.separator();
                if ui.button("Close").clicked() {
                    self.show_shortcuts_dialog = false;
                }
            });
    }

    /// Show about dialog.
    fn show_about(&mut self, ctx: &Context) {
        if !self.show_about_dialog {
            return;
        }

        egui::Window::new("About Palette Picker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.heading("Palette Picker");
                ui.label("Version 0.1.0");
                ui.separator();
                ui.label("Pick palette colors into a CSS gradient.");
                ui.label("");
                ui.label("Built with egui/eframe");
                ui.separator();
                if ui.button("Close").clicked() {
                    self.show_about_dialog = false;
                }
            });
    }

    /// Show tooltip for hovered swatch.
    fn show_swatch_tooltip(&self, ctx: &Context) {
        let Some((index, name)) = &self.hovered else {
            return;
        };
        let hex = self.controller.catalog().hex(name).unwrap_or("unresolved");

        egui::show_tooltip_at_pointer(
            ctx,
            egui::LayerId::new(egui::Order::Tooltip, egui::Id::new("swatch_tooltip_layer")),
            egui::Id::new("swatch_tooltip"),
            |ui| {
                ui.strong(name.as_str());
                ui.label(hex);
                ui.label(format!("Click to use for slot {}", index + 1));
            },
        );
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.render_menu(ctx);
        self.render_palettes(ctx);
        self.render_status_bar(ctx);
        self.render_canvas(ctx);
        self.show_error_dialog(ctx);
        self.show_shortcuts_help(ctx);
        self.show_about(ctx);
        self.show_swatch_tooltip(ctx);
    }
}

/// Heading for a slot's palette.
fn slot_label(index: usize, count: usize) -> &'static str {
    match (index, count) {
        (0, _) => "Start",
        (1, 3) => "Middle",
        _ => "End",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_labels() {
        assert_eq!(slot_label(0, 3), "Start");
        assert_eq!(slot_label(1, 3), "Middle");
        assert_eq!(slot_label(2, 3), "End");
        assert_eq!(slot_label(1, 2), "End");
    }
}
