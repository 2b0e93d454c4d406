//! Header panel UI rendering
//!
//! Top bar with the entity → hall → camera selection chain, the hall
//! image upload button and the theme selector.

use crate::app::AppState;
use crate::state::CatalogState;
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    EntitySelected(String),
    HallSelected(String),
    CameraSelected(String),
    /// User picked a hall image file
    ImageFileChosen(PathBuf),
}

/// Renders the application header.
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        interaction = render_selection_chain(ui, state).or(render_upload_button(ui, state));

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }
    if let Some(notice) = &state.notice {
        ui.weak(notice);
    }

    interaction
}

/// The entity → hall → camera picker chain. Each picker is enabled only
/// once the previous one has a selection.
fn render_selection_chain(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let catalog_state = &state.catalog;
    let mut interaction = None;

    interaction = interaction.or(entity_picker(ui, catalog_state));
    interaction = interaction.or(hall_picker(ui, catalog_state));
    interaction = interaction.or(camera_picker(ui, state));

    interaction
}

fn entity_picker(ui: &mut egui::Ui, catalog_state: &CatalogState) -> Option<HeaderInteraction> {
    let mut picked = None;
    let selected_text = catalog_state
        .selected_entity()
        .map(|e| e.name.clone())
        .unwrap_or_else(|| "Select Entity".to_string());

    egui::ComboBox::from_id_salt("entity_picker")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for entity in &catalog_state.catalog().entities {
                let is_selected =
                    catalog_state.selected_entity().map(|e| e.id.as_str()) == Some(entity.id.as_str());
                if ui.selectable_label(is_selected, &entity.name).clicked() && !is_selected {
                    picked = Some(HeaderInteraction::EntitySelected(entity.id.clone()));
                }
            }
        });
    picked
}

fn hall_picker(ui: &mut egui::Ui, catalog_state: &CatalogState) -> Option<HeaderInteraction> {
    let mut picked = None;
    let halls = catalog_state.available_halls();
    let selected_text = catalog_state
        .selected_hall()
        .map(|h| h.name.clone())
        .unwrap_or_else(|| "Select Hall".to_string());

    ui.add_enabled_ui(!halls.is_empty(), |ui| {
        egui::ComboBox::from_id_salt("hall_picker")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for hall in halls {
                    let is_selected =
                        catalog_state.selected_hall().map(|h| h.id.as_str()) == Some(hall.id.as_str());
                    if ui.selectable_label(is_selected, &hall.name).clicked() && !is_selected {
                        picked = Some(HeaderInteraction::HallSelected(hall.id.clone()));
                    }
                }
            });
    });
    picked
}

fn camera_picker(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut picked = None;
    let cameras = state.catalog.available_cameras();
    let selected_text = state
        .hall
        .camera()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Select Camera".to_string());

    ui.add_enabled_ui(!cameras.is_empty(), |ui| {
        egui::ComboBox::from_id_salt("camera_picker")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for camera in cameras {
                    let is_selected =
                        state.hall.camera().map(|c| c.id.as_str()) == Some(camera.id.as_str());
                    if ui.selectable_label(is_selected, &camera.name).clicked() && !is_selected {
                        picked = Some(HeaderInteraction::CameraSelected(camera.id.clone()));
                    }
                }
            });
    });
    picked
}

fn render_upload_button(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    ui.separator();

    let mut interaction = None;
    let upload_enabled = state.hall.has_camera();
    if ui
        .add_enabled(upload_enabled, egui::Button::new("📁 Upload Hall Image"))
        .clicked()
    {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "webp"]);

        if let Ok(cwd) = std::env::current_dir() {
            dialog = dialog.set_directory(cwd);
        }

        if let Some(path) = dialog.pick_file() {
            interaction = Some(HeaderInteraction::ImageFileChosen(path));
        }
    }
    interaction
}
