//! Optional egui adapter for the inspector panel.
//!
//! A thin widget layer: toolbar (display mode, UV channel, checker tiling,
//! wireframe toggle), the statistics block, and a preview area that
//! forwards drag/scroll input to the panel. Compositing the rendered
//! offscreen surface into the UI stays with the host (it owns the texture
//! registration for its backend); when the renderer cannot draw offscreen
//! the widget paints the fallback text itself.

use glam::Vec2;

use crate::input::{DisplayRect, DragInput, PreviewInput, ScrollInput};
use crate::menu::MenuModel;
use crate::panel::{FrameOutcome, InspectorPanel};
use crate::preview::mode::DisplayMode;
use crate::renderer::SceneRenderer;

/// egui widget over an [`InspectorPanel`].
#[derive(Debug)]
pub struct InspectorWidget {
    /// Height reserved for the preview area, in points.
    pub preview_height: f32,
}

impl InspectorWidget {
    /// A widget with the default preview height.
    pub fn new() -> Self {
        Self {
            preview_height: 256.0,
        }
    }
}

impl Default for InspectorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectorWidget {
    /// Draw the toolbar, statistics, and preview area.
    pub fn show<R: SceneRenderer>(
        &mut self,
        ui: &mut egui::Ui,
        panel: &mut InspectorPanel,
        renderer: &mut R,
    ) {
        self.toolbar(ui, panel);
        ui.separator();

        for line in panel.statistics_text().lines() {
            ui.monospace(line);
        }
        ui.separator();

        self.preview_area(ui, panel, renderer);
    }

    fn toolbar(&mut self, ui: &mut egui::Ui, panel: &mut InspectorPanel) {
        ui.horizontal(|ui| {
            let mode = panel.display_mode();

            if mode == DisplayMode::UvChecker {
                let mut tiling = panel.checker_tiling();
                if ui
                    .add(egui::Slider::new(&mut tiling, 1..=30).text("Tiling"))
                    .changed()
                {
                    panel.set_checker_tiling(tiling);
                }
            }

            if mode.uses_uv_channel() {
                if let Some(index) = combo(ui, "uv_channel", &panel.uv_channel_menu()) {
                    panel.select_uv_channel(index);
                }
            }

            if let Some(index) = combo(ui, "display_mode", &panel.mode_menu()) {
                panel.select_mode(index);
            }

            let mut wireframe = panel.wireframe_enabled();
            let toggle = ui.add_enabled(
                mode != DisplayMode::FlatUv,
                egui::Checkbox::new(&mut wireframe, "Wireframe"),
            );
            if toggle.changed() {
                panel.set_wireframe(wireframe);
            }
        });
    }

    fn preview_area<R: SceneRenderer>(
        &mut self,
        ui: &mut egui::Ui,
        panel: &mut InspectorPanel,
        renderer: &mut R,
    ) {
        let size = egui::vec2(ui.available_width(), self.preview_height);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());
        let display_rect = DisplayRect::new(
            Vec2::new(rect.min.x, rect.min.y),
            Vec2::new(rect.width(), rect.height()),
        );

        if response.dragged() {
            let delta = response.drag_delta();
            panel.handle_input(
                PreviewInput::Drag(DragInput {
                    delta: Vec2::new(delta.x, delta.y),
                }),
                display_rect,
            );
        }
        if let Some(pointer) = response.hover_pos() {
            let scroll = ui.input(|input| input.raw_scroll_delta.y);
            if scroll != 0.0 {
                panel.handle_input(
                    PreviewInput::Scroll(ScrollInput {
                        pointer: Vec2::new(pointer.x - rect.min.x, pointer.y - rect.min.y),
                        zoom_delta: scroll,
                    }),
                    display_rect,
                );
            }
        }

        match panel.render_interactive_frame(renderer, display_rect) {
            Ok(FrameOutcome::Unsupported(message)) => {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    message,
                    egui::FontId::proportional(14.0),
                    ui.visuals().text_color(),
                );
            }
            Ok(FrameOutcome::NothingSelected) | Ok(FrameOutcome::Rendered) => {}
            Err(error) => {
                log::warn!("interactive preview frame failed: {error}");
            }
        }
    }
}

fn combo(ui: &mut egui::Ui, id: &str, menu: &MenuModel) -> Option<i32> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(menu.selected_label().unwrap_or_default().to_string())
        .show_ui(ui, |ui| {
            for (index, item) in menu.items.iter().enumerate() {
                let entry = ui.add_enabled(
                    item.enabled,
                    egui::SelectableLabel::new(item.selected, &item.label),
                );
                if entry.clicked() {
                    picked = Some(index as i32);
                }
            }
        });
    picked
}
