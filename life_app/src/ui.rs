// ui.rs - eframe front end: feeds keys to the controller and paints the grid

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Painter, Pos2, Vec2};
use life_core::{Canvas, Color, Config, Controller, Layout, Palette, Rect, Simulation, render};

use crate::keys::KeyTranslator;

pub struct LifeApp {
    sim        : Simulation,
    controller : Controller,
    keys       : KeyTranslator,
    palette    : Palette,
    border     : u32,
    spacing    : u32,
}

impl LifeApp {
    pub fn new(config: &Config, sim: Simulation) -> Self {
        Self {
            sim,
            controller: Controller::new(config.step_delay),
            keys: KeyTranslator::new(),
            palette: Palette::from_config(config),
            border: config.border,
            spacing: config.spacing,
        }
    }

    /// Cell geometry for the area egui gave us this frame.
    fn layout(&self, area: egui::Rect) -> Layout {
        Layout::new(area.width() as u32, area.height() as u32, self.sim.rows(), self.sim.cols())
            .with_border(self.border)
            .with_spacing(self.spacing)
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let (events, modifiers) = ctx.input(|i| (i.events.clone(), i.modifiers));
        let input = self.keys.translate(&events, modifiers);
        let outcome = self.controller.frame(&mut self.sim, input, now);
        if outcome.handled > 0 || outcome.stepped {
            log::trace!(
                "frame: {} keys, stepped={}, generation {}",
                outcome.handled, outcome.stepped, self.sim.generation()
            );
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let layout = self.layout(response.rect);
                let mut canvas = PainterCanvas::new(&painter, response.rect.min);
                render(&self.sim, &layout, &self.palette, &mut canvas);
            });

        if outcome.redraw {
            ctx.request_repaint();
        }
        // Keep the run timer ticking without any input
        if let Some(wait) = self.controller.until_next_step(&self.sim, now) {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Paints draw calls with an egui painter; egui blends translucent fills.
struct PainterCanvas<'a> {
    painter : &'a Painter,
    origin  : Pos2,
}

impl<'a> PainterCanvas<'a> {
    fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, color: Color) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, to_color32(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }
        let min = self.origin + Vec2::new(rect.x as f32, rect.y as f32);
        let area = egui::Rect::from_min_size(min, Vec2::new(rect.w as f32, rect.h as f32));
        self.painter.rect_filled(area, 0.0, to_color32(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_convert_without_premultiplying_twice() {
        assert_eq!(to_color32(Color::BLACK), Color32::BLACK);
        assert_eq!(to_color32(Color::WHITE), Color32::WHITE);
        let amber = to_color32(Color::CURSOR_AMBER);
        assert_eq!(amber.a(), 150);
        assert_eq!(amber.to_srgba_unmultiplied()[3], 150);
    }

    #[test]
    fn layout_tracks_the_painted_area() {
        let config = Config::default().with_randomize_on_start(false);
        let sim = Simulation::with_seed(&config, 0).unwrap();
        let app = LifeApp::new(&config, sim);
        let area = egui::Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 800.0));
        let layout = app.layout(area);
        assert_eq!((layout.cell_width(), layout.cell_height()), (8, 8));
    }
}
