use std::time::Instant;

use eframe::{CreationContext, Frame};
use egui::{Button, Context, Sense};
use life_matrix::{Grid, toggle_cell_state};
use log::{debug, error};

use crate::{render, simulation::Simulation};

pub struct App {
    grid: Grid,
    simulation: Simulation,
    settings: render::Settings,
}

impl App {
    /// Called once before the first frame.
    pub fn new(
        _cc: &CreationContext<'_>,
        grid: Grid,
        simulation: Simulation,
        settings: render::Settings,
    ) -> Self {
        Self {
            grid,
            simulation,
            settings,
        }
    }

    fn click(&mut self, pointer: egui::Pos2, origin: egui::Pos2) {
        // Edits are locked while a run is in progress.
        if self.simulation.is_running() {
            return;
        }
        let selector = render::selector_at(origin, pointer, self.settings.cell_size);
        if let Err(e) = toggle_cell_state(&mut self.grid, selector) {
            debug!("ignoring click: {e}");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        if let Err(e) = self.simulation.tick(&mut self.grid, now) {
            error!("stopping run: {e}");
            self.simulation.stop();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let step = Button::new("Step");
                if ui.add_enabled(!self.simulation.is_running(), step).clicked() {
                    self.simulation.start(now);
                }
                let status = match self.simulation.generation() {
                    Some(generation) => format!("generation {generation}"),
                    None => format!("population {}", self.grid.population()),
                };
                ui.label(status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let size = render::grid_size(&self.grid, self.settings);
            let (response, painter) = ui.allocate_painter(size, Sense::click());
            let origin = response.rect.min;
            if response.clicked() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    self.click(pointer, origin);
                }
            }
            render::paint(&painter, origin, &self.grid, self.settings);
        });

        if let Some(wait) = self.simulation.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
