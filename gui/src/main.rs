use std::time::Instant;

use eframe::egui;
use eframe::egui::{Key, Ui};
use eframe::run_native;
use life_shared::config::CELL_SIZE;
use life_shared::Simulation;
use log::{info, warn};

mod canvas;

const WINDOW_PADDING: f32 = 120.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let simulation = Simulation::default();
    let config = *simulation.config();
    info!(
        "starting {}x{} board, advancing every {:?}",
        config.rows, config.cols, config.interval
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            CELL_SIZE * config.cols as f32 + WINDOW_PADDING,
            CELL_SIZE * config.rows as f32 + WINDOW_PADDING,
        ]),
        ..Default::default()
    };

    run_native(
        "Conway's Game of Life",
        options,
        Box::new(|cc| Ok(Box::new(GuiOfLife::new(cc, simulation)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the game of life window: {err}"))
}

struct GuiOfLife {
    simulation: Simulation,
}

impl GuiOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, simulation: Simulation) -> Self {
        Self { simulation }
    }

    fn toggle_running(&mut self) {
        if self.simulation.is_running() {
            self.simulation.pause();
        } else {
            self.simulation.play(Instant::now());
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (space, next, previous, reset) = ctx.input(|input| {
            (
                input.key_pressed(Key::Space),
                input.key_pressed(Key::N),
                input.key_pressed(Key::P),
                input.key_pressed(Key::R),
            )
        });
        if space {
            self.toggle_running();
        }
        if next {
            self.simulation.step();
        }
        if previous {
            self.simulation.step_back();
        }
        if reset {
            self.simulation.reset();
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let running = self.simulation.is_running();
            if ui.button(if running { "Pause" } else { "Play" }).clicked() {
                self.toggle_running();
            }
            if ui.button("Next").clicked() {
                self.simulation.step();
            }
            if ui
                .add_enabled(self.simulation.has_previous(), egui::Button::new("Previous"))
                .clicked()
            {
                self.simulation.step_back();
            }
            if ui.button("Reset").clicked() {
                self.simulation.reset();
            }
            if ui.add_enabled(!running, egui::Button::new("Randomize")).clicked() {
                self.simulation.randomize();
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.simulation.generation()));
            ui.separator();
            ui.label(format!("Population: {}", self.simulation.population()));
        });
    }

    fn board(&mut self, ui: &mut Ui) {
        let board = self.simulation.board();
        let (rect, response) = ui.allocate_exact_size(canvas::canvas_size(board), egui::Sense::click());
        canvas::paint_board(ui.painter(), rect.min, board);

        if !response.clicked() || self.simulation.is_running() {
            return;
        }
        let Some(pointer) = response.interact_pointer_pos() else {
            return;
        };
        let Some((row, col)) = canvas::cell_at(rect.min, pointer, board.rows(), board.cols()) else {
            return;
        };
        if let Err(err) = self.simulation.toggle_cell(row, col) {
            warn!("discarding click: {err}");
        }
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.simulation.tick(Instant::now());
        self.handle_keys(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Conway's Game of Life");
            });
            self.controls(ui);
            ui.add_space(8.0);
            self.board(ui);
        });

        if let Some(wait) = self.simulation.time_until_next_advance(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
