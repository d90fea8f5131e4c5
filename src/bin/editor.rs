//! Particles Editor - live option editing next to a small preview
//!
//! The editor panel writes into the shared options and sends refresh
//! commands. The preview drains them once per frame and re-reads the
//! options only when at least one arrived.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Receiver;

use eframe::egui;
use glam::Vec2;
use particles_editor::prelude::*;
use particles_editor::{hsl_to_rgb, ColorSlot, CommandSender};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const OPTIONS_FILE: &str = "particles-options.json";
const MAX_PREVIEW_PARTICLES: f64 = 600.0;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Particles Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Particles Editor",
        native,
        Box::new(|_cc| Ok(Box::new(EditorApp::new()?))),
    )
}

struct EditorApp {
    options: SharedOptions<Options>,
    editor: OptionsEditor<Options>,
    sender: CommandSender,
    commands: Receiver<SimulationCommand>,
    preview: Preview,
    status: Option<String>,
}

impl EditorApp {
    fn new() -> Result<Self, EditorError> {
        let options = Rc::new(RefCell::new(Options::default()));
        let (sender, commands) = command_channel();
        let editor = OptionsEditor::new(Rc::clone(&options), sender.clone())?;
        let preview = Preview::new(&options.borrow());

        Ok(Self {
            options,
            editor,
            sender,
            commands,
            preview,
            status: None,
        })
    }

    /// Swap in new options and rebuild the tree over them.
    fn replace_options(&mut self, loaded: Options) -> Result<(), EditorError> {
        *self
            .options
            .try_borrow_mut()
            .map_err(|_| EditorError::OptionsBusy)? = loaded;
        self.editor = OptionsEditor::new(Rc::clone(&self.options), self.sender.clone())?;
        self.sender.refresh();
        Ok(())
    }

    fn load_preset(&mut self, preset: &Preset) {
        let result = preset.load().and_then(|loaded| self.replace_options(loaded));
        self.status = Some(match result {
            Ok(()) => format!("Loaded preset: {}", preset.name),
            Err(err) => {
                log::warn!("preset {} failed: {}", preset.name, err);
                format!("Preset {} failed: {}", preset.name, err)
            }
        });
    }

    fn save(&mut self) {
        let result = self.options.borrow().save(OPTIONS_FILE);
        self.status = Some(match result {
            Ok(()) => format!("Saved {}", OPTIONS_FILE),
            Err(err) => format!("Save failed: {}", err),
        });
    }

    fn load(&mut self) {
        let result = Options::load(OPTIONS_FILE).and_then(|loaded| self.replace_options(loaded));
        self.status = Some(match result {
            Ok(()) => format!("Loaded {}", OPTIONS_FILE),
            Err(err) => format!("Load failed: {}", err),
        });
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if drain_refreshes(&self.commands) > 0 {
            self.preview.apply(&self.options.borrow());
        }

        let mut chosen_preset = None;
        let mut save = false;
        let mut load = false;

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save").clicked() {
                        save = true;
                        ui.close_menu();
                    }
                    if ui.button("Load").clicked() {
                        load = true;
                        ui.close_menu();
                    }
                });

                ui.menu_button("Presets", |ui| {
                    for preset in PRESETS {
                        if ui.button(preset.name).on_hover_text(preset.description).clicked() {
                            chosen_preset = Some(preset);
                            ui.close_menu();
                        }
                    }
                });

                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        if let Some(preset) = chosen_preset {
            self.load_preset(preset);
        }
        if save {
            self.save();
        }
        if load {
            self.load();
        }

        egui::SidePanel::right("options")
            .min_width(320.0)
            .default_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.editor.show(ui);
                });
            });

        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.preview.step(dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.preview.paint(ui));

        ctx.request_repaint();
    }
}

/// What the preview reads from the options on each refresh.
struct PreviewSettings {
    background: egui::Color32,
    color: egui::Color32,
    count: usize,
    size: f32,
    opacity: f32,
    moving: bool,
    speed: f32,
    bounce: bool,
    links: Option<LinkSettings>,
}

struct LinkSettings {
    color: egui::Color32,
    distance: f32,
    opacity: f32,
    width: f32,
}

impl PreviewSettings {
    fn from_options(options: &Options) -> Self {
        let particles = &options.particles;
        let links = &particles.links;

        Self {
            background: color32(&options.background.color, egui::Color32::from_rgb(16, 16, 24))
                .gamma_multiply(options.background.opacity as f32),
            color: color32(&particles.color, egui::Color32::WHITE),
            count: particles.number.value.clamp(0.0, MAX_PREVIEW_PARTICLES) as usize,
            size: particles.size.value.max(0.5) as f32,
            opacity: particles.opacity.value as f32,
            moving: particles.movement.enable,
            speed: particles.movement.speed as f32,
            bounce: particles.movement.out_mode == "bounce",
            links: links.enable.then(|| LinkSettings {
                color: color32(&links.color, egui::Color32::WHITE),
                distance: links.distance as f32,
                opacity: links.opacity as f32,
                width: links.width as f32,
            }),
        }
    }
}

fn color32(slot: &impl ColorSlot, fallback: egui::Color32) -> egui::Color32 {
    slot.to_display_value(hsl_to_rgb)
        .as_deref()
        .and_then(Rgb::from_hex)
        .map(|rgb| egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b))
        .unwrap_or(fallback)
}

/// Particles in unit space, scaled to the panel when painted.
struct Preview {
    rng: StdRng,
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    settings: PreviewSettings,
}

impl Preview {
    fn new(options: &Options) -> Self {
        let mut preview = Self {
            rng: StdRng::seed_from_u64(7),
            positions: Vec::new(),
            velocities: Vec::new(),
            settings: PreviewSettings::from_options(options),
        };
        preview.respawn();
        preview
    }

    fn apply(&mut self, options: &Options) {
        self.settings = PreviewSettings::from_options(options);
        self.respawn();
        log::debug!("preview refreshed with {} particles", self.positions.len());
    }

    /// Grow or shrink to the configured count, keeping existing particles.
    fn respawn(&mut self) {
        let count = self.settings.count;
        self.positions.truncate(count);
        self.velocities.truncate(count);
        while self.positions.len() < count {
            let position = Vec2::new(self.rng.gen_range(0.0..1.0), self.rng.gen_range(0.0..1.0));
            let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
            self.positions.push(position);
            self.velocities.push(Vec2::from_angle(angle));
        }
    }

    fn step(&mut self, dt: f32) {
        if !self.settings.moving {
            return;
        }

        let scale = self.settings.speed * dt * 0.05;
        for (position, velocity) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *position += *velocity * scale;

            if self.settings.bounce {
                if position.x < 0.0 || position.x > 1.0 {
                    velocity.x = -velocity.x;
                }
                if position.y < 0.0 || position.y > 1.0 {
                    velocity.y = -velocity.y;
                }
                *position = position.clamp(Vec2::ZERO, Vec2::ONE);
            } else {
                position.x = position.x.rem_euclid(1.0);
                position.y = position.y.rem_euclid(1.0);
            }
        }
    }

    fn paint(&self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, self.settings.background);

        let to_screen = |p: Vec2| rect.min + egui::vec2(p.x * rect.width(), p.y * rect.height());
        let points: Vec<egui::Pos2> = self.positions.iter().map(|&p| to_screen(p)).collect();

        if let Some(links) = &self.settings.links {
            for (i, a) in points.iter().enumerate() {
                for b in &points[i + 1..] {
                    let distance = a.distance(*b);
                    if distance < links.distance {
                        let fade = links.opacity * (1.0 - distance / links.distance);
                        painter.line_segment(
                            [*a, *b],
                            egui::Stroke::new(links.width, links.color.gamma_multiply(fade)),
                        );
                    }
                }
            }
        }

        let color = self.settings.color.gamma_multiply(self.settings.opacity);
        for point in points {
            painter.circle_filled(point, self.settings.size, color);
        }
    }
}
