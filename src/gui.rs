//! Overlay window shell
//!
//! A fixed 440x160 always-on-top window with a large label for the
//! current combination and a fixed-width history panel on the right.
//! The egui update loop is the single owner of the tracker and history:
//! capture tasks only talk to it through the key-event channel, and the
//! 100 ms repaint request doubles as the idle-monitor poll.

use anyhow::Result;
use eframe::egui;
use log::info;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::{Config, POLL_INTERVAL};
use crate::display::{self, IDLE_PLACEHOLDER};
use crate::history::KeyHistory;
use crate::input::KeyEvent;
use crate::keys;
use crate::tracker::KeyTracker;

const WINDOW_WIDTH: f32 = 440.0;
const WINDOW_HEIGHT: f32 = 160.0;
const HISTORY_PANEL_WIDTH: f32 = 120.0;

// 94% opaque, like the original overlay
const BACKGROUND: egui::Color32 = egui::Color32::from_rgba_premultiplied(24, 24, 26, 240);
const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgba_premultiplied(32, 32, 36, 240);

/// Run the overlay window. Blocks until the window is closed.
pub fn run(config: &Config, key_receiver: UnboundedReceiver<KeyEvent>) -> Result<()> {
    info!("Starting overlay window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_position([100.0, 100.0])
            .with_resizable(false)
            .with_transparent(true)
            .with_title("Key Display")
            .with_app_id("keyshow")
            .with_window_level(egui::WindowLevel::AlwaysOnTop),
        ..Default::default()
    };

    let app = OverlayApp::new(config, key_receiver);

    eframe::run_native("keyshow", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}

pub struct OverlayApp {
    tracker: KeyTracker,
    history: KeyHistory,
    key_receiver: UnboundedReceiver<KeyEvent>,
    primary_text: String,
}

impl OverlayApp {
    pub fn new(config: &Config, key_receiver: UnboundedReceiver<KeyEvent>) -> Self {
        Self {
            tracker: KeyTracker::new(config.idle_timeout),
            history: KeyHistory::default(),
            key_receiver,
            primary_text: IDLE_PLACEHOLDER.to_string(),
        }
    }

    /// Apply all pending key events. Presses render (and log) once each;
    /// releases only mutate the held set.
    fn drain_key_events(&mut self) {
        while let Ok(event) = self.key_receiver.try_recv() {
            let Some(label) = keys::normalize(&event.raw) else {
                continue;
            };
            if event.pressed {
                self.tracker.on_press(&label);
                self.render_current();
            } else {
                self.tracker.on_release(&label);
            }
        }
    }

    fn render_current(&mut self) {
        match display::format_keys(self.tracker.displayed()) {
            Some(text) => {
                self.history.push(text.clone());
                self.primary_text = text;
            }
            None => {
                // Idle renders are not logged; clear held as a safety net
                self.tracker.clear_held();
                self.primary_text = IDLE_PLACEHOLDER.to_string();
            }
        }
    }
}

impl eframe::App for OverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_key_events();

        if self.tracker.idle_tick() {
            self.primary_text = IDLE_PLACEHOLDER.to_string();
        }

        egui::SidePanel::right("history_panel")
            .exact_width(HISTORY_PANEL_WIDTH)
            .resizable(false)
            .frame(egui::Frame::none().fill(PANEL_BACKGROUND).inner_margin(6.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("History").size(12.0).strong());
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for line in self.history.lines() {
                            ui.label(egui::RichText::new(line).size(12.0));
                        }
                    });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(&self.primary_text)
                            .size(26.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
            });

        // Doubles as the idle-monitor tick
        ctx.request_repaint_after(POLL_INTERVAL);
    }
}
