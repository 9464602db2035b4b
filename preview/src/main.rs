//! Desktop preview app for myrtio-keylight profiles
//!
//! Renders the key matrix in a window. Clicking a key feeds a key press into
//! the lighting engine the same way a matrix scanner would.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_keylight::{
    FrameScheduler, Instant, KeyChannel, KeyPress, KeySender, Lighting, LightingConfig,
    OutputDriver, ProfileId, Rgb,
    geometry::{NUM_COLUMNS, NUM_KEYS, NUM_ROWS},
};

/// Size of each key rectangle in pixels
const KEY_SIZE: f32 = 40.0;

/// Gap between keys
const KEY_GAP: f32 = 4.0;

/// Key channel size
const KEY_CHANNEL_SIZE: usize = 16;

/// Frames rendered at most per repaint when catching up
const MAX_FRAMES_PER_REPAINT: usize = 4;

/// Static key channel between the UI and the lighting engine
static KEYS_CHANNEL: KeyChannel<KEY_CHANNEL_SIZE> = KeyChannel::<KEY_CHANNEL_SIZE>::new();

/// Output driver keeping the last written frame for painting
struct PreviewOutput {
    leds: [Rgb; NUM_KEYS],
}

impl OutputDriver for PreviewOutput {
    fn write(&mut self, colors: &[Rgb]) {
        for (led, color) in self.leds.iter_mut().zip(colors) {
            *led = *color;
        }
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_title("Keylight Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-keylight-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler: FrameScheduler<'static, PreviewOutput, KEY_CHANNEL_SIZE>,
    keys: KeySender<'static, KEY_CHANNEL_SIZE>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Deadline of the next frame in synthetic time
    next_frame_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Naive dimming level (0-255)
    dim: u8,
    /// Key presses rejected because the channel was full
    dropped_presses: usize,
}

impl PreviewApp {
    fn new() -> Self {
        let config = LightingConfig::default();
        let lighting = Lighting::new(KEYS_CHANNEL.receiver(), &config);
        let output = PreviewOutput {
            leds: [Rgb::default(); NUM_KEYS],
        };

        Self {
            scheduler: FrameScheduler::new(lighting, output),
            keys: KEYS_CHANNEL.sender(),
            t_ms: 0,
            next_frame_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            dim: config.dim,
            dropped_presses: 0,
        }
    }

    fn send_key_press(&mut self, row: usize, col: usize) {
        let (Ok(row), Ok(col)) = (u8::try_from(row), u8::try_from(col)) else {
            return;
        };
        let Some(press) = KeyPress::new(row, col) else {
            return;
        };
        if self.keys.try_send(press).is_err() {
            self.dropped_presses += 1;
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Render every frame that is due in synthetic time
    fn render_due_frames(&mut self) {
        for _ in 0..MAX_FRAMES_PER_REPAINT {
            if self.t_ms < self.next_frame_ms {
                break;
            }
            let result = self.scheduler.tick(Instant::from_millis(self.t_ms));
            self.next_frame_ms = result.next_deadline.as_millis();
        }
    }

    /// Render a single frame while paused
    fn step(&mut self) {
        let result = self.scheduler.tick(Instant::from_millis(self.t_ms));
        self.t_ms = result.next_deadline.as_millis();
        self.next_frame_ms = self.t_ms;
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.render_due_frames();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                        if ui
                            .add_enabled(!self.playing, egui::Button::new("⏭ Step"))
                            .clicked()
                        {
                            self.step();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <ProfileControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Profile:");
                        let current = self.scheduler.lighting().profile_id();
                        let mut selected = current;
                        egui::ComboBox::from_id_salt("profile_selector")
                            .selected_text(current.as_str())
                            .show_ui(ui, |ui| {
                                for id in ProfileId::ALL {
                                    ui.selectable_value(&mut selected, id, id.as_str());
                                }
                            });
                        if selected != current {
                            self.scheduler.lighting_mut().switch_profile(selected);
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Dim:");
                        let old_dim = self.dim;
                        ui.add(egui::Slider::new(&mut self.dim, 0u8..=255u8));
                        if self.dim != old_dim {
                            self.scheduler.lighting_mut().set_dim(self.dim);
                        }
                    });

                    ui.add_space(4.0);

                    let reactive = self.scheduler.lighting().profile().is_reactive();
                    ui.label(if reactive {
                        "Click keys to type"
                    } else {
                        "Key presses are ignored"
                    });
                    if self.dropped_presses > 0 {
                        ui.label(format!("Dropped presses: {}", self.dropped_presses));
                    }
                });
                // </ProfileControls>
            });

            ui.add_space(16.0);

            // === Key Matrix ===
            let key_pitch = KEY_SIZE + KEY_GAP;
            #[allow(clippy::cast_precision_loss)]
            let size = egui::vec2(NUM_COLUMNS as f32 * key_pitch, NUM_ROWS as f32 * key_pitch);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
            let origin = response.rect.min;

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let (row, col) = (
                        (offset.y / key_pitch).floor().max(0.0) as usize,
                        (offset.x / key_pitch).floor().max(0.0) as usize,
                    );
                    self.send_key_press(row, col);
                }
            }

            let leds = &self.scheduler.output().leds;
            #[allow(clippy::cast_precision_loss)]
            for row in 0..NUM_ROWS {
                for col in 0..NUM_COLUMNS {
                    let pixel = leds[row * NUM_COLUMNS + col];
                    let x = origin.x + col as f32 * key_pitch;
                    let y = origin.y + row as f32 * key_pitch;

                    let rect = egui::Rect::from_min_size(
                        egui::pos2(x, y),
                        egui::vec2(KEY_SIZE, KEY_SIZE),
                    );
                    let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                    painter.rect_filled(rect, 4.0, color);
                }
            }
        });
    }
}
