//! Main window: "Select Region" button and the shared transparency slider.

use std::collections::HashMap;
use std::time::Instant;

use eframe::egui;
use regionview::model::constants::{
    MAX_TRANSPARENCY, MIN_TRANSPARENCY, SELECT_BUTTON_LABEL, TRANSPARENCY_LABEL,
    TRANSPARENCY_STEP,
};
use regionview::{dispatch_events, AppEvent, AppState, EventBus, Settings, ViewId, XcapCapture};

use super::overlay;
use super::region_window::{self, ViewTexture};

pub struct ScreenCaptureApp {
    state: AppState,
    bus: EventBus,
    capture: XcapCapture,
    textures: HashMap<ViewId, ViewTexture>,
    /// Slider position; pushed to the views through `SetTransparency`.
    slider: f32,
}

impl ScreenCaptureApp {
    pub fn new(settings: Settings) -> Self {
        let state = AppState::new(settings);
        Self {
            slider: state.transparency(),
            state,
            bus: EventBus::new(),
            capture: XcapCapture::new(),
            textures: HashMap::new(),
        }
    }

    fn controls(&mut self, ctx: &egui::Context) {
        let publisher = self.bus.publisher();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if ui.button(SELECT_BUTTON_LABEL).clicked() {
                    publisher.publish(AppEvent::SelectRegion);
                }

                let range = MIN_TRANSPARENCY..=MAX_TRANSPARENCY;
                let slider = egui::Slider::new(&mut self.slider, range)
                    .step_by(TRANSPARENCY_STEP)
                    .text(TRANSPARENCY_LABEL);
                if ui.add(slider).changed() {
                    publisher.publish(AppEvent::SetTransparency(self.slider));
                }

                ui.weak(format!("{} live view(s)", self.state.views().len()));
            });
        });
    }
}

impl eframe::App for ScreenCaptureApp {
    // Transparent so the overlay and region windows can blend with the desktop.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controls(ctx);

        let publisher = self.bus.publisher();
        if self.state.selection().is_active() {
            let settings = self.state.settings().clone();
            overlay::show(ctx, self.state.selection_mut(), &settings, &publisher);
        }

        for (id, e) in self.state.tick_views(&self.capture, Instant::now) {
            log::error!("Capture failed for {}, refresh stopped: {}", id, e);
        }

        for view in self.state.views_mut().iter_mut() {
            region_window::show(ctx, view, &mut self.textures, &publisher);
        }

        if dispatch_events(&self.bus, &mut self.state) > 0 {
            ctx.request_repaint();
        }

        // Textures of closed views go with them.
        let views = self.state.views();
        self.textures.retain(|id, _| views.contains(*id));

        if let Some(wait) = self.state.next_refresh_in(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
