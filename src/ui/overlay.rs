//! Full-screen selection overlay.
//!
//! Shown while the selection controller is active. Pointer positions are
//! overlay-local; they are translated to screen coordinates before they
//! reach the controller.

use eframe::egui;
use regionview::alpha_to_u8;
use regionview::model::constants::OUTLINE_COLOR;
use regionview::model::{Point, SelectionController, SelectionOutcome};
use regionview::{AppEvent, EventPublisher, Settings};

fn overlay_viewport_id() -> egui::ViewportId {
    egui::ViewportId::from_hash_of("selection-overlay")
}

pub fn show(
    ctx: &egui::Context,
    selection: &mut SelectionController,
    settings: &Settings,
    publisher: &EventPublisher,
) {
    let builder = egui::ViewportBuilder::default()
        .with_title("Select Region")
        .with_fullscreen(true)
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_taskbar(false);

    ctx.show_viewport_immediate(overlay_viewport_id(), builder, |ctx, _class| {
        ctx.set_cursor_icon(egui::CursorIcon::Crosshair);

        let (origin, pressed, down, released, pointer, escape, close) = ctx.input(|i| {
            (
                i.viewport()
                    .outer_rect
                    .map(|r| r.min)
                    .unwrap_or(egui::Pos2::ZERO),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
                i.key_pressed(egui::Key::Escape),
                i.viewport().close_requested(),
            )
        });
        let to_screen = |p: egui::Pos2| Point::from_f32(origin.x + p.x, origin.y + p.y);
        let to_local = |p: Point| egui::pos2(p.x as f32 - origin.x, p.y as f32 - origin.y);

        if escape || close {
            publisher.publish(AppEvent::SelectionCancelled);
            return;
        }

        if pressed {
            if let Some(p) = pointer {
                selection.press(to_screen(p));
            }
        } else if down {
            if let Some(p) = pointer {
                selection.drag(to_screen(p));
            }
        }

        if released {
            let end = pointer
                .map(to_screen)
                .or_else(|| selection.outline().map(|(_, current)| current));
            let outcome = match end {
                Some(p) => selection.release(p),
                None => {
                    selection.cancel();
                    SelectionOutcome::Discarded
                }
            };
            match outcome {
                SelectionOutcome::Committed(region) => {
                    publisher.publish(AppEvent::CreateRegionView(region));
                }
                SelectionOutcome::Discarded => log::debug!("Zero-area selection discarded"),
            }
            return;
        }

        let shade = egui::Color32::from_black_alpha(alpha_to_u8(settings.overlay_opacity));
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(shade))
            .show(ctx, |ui| {
                if let Some((start, current)) = selection.outline() {
                    let (r, g, b) = OUTLINE_COLOR;
                    ui.painter().rect_stroke(
                        egui::Rect::from_two_pos(to_local(start), to_local(current)),
                        0.0,
                        egui::Stroke::new(settings.outline_width, egui::Color32::from_rgb(r, g, b)),
                        egui::StrokeKind::Middle,
                    );
                }
            });
    });
}
