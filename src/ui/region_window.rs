//! Floating region windows.
//!
//! Each live view gets an undecorated, always-on-top immediate viewport
//! sized to its source region. The window position comes from the view
//! model every frame, so dragging only has to update the model.

use std::collections::HashMap;

use eframe::egui;
use regionview::alpha_to_u8;
use regionview::model::constants::REGION_WINDOW_TITLE;
use regionview::model::Point;
use regionview::{AppEvent, EventPublisher, RegionView, ViewId};

/// GPU copy of a view's latest frame.
pub struct ViewTexture {
    handle: egui::TextureHandle,
    generation: u64,
}

fn viewport_id(id: ViewId) -> egui::ViewportId {
    egui::ViewportId::from_hash_of(("region-view", id.0))
}

/// Upload the view's frame if it changed since the last upload. The
/// texture is overwritten in place; nothing of the old frame survives.
fn sync_texture(
    ctx: &egui::Context,
    view: &RegionView,
    textures: &mut HashMap<ViewId, ViewTexture>,
) {
    let Some(frame) = view.frame() else {
        return;
    };
    let generation = view.frame_generation();
    let image = || egui::ColorImage::from_rgba_unmultiplied(frame.size(), &frame.rgba);

    match textures.get_mut(&view.id()) {
        Some(texture) if texture.generation == generation => {}
        Some(texture) => {
            texture.handle.set(image(), egui::TextureOptions::LINEAR);
            texture.generation = generation;
        }
        None => {
            let handle =
                ctx.load_texture(view.id().to_string(), image(), egui::TextureOptions::LINEAR);
            textures.insert(view.id(), ViewTexture { handle, generation });
        }
    }
}

pub fn show(
    ctx: &egui::Context,
    view: &mut RegionView,
    textures: &mut HashMap<ViewId, ViewTexture>,
    publisher: &EventPublisher,
) {
    let (width, height) = view.window_size();
    let position = view.position();
    let builder = egui::ViewportBuilder::default()
        .with_title(REGION_WINDOW_TITLE)
        .with_inner_size([width as f32, height as f32])
        .with_position([position.x as f32, position.y as f32])
        .with_decorations(false)
        .with_resizable(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_taskbar(false);

    ctx.show_viewport_immediate(viewport_id(view.id()), builder, |ctx, _class| {
        sync_texture(ctx, view, textures);

        let (window_origin, pressed, down, released, right_click, pointer, close) =
            ctx.input(|i| {
                (
                    i.viewport().inner_rect.map(|r| r.min),
                    i.pointer.primary_pressed(),
                    i.pointer.primary_down(),
                    i.pointer.primary_released(),
                    i.pointer.button_pressed(egui::PointerButton::Secondary),
                    i.pointer.latest_pos(),
                    i.viewport().close_requested(),
                )
            });

        if right_click || close {
            publisher.publish(AppEvent::CloseView(view.id()));
            return;
        }

        if let Some(local) = pointer {
            if pressed {
                view.begin_drag(Point::from_f32(local.x, local.y));
            } else if down {
                // Prefer where the window really is; the model position may
                // not have been applied by the window system yet.
                let origin = window_origin
                    .unwrap_or_else(|| egui::pos2(position.x as f32, position.y as f32));
                view.drag_to(Point::from_f32(origin.x + local.x, origin.y + local.y));
            }
        }
        if released {
            view.end_drag();
        }

        let tint = egui::Color32::from_white_alpha(alpha_to_u8(view.transparency()));
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if let Some(texture) = textures.get(&view.id()) {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    ui.painter().image(texture.handle.id(), ui.max_rect(), uv, tint);
                }
            });
    });
}
