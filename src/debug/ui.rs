// ./src/debug/ui.rs
use crate::effect::{EffectController, NextImageRequested, RebuildRequested};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Slider, Window},
};

pub fn effect_control_ui_system(
    mut contexts: EguiContexts,
    mut controller: ResMut<EffectController>,
    mut next_image: EventWriter<NextImageRequested>,
    mut rebuild: EventWriter<RebuildRequested>,
) {
    Window::new("Effektsteuerung")
        .default_width(280.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Dreiecksnetz");
            ui.label(format!(
                "Viewport: {:.0} x {:.0}",
                controller.viewport().x,
                controller.viewport().y
            ));
            ui.label(format!("Dreiecke: {}", controller.mesh().len()));
            ui.label(format!(
                "Animiert: {} (je {} Frames)",
                controller.scheduler().len(),
                controller.scheduler().num_iterations()
            ));
            if controller.rebuild_pending() {
                ui.label("Neuaufbau geplant …");
            }

            ui.separator();
            ui.heading("Bild");
            let images = controller.images();
            ui.label(format!(
                "{} ({}/{})",
                images.current().unwrap_or("–"),
                images.current_index().map_or(0, |i| i + 1),
                images.len()
            ));
            if !controller.is_loaded() {
                ui.label("wird geladen …");
            }

            ui.separator();
            ui.collapsing("Parameter", |ui| {
                let mut radius = controller.config().mouse_point_radius;
                if ui
                    .add(Slider::new(&mut radius, 0.0..=300.0).text("Zeiger-Radius (px)"))
                    .changed()
                {
                    controller.set_mouse_point_radius(radius);
                }

                let mut wireframe = controller.config().show_wireframe;
                if ui.checkbox(&mut wireframe, "Dreieckskanten zeigen").changed() {
                    controller.set_show_wireframe(wireframe);
                }
            });

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(controller.is_loaded(), egui::Button::new("Mesh neu erzeugen"))
                    .clicked()
                {
                    rebuild.send(RebuildRequested);
                }
                if ui
                    .add_enabled(controller.images().len() > 1, egui::Button::new("Nächstes Bild"))
                    .clicked()
                {
                    next_image.send(NextImageRequested);
                }
            });
        });
}
