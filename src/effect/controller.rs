// src/effect/controller.rs

use super::{
    animation::AnimationScheduler, config::EffectConfig, debounce::Debounce, images::ImageSet,
};
use crate::math::{
    error::EffectResult,
    geometry::{
        MeshBuilder, ProximityIndex, SpadeTriangulator, TriangleMesh, Triangulator, fit_cover,
    },
    point_distribution::PointSampler,
    types::{Point, Vec2},
};
use bevy::log::{debug, info};
use bevy::prelude::{Event, Resource};
use std::time::Duration;

/// Neue Darstellungsgröße für den Bildausschnitt eines Dreiecks.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ScaleUpdate {
    pub triangle_id: usize,
    pub scale: f32,
    /// `base_size * scale`
    pub size: Vec2,
    /// Mittelpunkt des Viewports, auf den das Bild zentriert wird.
    pub center: Point,
}

/// Steuert den Effekt: hält Netz, Viewport, Bildliste und Animationen und
/// reagiert auf Frame-, Zeiger-, Größen- und Ladeereignisse.
#[derive(Resource)]
pub struct EffectController {
    config: EffectConfig,
    images: ImageSet,
    viewport: Vec2,
    image_size: Option<Vec2>,
    base_size: Vec2,
    mesh: TriangleMesh,
    /// Wird bei jedem Neuaufbau oder Verwerfen des Netzes erhöht.
    generation: u64,
    sampler: PointSampler,
    triangulator: Box<dyn Triangulator>,
    scheduler: AnimationScheduler,
    pointer_debounce: Debounce<Point>,
    rebuild_debounce: Debounce<Vec2>,
    pointer_enabled: bool,
}

impl EffectController {
    pub fn new(config: EffectConfig, images: impl Into<ImageSet>) -> EffectResult<Self> {
        Self::with_triangulator(config, images, Box::new(SpadeTriangulator))
    }

    pub fn with_triangulator(
        config: EffectConfig,
        images: impl Into<ImageSet>,
        triangulator: Box<dyn Triangulator>,
    ) -> EffectResult<Self> {
        config.validate()?;
        let scheduler = AnimationScheduler::new(
            config.num_anim_iterations,
            config.max_scale_range.clone(),
            config.seed.map(|s| s.wrapping_add(1)),
        )?;
        Ok(Self {
            sampler: PointSampler::from_optional_seed(config.seed),
            pointer_debounce: Debounce::new(config.pointer_debounce),
            rebuild_debounce: Debounce::new(config.resize_debounce),
            images: images.into(),
            viewport: Vec2::ZERO,
            image_size: None,
            base_size: Vec2::ZERO,
            mesh: TriangleMesh::empty(),
            generation: 0,
            triangulator,
            scheduler,
            pointer_enabled: true,
            config,
        })
    }

    /// Startet den Effekt und liefert das erste zu ladende Bild.
    pub fn init(&mut self, disable_pointer: bool) -> Option<String> {
        self.pointer_enabled = !disable_pointer;
        self.next_image()
    }

    /// Wechselt zum nächsten Bild. Netz und Animationen werden verworfen,
    /// bis das neue Bild geladen ist.
    pub fn next_image(&mut self) -> Option<String> {
        self.reset();
        self.image_size = None;
        let path = self.images.advance().map(str::to_owned);
        if let Some(path) = &path {
            info!("Loading image {:?}", path);
        }
        path
    }

    /// Bild fertig geladen: Raster an den Viewport anpassen und erstes Netz bauen.
    pub fn on_image_loaded(&mut self, image_size: Vec2, viewport: Vec2) -> EffectResult<()> {
        self.image_size = Some(image_size);
        self.set_viewport(viewport);
        self.rebuild()
    }

    pub fn on_pointer_moved(&mut self, position: Point) {
        if self.pointer_enabled {
            self.pointer_debounce.trigger(position);
        }
    }

    /// Passt das Raster sofort an und plant den Neuaufbau des Netzes.
    /// Ein noch anstehender Neuaufbau wird abgebrochen und der Zustand
    /// zurückgesetzt, bevor der nächste geplant wird.
    pub fn on_resize(&mut self, viewport: Vec2) {
        self.set_viewport(viewport);
        self.rebuild_debounce.cancel();
        self.reset();
        if self.image_size.is_some() {
            self.rebuild_debounce.trigger(viewport);
        }
    }

    /// Frame-Tick: Timer weiterschalten, dann alle Animationen um einen
    /// Schritt fortsetzen.
    pub fn on_frame(&mut self, delta: Duration) -> EffectResult<Vec<ScaleUpdate>> {
        if self.rebuild_debounce.tick(delta).is_some() {
            self.rebuild()?;
        }
        if let Some(pointer) = self.pointer_debounce.tick(delta) {
            self.animate_around(pointer);
        }

        let center = self.center();
        let base_size = self.base_size;
        let updates = self
            .scheduler
            .tick()
            .into_iter()
            .map(|(triangle_id, scale)| ScaleUpdate {
                triangle_id,
                scale,
                size: base_size * scale,
                center,
            })
            .collect();
        Ok(updates)
    }

    /// Nimmt alle Dreiecke in der Box um `pointer` in die Animation auf.
    /// Liefert die Anzahl neu gestarteter Animationen.
    pub fn animate_around(&mut self, pointer: Point) -> usize {
        let hits = ProximityIndex::query_ids(&self.mesh, pointer, self.config.mouse_point_radius);
        let started = hits
            .iter()
            .filter(|&&id| self.scheduler.enroll(id))
            .count();
        debug!(
            "Pointer at ({:.0}, {:.0}): {} triangles near, {} newly animating",
            pointer.x,
            pointer.y,
            hits.len(),
            started
        );
        started
    }

    /// Baut das Netz neu auf: Punkte samplen, triangulieren, Dreiecke bauen.
    /// Der alte Zustand wird vollständig verworfen.
    pub fn rebuild(&mut self) -> EffectResult<()> {
        self.rebuild_debounce.cancel();
        self.reset();

        let points = self.sampler.sample(
            self.viewport.x,
            self.viewport.y,
            self.config.num_random_points,
            self.config.edge_points,
        );
        let triples = self.triangulator.triangulate(&points)?;
        self.mesh = MeshBuilder::build(&points, &triples)?;

        info!(
            "Rebuilt triangle mesh for {:.0}x{:.0}: {} points, {} triangles (generation {})",
            self.viewport.x,
            self.viewport.y,
            points.len(),
            self.mesh.len(),
            self.generation
        );
        Ok(())
    }

    /// Verwirft Netz und alle Animationen.
    fn reset(&mut self) {
        self.mesh = TriangleMesh::empty();
        self.scheduler.clear();
        self.pointer_debounce.cancel();
        self.generation += 1;
    }

    fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport.max(Vec2::ZERO);
        self.base_size = match self.image_size {
            Some(size) => fit_cover(size, self.viewport),
            None => self.viewport,
        };
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn set_mouse_point_radius(&mut self, radius: f32) {
        self.config.mouse_point_radius = radius.max(0.0);
    }

    pub fn set_show_wireframe(&mut self, show: bool) {
        self.config.show_wireframe = show;
    }

    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn center(&self) -> Point {
        Point::from(self.viewport * 0.5)
    }

    pub fn base_size(&self) -> Vec2 {
        self.base_size
    }

    pub fn is_loaded(&self) -> bool {
        self.image_size.is_some()
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn pointer_enabled(&self) -> bool {
        self.pointer_enabled
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn rebuild_pending(&self) -> bool {
        self.rebuild_debounce.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::error::EffectError;
    use crate::math::geometry::IndexTriple;
    use approx::assert_relative_eq;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn loaded_controller() -> EffectController {
        let mut controller =
            EffectController::new(EffectConfig::new().with_seed(99), "image.png").unwrap();
        assert_eq!(controller.init(false).as_deref(), Some("image.png"));
        controller
            .on_image_loaded(Vec2::new(800.0, 600.0), Vec2::new(800.0, 600.0))
            .unwrap();
        controller
    }

    struct BrokenTriangulator;

    impl Triangulator for BrokenTriangulator {
        fn triangulate(&self, points: &[Point]) -> EffectResult<Vec<IndexTriple>> {
            Ok(vec![[0, 1, points.len()]])
        }
    }

    #[test]
    fn test_image_load_builds_first_mesh() {
        let controller = loaded_controller();
        assert!(controller.is_loaded());
        assert!(!controller.mesh().is_empty());
        for triangle in controller.mesh().iter() {
            for v in &triangle.vertices {
                assert!((0.0..=800.0).contains(&v.x) && (0.0..=600.0).contains(&v.y));
            }
        }
    }

    #[test]
    fn test_pointer_move_is_debounced() {
        let mut controller = loaded_controller();
        controller.on_pointer_moved(Point::new(400.0, 300.0));

        controller.on_frame(ms(30)).unwrap();
        assert!(controller.scheduler().is_empty());

        controller.on_frame(ms(30)).unwrap();
        assert!(!controller.scheduler().is_empty());
    }

    #[test]
    fn test_frame_emits_scaled_sizes_centered_on_viewport() {
        let mut controller = loaded_controller();
        assert!(controller.animate_around(Point::new(400.0, 300.0)) > 0);

        let first = controller.on_frame(ms(16)).unwrap();
        assert!(!first.is_empty());
        for update in &first {
            assert_relative_eq!(update.scale, 1.0);
            assert_eq!(update.size, Vec2::new(800.0, 600.0));
            assert_eq!(update.center, Point::new(400.0, 300.0));
        }

        let second = controller.on_frame(ms(16)).unwrap();
        for update in &second {
            assert!(update.scale > 1.0);
            assert_relative_eq!(update.size.x, 800.0 * update.scale);
        }
    }

    #[test]
    fn test_all_animations_finish() {
        let mut controller = loaded_controller();
        controller.animate_around(Point::new(400.0, 300.0));
        for _ in 0..17 {
            controller.on_frame(ms(16)).unwrap();
        }
        assert!(controller.scheduler().is_empty());
        assert!(controller.on_frame(ms(16)).unwrap().is_empty());
    }

    #[test]
    fn test_rebuild_discards_animation_state() {
        let mut controller = loaded_controller();
        controller.animate_around(Point::new(400.0, 300.0));
        assert!(!controller.scheduler().is_empty());
        let generation = controller.generation();

        controller.rebuild().unwrap();
        assert!(controller.scheduler().is_empty());
        assert!(controller.generation() > generation);
    }

    #[test]
    fn test_resize_clears_state_and_rebuilds_after_delay() {
        let mut controller = loaded_controller();
        controller.animate_around(Point::new(400.0, 300.0));

        controller.on_resize(Vec2::new(1000.0, 500.0));
        assert!(controller.mesh().is_empty());
        assert!(controller.scheduler().is_empty());
        assert!(controller.rebuild_pending());

        controller.on_frame(ms(300)).unwrap();
        controller.on_resize(Vec2::new(1200.0, 400.0));
        controller.on_frame(ms(300)).unwrap();
        assert!(controller.mesh().is_empty());

        controller.on_frame(ms(200)).unwrap();
        assert!(!controller.rebuild_pending());
        assert!(!controller.mesh().is_empty());
        for triangle in controller.mesh().iter() {
            for v in &triangle.vertices {
                assert!((0.0..=1200.0).contains(&v.x) && (0.0..=400.0).contains(&v.y));
            }
        }
        // Cover-Fit eines 800x600-Bildes auf 1200x400
        assert_eq!(controller.base_size(), Vec2::new(1200.0, 900.0));
    }

    #[test]
    fn test_resize_before_load_schedules_nothing() {
        let mut controller = EffectController::new(EffectConfig::default(), "a.png").unwrap();
        controller.init(false);
        controller.on_resize(Vec2::new(640.0, 480.0));
        assert!(!controller.rebuild_pending());
    }

    #[test]
    fn test_disabled_pointer_is_ignored() {
        let mut controller = loaded_controller();
        controller.init(true);
        controller
            .on_image_loaded(Vec2::new(800.0, 600.0), Vec2::new(800.0, 600.0))
            .unwrap();
        controller.on_pointer_moved(Point::new(400.0, 300.0));
        controller.on_frame(ms(100)).unwrap();
        assert!(controller.scheduler().is_empty());
    }

    #[test]
    fn test_next_image_cycles_and_resets() {
        let mut controller =
            EffectController::new(EffectConfig::default(), vec!["a.png", "b.png"]).unwrap();
        assert_eq!(controller.init(false).as_deref(), Some("a.png"));
        controller
            .on_image_loaded(Vec2::new(100.0, 100.0), Vec2::new(300.0, 200.0))
            .unwrap();
        assert!(!controller.mesh().is_empty());

        assert_eq!(controller.next_image().as_deref(), Some("b.png"));
        assert!(!controller.is_loaded());
        assert!(controller.mesh().is_empty());
        assert_eq!(controller.next_image().as_deref(), Some("a.png"));
    }

    #[test]
    fn test_no_images_means_nothing_to_load() {
        let mut controller =
            EffectController::new(EffectConfig::default(), Vec::<String>::new()).unwrap();
        assert_eq!(controller.init(false), None);
    }

    #[test]
    fn test_invalid_triangulation_is_surfaced() {
        let mut controller = EffectController::with_triangulator(
            EffectConfig::default(),
            "a.png",
            Box::new(BrokenTriangulator),
        )
        .unwrap();
        controller.init(false);
        let result = controller.on_image_loaded(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(matches!(result, Err(EffectError::InvalidIndex { .. })));
    }

    #[test]
    fn test_odd_iterations_fail_construction() {
        let config = EffectConfig::new().with_anim_iterations(5);
        assert!(EffectController::new(config, "a.png").is_err());
    }
}
