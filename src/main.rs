//! Hyperview - 4D to 3D projection engine
//!
//! Runs the configured scene headlessly for a fixed number of frames and
//! reports what each projector produced.

use hyperview::config::AppConfig;
use hyperview::scene::Scene;
use hyperview::systems::{build_projector, FrameRenderer, FrameStats, SimulationSystem};

fn main() {
    // Load configuration before logging so the configured level applies
    let config = AppConfig::load();
    let level = match &config {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => "info".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting Hyperview");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut scene = match Scene::from_config(&config.scene) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Loaded scene with {} objects", scene.len());

    let projector = match build_projector(&config.projection) {
        Ok(projector) => projector,
        Err(e) => {
            log::error!("Invalid projection settings: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Projection mode: {:?}", config.projection.mode);

    let mut renderer = FrameRenderer::new(projector, &config.visualizer).with_gizmos(config.debug.gizmos);
    let mut simulation = SimulationSystem::new(&config.run);

    let mut totals = FrameStats::default();
    let mut peak_primitives = 0;
    for _ in 0..config.run.frames {
        let output = renderer.render_frame(simulation.observer(), &scene);
        let stats = output.stats;

        if !output.gizmos.is_empty() {
            log::trace!("Frame {}: {} gizmo lines", simulation.frame(), output.gizmos.len());
        }
        log::debug!(
            "Frame {} (t = {:.3}s): {} meshes, {} primitives",
            simulation.frame(),
            simulation.elapsed(),
            output.meshes.len(),
            stats.primitives
        );

        totals.objects += stats.objects;
        totals.culled += stats.culled;
        totals.skipped += stats.skipped;
        totals.projection.accumulate(&stats.projection);
        totals.primitives += stats.primitives;
        peak_primitives = peak_primitives.max(stats.primitives);

        simulation.update(&mut scene);
    }

    log::info!(
        "Rendered {} frames ({:.2}s simulated): {} primitives total, {} peak per frame",
        simulation.frame(),
        simulation.elapsed(),
        totals.primitives,
        peak_primitives
    );
    log::info!(
        "Simplices: {} projected, {} rejected, {} cut, {} emitted; objects culled {} times, skipped {} times",
        totals.projection.simplices,
        totals.projection.rejected,
        totals.projection.cut,
        totals.projection.emitted,
        totals.culled,
        totals.skipped
    );
}
