//! End-to-end frame loop tests
//!
//! Builds scenes from configuration and runs the projector over several
//! simulated frames.

use hyperview::config::{AppConfig, ProjectionMode};
use hyperview::scene::Scene;
use hyperview::systems::{build_projector, FrameOutput, FrameRenderer, SimulationSystem};
use hyperview_mesh::Topology;

fn run(config: &AppConfig, frames: u32) -> Vec<FrameOutput> {
    let mut scene = Scene::from_config(&config.scene).unwrap();
    let projector = build_projector(&config.projection).unwrap();
    let mut renderer = FrameRenderer::new(projector, &config.visualizer).with_gizmos(config.debug.gizmos);
    let mut simulation = SimulationSystem::new(&config.run);

    let mut outputs = Vec::new();
    for _ in 0..frames {
        outputs.push(renderer.render_frame(simulation.observer(), &scene));
        simulation.update(&mut scene);
    }
    assert_eq!(simulation.frame(), frames as u64);
    outputs
}

fn assert_well_formed(output: &FrameOutput) {
    for object in &output.meshes {
        let mesh = &object.mesh;
        assert_eq!(mesh.indices.len() % mesh.topology.vertices_per_primitive(), 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }
}

#[test]
fn test_cross_section_default_scene() {
    let config = AppConfig::default();
    for output in run(&config, 30) {
        assert_well_formed(&output);
        assert_eq!(output.stats.objects, 2);
        // The hyperplane passes through both the floor and the spinning tesseract
        assert_eq!(output.meshes.len(), 2);
        for object in &output.meshes {
            assert_eq!(object.mesh.topology, Topology::Triangles);
            assert!(object.mesh.primitive_count() > 0, "{} vanished", object.name);
            for v in &object.mesh.vertices {
                assert!(v.position.iter().chain(&v.normal).all(|c| c.is_finite()));
                let len = v.normal.iter().map(|c| c * c).sum::<f32>().sqrt();
                assert!(len <= 1.0 + 1e-3);
            }
        }
    }
}

#[test]
fn test_frustum_default_scene() {
    let mut config = AppConfig::default();
    config.projection.mode = ProjectionMode::Frustum;
    config.run.observer_position = [0.0, 0.0, 0.0, -6.0];
    config.run.observer_spin = [0.0; 6];

    for output in run(&config, 10) {
        assert_well_formed(&output);
        assert_eq!(output.stats.culled, 0);
        assert_eq!(output.meshes.len(), 2);
        for object in &output.meshes {
            assert!(object.mesh.primitive_count() > 0);
            for v in &object.mesh.vertices {
                assert!(v.position.iter().all(|c| c.abs() <= 1.0 + 1e-4));
            }
        }
        // The floor reaches past the lateral planes and gets clipped
        assert!(output.stats.projection.cut > 0);
    }
}

#[test]
fn test_frames_are_deterministic() {
    let config = AppConfig::default();
    let first: Vec<_> = run(&config, 8).into_iter().map(|o| o.stats).collect();
    let second: Vec<_> = run(&config, 8).into_iter().map(|o| o.stats).collect();
    assert_eq!(first, second);
}

#[test]
fn test_gizmos_follow_config() {
    let mut config = AppConfig::default();
    config.debug.gizmos = true;
    let outputs = run(&config, 2);
    // Slicing hyperplane outline is a cube
    assert!(outputs.iter().all(|o| o.gizmos.len() == 12));
}
