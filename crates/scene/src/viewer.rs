use std::fmt::Display;

use runtime::Frame;

use crate::camera::PerspectiveCamera;
use crate::components::Mesh;
use crate::config::ViewerConfig;
use crate::graph::{EmblemNode, SceneGraph};

/// Text shown in place of the loader when the emblem cannot be loaded.
pub const FALLBACK_MESSAGE: &str = "Heritage view unavailable";

const PITCH_GAIN: f64 = 0.3;
const ROLL_GAIN: f64 = 0.2;

/// The page element that announces the model is loading.
pub trait LoadIndicator {
    fn hide(&self);
    fn show_fallback(&self, message: &str);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// Pointer-driven tilt of the emblem, in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tilt {
    /// Rotation about X, from the vertical pointer offset.
    pub pitch: f64,
    /// Rotation about Z, from the horizontal pointer offset.
    pub roll: f64,
}

/// Maps a pointer position to a tilt.
///
/// Offsets are normalized to `[-0.5, 0.5]` around the viewport centre, so a
/// pointer inside the viewport yields `|pitch| <= 0.15` and `|roll| <= 0.1`.
/// Returns `None` for a zero-sized viewport.
pub fn pointer_tilt(x: f64, y: f64, viewport_width: f64, viewport_height: f64) -> Option<Tilt> {
    if viewport_width <= 0.0 || viewport_height <= 0.0 {
        return None;
    }
    let nx = x / viewport_width - 0.5;
    let ny = y / viewport_height - 0.5;
    Some(Tilt {
        pitch: ny * PITCH_GAIN,
        roll: nx * ROLL_GAIN,
    })
}

/// Viewer state: scene, camera and animation, independent of any surface.
#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    camera: PerspectiveCamera,
    graph: SceneGraph,
    frame: Frame,
    status: LoadStatus,
}

impl Viewer {
    pub fn new(config: ViewerConfig, width: f64, height: f64) -> Self {
        let camera = PerspectiveCamera::new(&config.camera, width, height);
        let graph = SceneGraph::new(config.ambient, config.accent);
        Self {
            config,
            camera,
            graph,
            frame: Frame::default(),
            status: LoadStatus::Loading,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn emblem(&self) -> Option<&EmblemNode> {
        self.graph.emblem()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Advances one display frame. The emblem, if present, yaws by
    /// `rotation_speed`; an absent emblem is not an error.
    pub fn tick(&mut self) -> Frame {
        let speed = self.config.rotation_speed;
        if let Some(emblem) = self.graph.emblem_mut() {
            emblem.transform.rotation.y += speed;
        }
        let current = self.frame;
        self.frame = current.next();
        current
    }

    /// Overwrites pitch and roll from the pointer position. Yaw is left to
    /// the render loop.
    pub fn pointer_moved(&mut self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
        let Some(emblem) = self.graph.emblem_mut() else {
            return;
        };
        let Some(tilt) = pointer_tilt(x, y, viewport_width, viewport_height) else {
            return;
        };
        emblem.transform.rotation.x = tilt.pitch;
        emblem.transform.rotation.z = tilt.roll;
    }

    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.camera.set_viewport(width, height)
    }

    /// Applies the outcome of the asynchronous model load.
    pub fn finish_load<E: Display>(
        &mut self,
        result: Result<Mesh, E>,
        indicator: &impl LoadIndicator,
    ) -> LoadStatus {
        match result {
            Ok(mesh) => {
                log::info!(
                    "emblem loaded from {}: {} vertices, {} triangles",
                    self.config.model_path,
                    mesh.vertex_count(),
                    mesh.triangle_count()
                );
                self.graph.attach_emblem(mesh, self.config.scale);
                self.status = LoadStatus::Ready;
                indicator.hide();
            }
            Err(err) => {
                log::error!("error loading 3D model {}: {err}", self.config.model_path);
                self.status = LoadStatus::Failed;
                indicator.show_fallback(FALLBACK_MESSAGE);
            }
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingIndicator {
        calls: RefCell<Vec<String>>,
    }

    impl LoadIndicator for RecordingIndicator {
        fn hide(&self) {
            self.calls.borrow_mut().push("hide".to_string());
        }

        fn show_fallback(&self, message: &str) {
            self.calls.borrow_mut().push(format!("fallback:{message}"));
        }
    }

    fn triangle() -> Mesh {
        Mesh {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]; 3],
            indices: vec![0, 1, 2],
        }
    }

    fn loaded_viewer() -> Viewer {
        let mut viewer = Viewer::new(ViewerConfig::heritage(), 800.0, 600.0);
        viewer.finish_load(Ok::<_, String>(triangle()), &RecordingIndicator::default());
        viewer
    }

    #[test]
    fn aspect_follows_init_and_resize() {
        let mut viewer = Viewer::new(ViewerConfig::default(), 1024.0, 512.0);
        assert_eq!(viewer.camera().aspect, 2.0);
        for (w, h) in [(300.0, 150.0), (1.0, 1000.0), (1920.0, 1080.0)] {
            assert!(viewer.resize(w, h));
            assert_eq!(viewer.camera().aspect, w / h);
        }
    }

    #[test]
    fn successful_load_attaches_scaled_emblem_and_hides_loader() {
        let indicator = RecordingIndicator::default();
        let mut viewer = Viewer::new(ViewerConfig::showcase(), 800.0, 600.0);
        let status = viewer.finish_load(Ok::<_, String>(triangle()), &indicator);
        assert_eq!(status, LoadStatus::Ready);
        assert_eq!(viewer.emblem().map(|e| e.transform.scale), Some(2.0));
        assert_eq!(*indicator.calls.borrow(), vec!["hide".to_string()]);
    }

    #[test]
    fn failed_load_shows_fallback_and_loop_keeps_running() {
        let indicator = RecordingIndicator::default();
        let mut viewer = Viewer::new(ViewerConfig::heritage(), 800.0, 600.0);
        let status = viewer.finish_load(Err::<Mesh, _>("404 Not Found"), &indicator);
        assert_eq!(status, LoadStatus::Failed);
        assert_eq!(
            *indicator.calls.borrow(),
            vec![format!("fallback:{FALLBACK_MESSAGE}")]
        );

        for _ in 0..1000 {
            viewer.tick();
            viewer.pointer_moved(10.0, 10.0, 100.0, 100.0);
        }
        assert!(viewer.emblem().is_none());
        assert_eq!(viewer.frame().index, 1000);
    }

    #[test]
    fn tick_yaws_by_rotation_speed() {
        let mut viewer = loaded_viewer();
        let first = viewer.tick();
        assert_eq!(first.index, 0);
        viewer.tick();
        let yaw = viewer.emblem().map(|e| e.transform.rotation.y).unwrap_or_default();
        assert!((yaw - 0.008).abs() < 1e-12);
    }

    #[test]
    fn tick_without_emblem_only_advances_frame() {
        let mut viewer = Viewer::new(ViewerConfig::default(), 800.0, 600.0);
        viewer.tick();
        assert_eq!(viewer.status(), LoadStatus::Loading);
        assert_eq!(viewer.frame().index, 1);
    }

    #[test]
    fn pointer_overwrites_pitch_and_roll() {
        let mut viewer = loaded_viewer();
        viewer.pointer_moved(0.0, 0.0, 200.0, 100.0);
        viewer.pointer_moved(200.0, 100.0, 200.0, 100.0);
        let rotation = viewer.emblem().map(|e| e.transform.rotation).expect("emblem");
        assert!((rotation.x - 0.15).abs() < 1e-12);
        assert!((rotation.z - 0.1).abs() < 1e-12);
        assert_eq!(rotation.y, 0.0);
    }

    #[test]
    fn tilt_stays_within_bounds_inside_viewport() {
        let (w, h) = (1280.0, 720.0);
        for xi in 0..=32 {
            for yi in 0..=32 {
                let x = w * xi as f64 / 32.0;
                let y = h * yi as f64 / 32.0;
                let tilt = pointer_tilt(x, y, w, h).expect("tilt");
                assert!((-0.15..=0.15).contains(&tilt.pitch), "pitch {}", tilt.pitch);
                assert!((-0.1..=0.1).contains(&tilt.roll), "roll {}", tilt.roll);
            }
        }
        assert_eq!(
            pointer_tilt(640.0, 360.0, w, h),
            Some(Tilt {
                pitch: 0.0,
                roll: 0.0
            })
        );
        assert_eq!(pointer_tilt(1.0, 1.0, 0.0, 720.0), None);
    }
}
