use foundation::math::{MAT4_IDENTITY, Mat4};
use scene::Viewer;

/// Per-frame uniform block shared by the emblem shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: Mat4,
    pub model: Mat4,
    /// Linear RGB already multiplied by intensity; `w` unused.
    pub ambient: [f32; 4],
    pub accent_color: [f32; 4],
    /// `xyz` = light position; `w` = 1 for a point light, 0 for directional.
    pub accent_position: [f32; 4],
}

impl Globals {
    pub fn from_viewer(viewer: &Viewer) -> Self {
        let graph = viewer.graph();
        let model = graph
            .emblem()
            .map(|emblem| emblem.transform.matrix())
            .unwrap_or(MAT4_IDENTITY);
        let [ar, ag, ab] = graph.ambient.radiance();
        let [cr, cg, cb] = graph.accent.radiance();
        let [px, py, pz] = graph.accent.position().to_f32();
        let kind = if graph.accent.is_point() { 1.0 } else { 0.0 };

        Self {
            view_proj: viewer.camera().view_proj(),
            model,
            ambient: [ar, ag, ab, 0.0],
            accent_color: [cr, cg, cb, 0.0],
            accent_position: [px, py, pz, kind],
        }
    }
}
