use crate::components::{Mesh, Transform};
use crate::light::{AccentLight, AmbientLight};

/// The loaded emblem: its geometry and the transform animated every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EmblemNode {
    pub mesh: Mesh,
    pub transform: Transform,
}

/// Scene root: two lights and, once loaded, the emblem.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    pub ambient: AmbientLight,
    pub accent: AccentLight,
    emblem: Option<EmblemNode>,
}

impl SceneGraph {
    pub fn new(ambient: AmbientLight, accent: AccentLight) -> Self {
        Self {
            ambient,
            accent,
            emblem: None,
        }
    }

    pub fn attach_emblem(&mut self, mesh: Mesh, scale: f64) -> &mut EmblemNode {
        self.emblem.insert(EmblemNode {
            mesh,
            transform: Transform::scaled(scale),
        })
    }

    pub fn emblem(&self) -> Option<&EmblemNode> {
        self.emblem.as_ref()
    }

    pub fn emblem_mut(&mut self) -> Option<&mut EmblemNode> {
        self.emblem.as_mut()
    }
}
