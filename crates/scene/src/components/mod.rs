pub mod mesh;
pub mod transform;

pub use mesh::*;
pub use transform::*;
