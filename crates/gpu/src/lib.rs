pub mod surface;
pub mod uniforms;

pub use surface::*;
pub use uniforms::*;
