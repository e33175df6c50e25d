pub mod color;
pub mod mat4;
pub mod vec;

pub use color::*;
pub use mat4::*;
pub use vec::*;
