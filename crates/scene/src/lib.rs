pub mod camera;
pub mod components;
pub mod config;
pub mod graph;
pub mod light;
pub mod viewer;

pub use camera::*;
pub use config::*;
pub use graph::*;
pub use light::*;
pub use viewer::*;
