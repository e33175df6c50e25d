pub mod emblem;

pub use emblem::*;
