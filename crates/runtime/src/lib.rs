pub mod debounce;
pub mod frame;
pub mod once;

pub use debounce::*;
pub use frame::*;
pub use once::*;
