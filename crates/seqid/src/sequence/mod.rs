mod engine;
mod start;

pub use engine::*;
pub use start::*;
