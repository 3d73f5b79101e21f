mod graph;
mod summary;

pub use graph::*;
pub use summary::*;
