mod comment;
mod task;

pub use comment::*;
pub use task::*;
