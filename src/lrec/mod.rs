mod read_op;
pub mod record;
mod render;
mod reorder_op;
mod write_op;

pub use record::{Record, ReleaseStats, release};
pub use render::{print, render};
