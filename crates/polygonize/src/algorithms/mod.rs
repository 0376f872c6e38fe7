pub mod boundary;
pub mod erasing;
pub mod extraction;
pub mod simplification;
pub mod render;

pub use boundary::{Direction, next_pixel, trace};
pub use erasing::{PendingStack, erase, erase_with};
pub use extraction::{Extraction, extract_all, extract_next, first_true_pixel};
pub use simplification::{flatten, simplify};
pub use render::{draw_outlines, render};
