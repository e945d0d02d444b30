//! Guillotine best-area-fit packing of panels onto sheets.

mod allocator;
mod best_fit;
mod expand;
mod free_space;
mod utilization;

pub use allocator::pack_panels;
pub use best_fit::{find_best_fit, try_fit, Fit, FitCandidate};
pub use expand::expand_panels;
pub use free_space::{FreeRegion, FreeSpace};
pub use utilization::utilization_percent;
