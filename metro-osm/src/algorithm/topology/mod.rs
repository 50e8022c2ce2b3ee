mod appearance_count;
mod topology_scan;

pub use appearance_count::{AppearanceCount, AppearanceCounter};
pub use topology_scan::TopologyScan;
