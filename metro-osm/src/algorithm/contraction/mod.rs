mod contraction_engine;
mod id_remap;
mod od_list;
pub mod segment_length;

pub use contraction_engine::ContractionEngine;
pub use id_remap::IdRemap;
pub use od_list::OdList;
