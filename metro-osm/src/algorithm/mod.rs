pub mod contraction;
pub mod topology;
