pub mod highway;
pub mod road_category;
