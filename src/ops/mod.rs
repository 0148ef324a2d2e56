pub mod group;
pub mod reorder;
