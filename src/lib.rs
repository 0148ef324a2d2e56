pub mod cli;
pub mod dataset;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
