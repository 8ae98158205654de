pub mod core;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::cmds::report::{ReportOptions, density, execute_report, render, write_report};
pub use core::main_shared::run_main;
pub use core::types::{AppError, AppResult, Color, ColorCurve, CurveBucket, StatisticsDocument};
