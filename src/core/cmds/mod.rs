pub mod report;

pub use report::execute_report;
