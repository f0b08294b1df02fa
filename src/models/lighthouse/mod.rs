pub mod category;
pub mod report;

pub use category::{Categories, Category};
pub use report::LighthouseReport;
