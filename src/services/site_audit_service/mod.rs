// src/services/site_audit_service/mod.rs

pub mod audit;
pub mod compute;
pub mod inspector;
pub mod lighthouse;

pub use audit::run_audit;
pub use inspector::{ChromeInspector, Inspection, PageInspector};
pub use lighthouse::LighthouseOptions;
