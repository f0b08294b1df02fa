pub mod site_audit_service;

pub use site_audit_service::{run_audit, ChromeInspector, LighthouseOptions};
