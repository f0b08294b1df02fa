pub mod file_utils;
pub mod log_utils;
pub mod url_utils;

pub use file_utils::{sanitize_filename, save_lighthouse_output, save_report};
pub use log_utils::RunLog;
pub use url_utils::{debugging_port, validate_url};
