use chrono::Utc;
use log::{info, warn};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Progress log: every entry goes to the `log` facade and, when a file is
/// configured, is appended there with a UTC timestamp.
#[derive(Debug, Clone, Default)]
pub struct RunLog {
    path: Option<PathBuf>,
}

impl RunLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn entry(&self, text: &str) {
        info!("{}", text);
        if let Some(path) = &self.path {
            if let Err(e) = append_entry(path, text) {
                warn!("could not write to {}: {}", path.display(), e);
            }
        }
    }
}

fn append_entry(path: &Path, text: &str) -> io::Result<()> {
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.fZ");
    let log_entry = format!("{}::{}\n", timestamp, text);

    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(log_entry.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_timestamped_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let run_log = RunLog::new(Some(path.clone()));

        run_log.entry("Launching browser");
        run_log.entry("Done");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Z::Launching browser"));
        assert!(lines[1].ends_with("::Done"));
    }

    #[test]
    fn unwritable_log_file_does_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("run.log");
        let run_log = RunLog::new(Some(path.clone()));

        run_log.entry("Launching browser");

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
