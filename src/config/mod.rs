use crate::errors::{AppError, AppResult};
use crate::models::RecordKind;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod logging;
pub mod report;
pub mod secrets;

pub use report::ReportConfig;
pub use secrets::RemoteConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_attendance_file")]
    pub attendance_file: String,
    #[serde(default = "default_diary_file")]
    pub diary_file: String,
    #[serde(default = "default_attendance_table")]
    pub attendance_table: String,
    #[serde(default = "default_diary_table")]
    pub diary_table: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("data")
        .to_string_lossy()
        .to_string()
}
fn default_attendance_file() -> String {
    "frequencia.csv".to_string()
}
fn default_diary_file() -> String {
    "diario.csv".to_string()
}
fn default_attendance_table() -> String {
    "frequencia".to_string()
}
fn default_diary_table() -> String {
    "diario".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            attendance_file: default_attendance_file(),
            diary_file: default_diary_file(),
            attendance_table: default_attendance_table(),
            diary_table: default_diary_table(),
            log_level: default_log_level(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rinternlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rinternlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rinternlog.conf")
    }

    /// Deployment-provided secrets (remote store endpoint and key)
    pub fn secrets_file() -> PathBuf {
        Self::config_dir().join("secrets.yml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Write the configuration file (creating the config directory)
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(self)?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }

    /// Directory holding the local CSV mirrors
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn mirror_path(&self, kind: RecordKind) -> PathBuf {
        let file = match kind {
            RecordKind::Attendance => &self.attendance_file,
            RecordKind::Diary => &self.diary_file,
        };
        self.data_path().join(file)
    }

    pub fn table(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Attendance => &self.attendance_table,
            RecordKind::Diary => &self.diary_table,
        }
    }

    /// Sanity checks run before any store access.
    pub fn validate(&self) -> AppResult<()> {
        if self.attendance_file == self.diary_file {
            return Err(AppError::Config(format!(
                "attendance_file and diary_file must differ (both '{}')",
                self.attendance_file
            )));
        }
        if self.report.letterhead.len() > report::MAX_LETTERHEAD_LINES {
            return Err(AppError::Config(format!(
                "report.letterhead has {} lines, at most {} fit the attendance sheet",
                self.report.letterhead.len(),
                report::MAX_LETTERHEAD_LINES
            )));
        }
        if self.report.truncate_activity == 0 {
            return Err(AppError::Config(
                "report.truncate_activity must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
