use crate::errors::{AppError, AppResult};
use crate::models::WorkingHours;
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "ROUTESLOT_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_day_start")]
    pub working_day_start: String,
    #[serde(default = "default_day_end")]
    pub working_day_end: String,
    #[serde(default = "default_appointment_minutes")]
    pub appointment_minutes: i64,
    #[serde(default = "default_speed")]
    pub average_speed_kmh: f64,
    #[serde(default = "default_rounding")]
    pub travel_rounding_minutes: i64,
    #[serde(default = "default_calendar")]
    pub default_calendar: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_day_start() -> String {
    "08:00".to_string()
}
fn default_day_end() -> String {
    "18:00".to_string()
}
fn default_appointment_minutes() -> i64 {
    60
}
fn default_speed() -> f64 {
    50.0
}
fn default_rounding() -> i64 {
    30
}
fn default_calendar() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            working_day_start: default_day_start(),
            working_day_end: default_day_end(),
            appointment_minutes: default_appointment_minutes(),
            average_speed_kmh: default_speed(),
            travel_rounding_minutes: default_rounding(),
            default_calendar: default_calendar(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$ROUTESLOT_HOME` or `~/.routeslot`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".routeslot")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("routeslot.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("routeslot.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Working-hours window parsed from `working_day_start` / `working_day_end`.
    pub fn working_hours(&self) -> AppResult<WorkingHours> {
        let start = parse_time(&self.working_day_start).ok_or_else(|| {
            AppError::Config(format!(
                "working_day_start '{}' is not HH:MM",
                self.working_day_start
            ))
        })?;
        let end = parse_time(&self.working_day_end).ok_or_else(|| {
            AppError::Config(format!(
                "working_day_end '{}' is not HH:MM",
                self.working_day_end
            ))
        })?;
        WorkingHours::new(start, end)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
