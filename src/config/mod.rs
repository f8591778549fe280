use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the two CSV datasets.
    pub data_dir: String,
    /// Default file name for the XLSX export.
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_export_file() -> String {
    "laporan_progress.xlsx".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_path().to_string_lossy().to_string(),
            export_file: default_export_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("proglogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".proglogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("proglogger.conf")
    }

    /// Default location of the CSV data directory
    pub fn data_dir_path() -> PathBuf {
        Self::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and the CSV data directory
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // data dir: user provided or the config dir itself
        let data_dir = if let Some(d) = custom_dir {
            let p = std::path::Path::new(&d);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_dir_path()
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            export_file: default_export_file(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&data_dir)?;
        println!("✅ Data dir:    {:?}", data_dir);

        Ok(())
    }
}
