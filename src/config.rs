/// Game configuration: defaults, then an optional INI file, then the
/// binary's command-line flags.
///
/// ```ini
/// [game]
/// lives = 3
/// seed = 1234
///
/// [display]
/// fps = 60
/// ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use configparser::ini::Ini;
use log::info;
use thiserror::Error;

const DEFAULT_LIVES: u32 = 3;
const DEFAULT_FPS: u32 = 60;
const MAX_FPS: u32 = 240;
const MAX_LIVES: u32 = 99;
pub const DEFAULT_CONFIG_PATH: &str = "./tile_dash.ini";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file {path}: {message}")]
    Load { path: PathBuf, message: String },
    #[error("bad value for [{section}] {key}: {message}")]
    Parse {
        section: &'static str,
        key: &'static str,
        message: String,
    },
    #[error("{key} = {value} is out of range ({expected})")]
    OutOfRange {
        key: &'static str,
        value: u64,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Lives at session start and after a restart.
    pub lives: u32,
    /// Simulation ticks (and frames) per second.
    pub fps: u32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            lives: DEFAULT_LIVES,
            fps: DEFAULT_FPS,
            seed: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load values from `config_path`.  Keys that are absent keep their
    /// current value.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path).map_err(|message| ConfigError::Load {
            path: self.config_path.clone(),
            message,
        })?;

        if let Some(lives) = read_uint(&ini, "game", "lives")? {
            self.lives = u32::try_from(lives).map_err(|_| ConfigError::OutOfRange {
                key: "lives",
                value: lives,
                expected: "1..=99",
            })?;
        }
        if let Some(seed) = read_uint(&ini, "game", "seed")? {
            self.seed = Some(seed);
        }
        if let Some(fps) = read_uint(&ini, "display", "fps")? {
            self.fps = u32::try_from(fps).map_err(|_| ConfigError::OutOfRange {
                key: "fps",
                value: fps,
                expected: "1..=240",
            })?;
        }

        self.validate()?;
        info!(
            "Loaded config from {}: lives={}, fps={}, seed={:?}",
            self.config_path.display(),
            self.lives,
            self.fps,
            self.seed
        );
        Ok(())
    }

    /// Load from the file if it exists.  Returns whether it was read.
    pub fn load_if_present(&mut self) -> Result<bool, ConfigError> {
        if !Path::new(&self.config_path).exists() {
            return Ok(false);
        }
        self.load_from_file()?;
        Ok(true)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lives == 0 || self.lives > MAX_LIVES {
            return Err(ConfigError::OutOfRange {
                key: "lives",
                value: self.lives as u64,
                expected: "1..=99",
            });
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::OutOfRange {
                key: "fps",
                value: self.fps as u64,
                expected: "1..=240",
            });
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

fn read_uint(ini: &Ini, section: &'static str, key: &'static str) -> Result<Option<u64>, ConfigError> {
    ini.getuint(section, key)
        .map_err(|message| ConfigError::Parse { section, key, message })
}
