use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Entries kept in the readline history file.
    pub history_size: usize,
    /// Print both operands before showing the result of a binary op.
    pub echo_operands: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            history_size: 100,
            echo_operands: true,
        }
    }
}

impl CliConfig {
    pub fn load() -> Self {
        let path = Path::new("poly_config.toml");
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => println!("Error parsing config file: {}. Using defaults.", e),
                },
                Err(e) => println!("Error reading config file: {}. Using defaults.", e),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = fs::File::create("poly_config.toml")?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    pub fn restore() -> Self {
        let config = Self::default();
        let _ = config.save();
        config
    }
}
