use std::path::Path;

use serde::Deserialize;

/// Optional yaml configuration for the bot binary.
#[derive(Debug, Default, Deserialize)]
pub struct BotConfig {
    pub database_url: Option<String>,
}

impl BotConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}
