use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "plantscan")]
#[command(about = "Plant identification and care API backed by a Gemini model")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1")]
    pub bind_address: String,

    #[arg(long, default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, default_value = "gemini-1.5-flash")]
    pub model: String,

    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    pub api_base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("model", &self.model)?;
        validate_non_empty_string("bind_address", &self.bind_address)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}
