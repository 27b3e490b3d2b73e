use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_header_value, validate_non_empty_string, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/somedata/";
pub const DEFAULT_APP_ID: &str = "campus-task";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "somedata-cli")]
#[command(about = "Interactive REST client for the somedata service")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_APP_ID, help = "Value sent in the appId header")]
    pub app_id: String,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
            no_color: false,
            verbose: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn app_id(&self) -> &str {
        &self.app_id
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("app_id", &self.app_id)?;
        validate_header_value("app_id", &self.app_id)?;
        Ok(())
    }
}
