use crate::config::toml_config::DEFAULT_BIND_ADDRESS;
use crate::core::termination::SeverancePolicy;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "company-employee-api")]
#[command(about = "In-memory HTTP service for companies, employees and terminations")]
pub struct CliConfig {
    /// Address to listen on [default: 127.0.0.1:8080]
    #[arg(long)]
    pub bind: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Any explicit `--bind` wins over the config file, even the default address.
    pub fn bind_override(&self) -> Option<String> {
        self.bind.clone()
    }
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS)
    }

    fn severance_policy(&self) -> SeverancePolicy {
        SeverancePolicy::default()
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("--bind", self.bind_address())
    }
}
