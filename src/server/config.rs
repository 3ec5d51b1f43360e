//! Server configuration: command line arguments and their validated form.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::logging::LOG_LEVELS;
use crate::scheduler::ContractOptimizer;

use super::error::{ServerError, ServerResult};

/// Default listen port of the booking service.
pub const DEFAULT_PORT: u16 = 5050;

/// Default upper bound on contracts per request.
pub const DEFAULT_MAX_CONTRACTS: usize = 100_000;

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "spaceship-server")]
#[command(about = "HTTP service selecting the most profitable spaceship contracts")]
#[command(version)]
pub struct Args {
    /// Address to bind
    #[arg(long, env = "SPACESHIP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for HTTP server
    #[arg(long, env = "SPACESHIP_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SPACESHIP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum number of contracts accepted in one request
    #[arg(long, env = "SPACESHIP_MAX_CONTRACTS", default_value_t = DEFAULT_MAX_CONTRACTS)]
    pub max_contracts: usize,

    /// Disable dominated-contract pruning
    #[arg(long)]
    pub no_prune: bool,
}

/// Validated server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_level: String,
    pub max_contracts: usize,
    pub prune: bool,
}

impl ServerConfig {
    /// Creates a config listening on all interfaces at the default port.
    pub fn new() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            log_level: "info".to_string(),
            max_contracts: DEFAULT_MAX_CONTRACTS,
            prune: true,
        }
    }

    /// Validates parsed arguments.
    pub fn from_args(args: Args) -> ServerResult<Self> {
        let ip: IpAddr = args.host.parse().map_err(|_| ServerError::InvalidConfig {
            field: "host".to_string(),
            value: args.host.clone(),
        })?;

        let log_level = args.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ServerError::InvalidConfig {
                field: "log_level".to_string(),
                value: args.log_level,
            });
        }

        if args.max_contracts == 0 {
            return Err(ServerError::InvalidConfig {
                field: "max_contracts".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(Self {
            addr: SocketAddr::new(ip, args.port),
            log_level,
            max_contracts: args.max_contracts,
            prune: !args.no_prune,
        })
    }

    /// Sets the per-request contract limit.
    pub fn with_max_contracts(mut self, max_contracts: usize) -> Self {
        self.max_contracts = max_contracts;
        self
    }

    /// Enables or disables pruning.
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Optimizer configured for this server.
    pub fn optimizer(&self) -> ContractOptimizer {
        ContractOptimizer::new().with_pruning(self.prune)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
