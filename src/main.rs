//! Spaceship contract optimization server.

use clap::Parser;

use spaceship_schedule::logging;
use spaceship_schedule::server::{self, Args, ServerConfig, ServerResult};

#[tokio::main]
async fn main() -> ServerResult<()> {
    let args = Args::parse();
    let config = ServerConfig::from_args(args)?;

    logging::init_tracing(&config.log_level);

    server::run(config).await
}
