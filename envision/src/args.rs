use std::path::PathBuf;

use clap::Parser;

/// Envision audio service
#[derive(Debug, Parser)]
#[command(name = "envision", about = "Sports visualization meditation audio service")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "envision.toml", env = "ENVISION_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "ENVISION_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter (tracing `EnvFilter` syntax)
    #[arg(long, default_value = "info", env = "ENVISION_LOG")]
    pub log: String,
}
