//! Command-line and environment configuration.
//!
//! Every flag falls back to a `ROSTER_*` environment variable. `main` loads an optional
//! `.env` file first, so those variables can also live there.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster", about = "Student, teacher and user records over HTTP")]
pub struct Config {
    #[arg(long, env = "ROSTER_HOST", default_value = "127.0.0.1", help = "Address to bind")]
    pub host: String,

    #[arg(long, env = "ROSTER_PORT", default_value_t = 8000, help = "Port to bind")]
    pub port: u16,

    #[arg(
        long,
        env = "ROSTER_MAILBOX_SIZE",
        default_value_t = 32,
        value_name = "N",
        help = "Pending requests each store buffers before callers wait"
    )]
    pub mailbox_size: usize,

    #[arg(long, env = "ROSTER_LOG_JSON", help = "Log one JSON object per line")]
    pub log_json: bool,
}

impl Config {
    /// `host:port` as given. Host names are resolved when binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
