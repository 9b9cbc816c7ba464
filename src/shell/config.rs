// Runtime configuration read from the environment.
//
// Variables
// - TIMECARDS_HOST: bind address, default 0.0.0.0.
// - TIMECARDS_PORT: bind port, default 8080.
// - TIMECARDS_LOG: tracing EnvFilter directive, default "info".

use anyhow::Context;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = match lookup("TIMECARDS_HOST") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("TIMECARDS_HOST is not an IP address: {raw}"))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port = match lookup("TIMECARDS_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("TIMECARDS_PORT is not a port number: {raw}"))?,
            None => 8080,
        };
        let log_filter = lookup("TIMECARDS_LOG").unwrap_or_else(|| "info".to_string());
        Ok(Self {
            host,
            port,
            log_filter,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
