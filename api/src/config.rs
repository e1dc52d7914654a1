use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    /// Interface to bind the HTTP server to
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = match host {
            Some(raw) => raw.parse::<IpAddr>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid HOST '{}', using 0.0.0.0", raw);
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            }),
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match port {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
