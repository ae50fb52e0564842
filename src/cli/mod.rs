use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";

#[derive(Debug, Parser)]
#[command(version, about = "Serves the tutorials catalog over a small JSON API.")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0")]
    pub host: IpAddr,
    #[arg(long, env = "PORT")]
    #[arg(default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,
    /// Value of the `Access-Control-Allow-Origin` header sent with every response.
    #[arg(long, env = "ALLOWED_ORIGIN")]
    #[arg(default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,
}

impl Args {
    pub fn listen_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The configured origin, with an empty value falling back to the wildcard.
    pub fn allowed_origin(&self) -> &str {
        match self.allowed_origin.as_str() {
            "" => DEFAULT_ALLOWED_ORIGIN,
            origin => origin,
        }
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origin: String::from(DEFAULT_ALLOWED_ORIGIN),
        }
    }
}

// An exported but empty `PORT` means "use the default", same as an unset one.
fn parse_port(value: &str) -> Result<u16, String> {
    match value {
        "" => Ok(DEFAULT_PORT),
        port => port
            .parse()
            .map_err(|_| format!("`{port}` isn't a valid TCP port number")),
    }
}
