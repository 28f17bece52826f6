use clap::Parser;

pub const HOST_ENV: &str = "API_HOST";
pub const PORT_ENV: &str = "API_PORT";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3500;

/// Listener configuration, read once at process start.
#[derive(Debug, Clone, Parser)]
#[command(name = "linnet-api")]
pub struct ServerConfig {
    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    /// Address handed to the listener. Hostnames are resolved at bind time.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Base URL announced in the startup line.
    pub fn display_addr(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The single line printed once the listener is bound.
    pub fn startup_line(&self) -> String {
        format!("API running at {}", self.display_addr())
    }
}
