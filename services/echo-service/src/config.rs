use std::net::SocketAddr;

pub const DEFAULT_PORT: &str = "8080";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
    #[error("Could not listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_port(std::env::var("PORT").ok())
    }

    /// 未設定または空文字ならデフォルトポート
    pub fn from_port(port: Option<String>) -> Self {
        match port.filter(|p| !p.is_empty()) {
            Some(port) => Self { port },
            None => {
                tracing::info!("Defaulting to port {}", DEFAULT_PORT);
                Self {
                    port: DEFAULT_PORT.to_string(),
                }
            }
        }
    }

    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let port: u16 = self
            .port
            .parse()
            .map_err(|_| ServerError::InvalidPort(self.port.clone()))?;
        Ok(SocketAddr::from(([0, 0, 0, 0], port)))
    }
}
