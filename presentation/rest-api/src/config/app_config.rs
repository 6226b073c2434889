use super::{cors_config, server_config::ServerConfig, timeline_config::TimelineConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub timeline: TimelineConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            timeline: TimelineConfig::from_env(),
        }
    }
}
