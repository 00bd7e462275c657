//! Server startup utilities.

use placehub_config::ServerConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____  __                  __  __      __
   / __ \/ /___ _________    / / / /_  __/ /_
  / /_/ / / __ `/ ___/ _ \  / /_/ / / / / __ \
 / ____/ / /_/ / /__/  __/ / __  / /_/ / /_/ /
/_/   /_/\__,_/\___/\___/ /_/ /_/\__,_/_.___/

                Placement Platform API
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(server: &ServerConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:   http://{}:{}/api/v1", server.host, server.port);
    info!("Health:     http://{}:{}/health", server.host, server.port);
    info!("Swagger UI: http://{}:{}/swagger-ui", server.host, server.port);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&ServerConfig::default());
    }

    #[test]
    fn test_print_startup_info_custom_port() {
        let _ = tracing_subscriber::fmt::try_init();

        let server = ServerConfig {
            port: 3000,
            ..ServerConfig::default()
        };
        print_startup_info(&server);
    }
}
