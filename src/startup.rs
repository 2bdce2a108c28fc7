use axum::routing;
use axum::Router;
use tokio::net::TcpListener;

use axum::serve::Serve;

use crate::configuration::Settings;
use crate::domain::PackageManager;
use crate::routes::health_check;
use crate::routes::index;

/// This is a central type of our codebase. `Application` type builds server
/// for both production and testing purposes.
pub struct Application {
    port: u16,
    serve: Serve<Router, Router>,
}

/// Shareable type, we insert it to the main `Router` as state,
/// at the launch stage.
#[derive(Clone)]
pub struct AppState {
    pub package_manager: PackageManager,
}

impl Application {
    /// Build a new server.
    ///
    /// This function binds a listener on the configured address and
    /// assembles the route table for the given service identity.
    pub async fn build(
        configuration: Settings,
        package_manager: PackageManager,
    ) -> Result<Application, std::io::Error> {
        let address =
            format!("{}:{}", configuration.app_addr, configuration.app_port);
        let listener = TcpListener::bind(address).await?;
        let port = listener.local_addr()?.port();

        let serve = Self::build_server(listener, package_manager);

        Ok(Self { serve, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// This function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.serve.await?;
        Ok(())
    }

    /// Configure `Server`.
    fn build_server(
        listener: TcpListener,
        package_manager: PackageManager,
    ) -> Serve<Router, Router> {
        // No fallback is installed: unmatched paths get axum's default 404.
        let app_state = AppState { package_manager };
        let app = Router::new()
            .route("/", routing::get(index))
            .route("/health-check", routing::get(health_check))
            .with_state(app_state);

        axum::serve(listener, app)
    }
}
