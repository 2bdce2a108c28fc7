// ───── Current Crate Imports ────────────────────────────────────────────── //

use pkgmgr_services::{
    configuration::Settings, domain::PackageManager, startup::Application,
};

// ───── Body ─────────────────────────────────────────────────────────────── //

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_level(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up tracing");

    // Panic if we can't read configuration
    let config =
        Settings::load_configuration().expect("Failed to read configuration.");

    let application = Application::build(config, PackageManager::Pip)
        .await
        .expect("Failed to build application");
    tracing::info!("pip service listening on port {}", application.port());

    if let Err(e) = application.run_until_stopped().await {
        eprintln!("Error: {}", e);
    }
}
