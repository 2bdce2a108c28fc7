//! Health integration tests.

use pkgmgr_services::configuration::Settings;
use pkgmgr_services::domain::PackageManager;

use crate::helpers::spawn_app_locally;

#[tokio::test]
async fn health_check_returns_the_healthy_body() {
    let config = Settings::load_configuration().unwrap();
    let app = spawn_app_locally(config, PackageManager::Pip).await;

    // Act
    let response = app.get("/health-check").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value =
        response.json().await.expect("Failed to parse body");
    assert_eq!(serde_json::json!({ "status": "healthy" }), body);
}

#[tokio::test]
async fn health_check_body_is_identical_for_both_services() {
    for package_manager in [PackageManager::Pip, PackageManager::Poetry] {
        let config = Settings::load_configuration().unwrap();
        let app = spawn_app_locally(config, package_manager).await;

        let response = app.get("/health-check").await;

        assert_eq!(200, response.status().as_u16());
        assert_eq!(
            r#"{"status":"healthy"}"#,
            response.text().await.expect("Failed to read body")
        );
    }
}
