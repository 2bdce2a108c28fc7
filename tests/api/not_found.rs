//! Unmatched routes fall through to the framework default.

use pkgmgr_services::configuration::Settings;
use pkgmgr_services::domain::PackageManager;

use crate::helpers::spawn_app_locally;

#[tokio::test]
async fn unknown_paths_return_404() {
    for package_manager in [PackageManager::Pip, PackageManager::Poetry] {
        let config = Settings::load_configuration().unwrap();
        let app = spawn_app_locally(config, package_manager).await;

        let response = app.get("/nonexistent").await;

        assert_eq!(404, response.status().as_u16());
    }
}
