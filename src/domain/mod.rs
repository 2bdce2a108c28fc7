// ───── Current Crate Imports ────────────────────────────────────────────── //

pub use package_manager::PackageManager;

// ───── Submodules ───────────────────────────────────────────────────────── //

// Top-level modules
mod package_manager;
