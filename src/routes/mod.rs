// ───── Current Crate Imports ────────────────────────────────────────────── //

pub use health_check::health_check;
pub use index::index;

// ───── Submodules ───────────────────────────────────────────────────────── //

// Top-level modules
mod health_check;
mod index;
