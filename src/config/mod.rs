/// Main configuration module.
///
/// Re-exports submodules for scene constants and runtime settings.
pub mod scene;
pub mod settings;
