//! Application-wide constants.

/// The display name of the application, also used for the config directory.
pub const APP_NAME: &str = "Keyscape";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "keyscape";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "KEYSCAPE_CONFIG_DIR";

/// Asset root used when none is configured.
pub const DEFAULT_ASSET_DIR: &str = "assets/img";
