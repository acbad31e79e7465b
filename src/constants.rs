// Constants module - centralized default values
//
// Defaults shared by the builder, configuration and logging setup.

// =============================================================================
// Builder defaults
// =============================================================================

/// Alignment used by `overlay` when none is given
pub const DEFAULT_OVERLAY_ALIGN: &str = "center";

// =============================================================================
// Logging defaults
// =============================================================================

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// CLI defaults
// =============================================================================

/// Environment variable consulted for the signing secret
pub const SECRET_ENV_VAR: &str = "REZIZER_SECRET";
