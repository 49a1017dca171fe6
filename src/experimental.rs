//! Opt-in features read from `VAGRANT_EXPERIMENTAL`.

use std::env;

pub const EXPERIMENTAL_ENV_VAR: &str = "VAGRANT_EXPERIMENTAL";
pub const DISKS_FEATURE: &str = "disks";
pub const DISKS_PROVIDER: &str = "virtualbox";

/// Splits a comma separated feature list, dropping blank entries.
pub fn parse_features(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(String::from)
        .collect()
}

/// Features enabled in the environment, empty when the variable is unset.
pub fn enabled_features() -> Vec<String> {
    env::var(EXPERIMENTAL_ENV_VAR)
        .map(|value| parse_features(&value))
        .unwrap_or_default()
}

pub fn is_disks_enabled_with<S: AsRef<str>>(provider: &str, features: &[S]) -> bool {
    provider == DISKS_PROVIDER && features.iter().any(|f| f.as_ref() == DISKS_FEATURE)
}

/// Whether disk provisioning is on for `provider`, given the environment.
pub fn is_disks_enabled(provider: &str) -> bool {
    is_disks_enabled_with(provider, &enabled_features())
}
