use serde::Deserialize;

/// Session pipeline defaults
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Duration assumed when a request omits one, in minutes
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: default_duration_minutes(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_duration_minutes() -> u32 {
    3
}
