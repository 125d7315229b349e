use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if any section holds values outside the ranges the
    /// pipeline can work with
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_llm()?;
        self.validate_tts()?;
        self.validate_session()?;
        self.validate_storage()?;
        Ok(())
    }

    fn validate_llm(&self) -> anyhow::Result<()> {
        if self.llm.model.is_empty() {
            anyhow::bail!("llm.model must not be empty");
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            anyhow::bail!("llm.temperature must be between 0.0 and 2.0");
        }
        if self.llm.max_tokens == 0 {
            anyhow::bail!("llm.max_tokens must be greater than 0");
        }
        Ok(())
    }

    fn validate_tts(&self) -> anyhow::Result<()> {
        if self.tts.model.is_empty() {
            anyhow::bail!("tts.model must not be empty");
        }
        Ok(())
    }

    fn validate_session(&self) -> anyhow::Result<()> {
        if self.session.default_duration_minutes == 0 {
            anyhow::bail!("session.default_duration_minutes must be at least 1");
        }
        Ok(())
    }

    fn validate_storage(&self) -> anyhow::Result<()> {
        if !self.storage.public_path.starts_with('/') {
            anyhow::bail!("storage.public_path must start with '/'");
        }
        if self.storage.public_path == "/" {
            anyhow::bail!("storage.public_path must not be the root path");
        }
        if self.storage.public_path.ends_with('/') {
            anyhow::bail!("storage.public_path must not end with '/'");
        }

        let Some(ref retention) = self.storage.retention else {
            return Ok(());
        };

        if retention.max_files.is_none() && retention.max_age.is_none() {
            anyhow::bail!("storage.retention requires max_files or max_age");
        }
        if retention.max_files == Some(0) {
            anyhow::bail!("storage.retention.max_files must be at least 1");
        }
        if let Some(ref max_age) = retention.max_age {
            parse_duration("storage.retention.max_age", max_age)?;
        }
        parse_duration("storage.retention.sweep_interval", &retention.sweep_interval)?;

        Ok(())
    }
}

fn parse_duration(field: &str, value: &str) -> anyhow::Result<std::time::Duration> {
    let duration = duration_str::parse(value)
        .map_err(|e| anyhow::anyhow!("invalid duration '{value}' for {field}: {e}"))?;

    if duration.is_zero() {
        anyhow::bail!("{field} must be a positive duration");
    }

    Ok(duration)
}
