use crate::config::LoggingSettings;
use crate::error::ConfigError;

/// Installs a fmt subscriber at the configured level.
///
/// Only the first call in a process installs anything; later calls still
/// validate the level but leave the existing subscriber in place.
pub fn init(settings: &LoggingSettings) -> Result<(), ConfigError> {
    let level = settings.level()?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let settings = LoggingSettings::default();
        assert!(init(&settings).is_ok());
        assert!(init(&settings).is_ok());
    }

    #[test]
    fn test_init_rejects_bad_level() {
        let settings = LoggingSettings {
            level: "chatty".to_string(),
        };
        assert!(matches!(init(&settings), Err(ConfigError::InvalidLevel(_))));
    }
}
