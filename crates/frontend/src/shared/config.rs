use contracts::shared::config::ClientConfig;
use once_cell::sync::Lazy;

const CONFIG_TOML: &str = include_str!("../../config.toml");

static CONFIG: Lazy<ClientConfig> = Lazy::new(load);

/// Client settings, parsed once on first use
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

fn load() -> ClientConfig {
    let config = match ClientConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("invalid config.toml, using defaults: {e:#}");
            ClientConfig::default()
        }
    };
    match option_env!("DASHBOARD_API_URL") {
        Some(url) if !url.trim().is_empty() => config.with_api_base_url(url),
        _ => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        assert!(ClientConfig::from_toml_str(CONFIG_TOML).is_ok());
    }
}
