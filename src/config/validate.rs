use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::AppConfig;

    #[test]
    fn accepts_defaults() {
        let cfg = AppConfig::default();
        validate(&cfg).expect("default config should be valid");
    }

    #[test]
    fn collects_all_violations() {
        let mut cfg = AppConfig::default();
        cfg.general.host = "  ".to_string();
        cfg.database.url = String::new();
        cfg.database.min_idle = 20;
        cfg.database.max_connections = 5;

        let err = validate(&cfg).expect_err("config should be rejected");
        let rendered = err.to_string();
        assert!(rendered.contains("general.host"));
        assert!(rendered.contains("database.url"));
        assert!(rendered.contains("database.min_idle"));
    }
}
