use std::path::PathBuf;
use anyhow::{bail, Result};
use crate::config::Config;
use crate::handlers::PAGES;

#[derive(Debug, Default)]
pub struct PreflightReport {
    pub missing_templates: Vec<PathBuf>,
    pub static_dir_missing: bool,
}

impl PreflightReport {
    pub fn is_clean(&self) -> bool {
        self.missing_templates.is_empty() && !self.static_dir_missing
    }
}

/// Verifies the on-disk assets the pages rely on.
///
/// A missing templates directory is fatal. Individual missing pages and a
/// missing static directory are reported so the server can still start.
pub fn check_assets(config: &Config) -> Result<PreflightReport> {
    let templates_dir = &config.assets.templates_dir;
    if !templates_dir.is_dir() {
        bail!("Templates directory not found: {}", templates_dir.display());
    }

    let mut report = PreflightReport::default();

    for (_, template) in PAGES {
        let path = templates_dir.join(template);
        if !path.is_file() {
            tracing::warn!("Missing page template: {}", path.display());
            report.missing_templates.push(path);
        }
    }

    if !config.assets.static_dir.is_dir() {
        tracing::warn!("Static directory not found: {}", config.assets.static_dir.display());
        report.static_dir_missing = true;
    }

    if report.is_clean() {
        tracing::info!("All templates and static assets present");
    }

    Ok(report)
}

/// Logs where the dashboard can be reached.
pub fn announce(config: &Config) {
    let local = format!("http://localhost:{}", config.server.port);

    tracing::info!("VabHub listening on http://{}", config.bind_address());
    tracing::info!("Local access: {}", local);
    for (route, _) in PAGES {
        tracing::info!("  page: {}{}", local, route);
    }
    tracing::info!("Live metrics feed: ws://localhost:{}/ws", config.server.port);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &std::path::Path) -> Config {
        let mut config = Config::defaults();
        config.assets.templates_dir = dir.join("templates");
        config.assets.static_dir = dir.join("static");
        config
    }

    #[test]
    fn test_missing_templates_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());

        let err = check_assets(&config).unwrap_err();
        assert!(err.to_string().contains("Templates directory not found"));
    }

    #[test]
    fn test_reports_missing_pages() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::create_dir_all(&config.assets.templates_dir).unwrap();
        std::fs::write(config.assets.templates_dir.join("index_enhanced.html"), "").unwrap();
        std::fs::write(config.assets.templates_dir.join("pt.html"), "").unwrap();

        let report = check_assets(&config).unwrap();
        assert_eq!(report.missing_templates.len(), PAGES.len() - 2);
        assert!(report.static_dir_missing);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_complete_assets_are_clean() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::create_dir_all(&config.assets.templates_dir).unwrap();
        std::fs::create_dir_all(&config.assets.static_dir).unwrap();
        for (_, template) in PAGES {
            std::fs::write(config.assets.templates_dir.join(template), "<html></html>").unwrap();
        }

        assert!(check_assets(&config).unwrap().is_clean());
    }
}
