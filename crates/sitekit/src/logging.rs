//! `env_logger` wiring for the `log` calls made by the sitekit crates.

use log::LevelFilter;

/// Targets that follow [`LoggingConfig::level`]; everything else stays at `warn`.
pub const CRATE_TARGETS: [&str; 3] = ["sitekit", "sitekit_palette", "sitekit_markdown"];

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for [`CRATE_TARGETS`].
    pub level: LevelFilter,
    /// A complete `env_logger` filter; wins over `RUST_LOG` and `level`.
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: LevelFilter::Info, filter: None }
    }
}

/// Filter directives for `config`, given the current `RUST_LOG` value.
pub fn filter_directives(config: &LoggingConfig, rust_log: Option<&str>) -> String {
    if let Some(filter) = &config.filter {
        return filter.clone();
    }
    if let Some(env) = rust_log.filter(|v| !v.trim().is_empty()) {
        return env.to_string();
    }
    let level = config.level.as_str().to_ascii_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATE_TARGETS.iter().map(|target| format!("{}={}", target, level)));
    directives.join(",")
}

/// Installs `env_logger` as the global logger.
///
/// Returns `false` when a logger was already installed, by an earlier call or
/// by the host application; the existing logger is left in place.
pub fn init_logging(config: LoggingConfig) -> bool {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directives = filter_directives(&config, rust_log.as_deref());

    let installed = env_logger::Builder::new().parse_filters(&directives).try_init().is_ok();
    if installed {
        log::debug!("logging initialized with {:?}", directives);
    }
    installed
}
