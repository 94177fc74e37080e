use tracing::{debug, info};

use super::{AuditorConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_defaults_used(path: &std::path::Path) {
    debug!(
        target: "factcheck::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &AuditorConfig) {
    info!(
        target: "factcheck::config",
        path = %config
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        source_file = %config.audit.source_file.display(),
        report_file = %config.audit.report_file.display(),
        history_log = %config.audit.history_log.display(),
        "Configuration file loaded successfully"
    );
}
