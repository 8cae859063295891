#[allow(clippy::module_inception)]
mod config;
mod hotkey_config;
mod logging_config;

pub(crate) use {config::Config, hotkey_config::HotkeyConfig, logging_config::LoggingConfig};

pub(crate) const DEFAULT_BINDING: &str = "Ctrl+Shift+O";
pub(crate) const DEFAULT_LOG_FILTER: &str = "window_on_top=info,window_on_top_core=info";
pub(crate) const DEFAULT_LOG_TO_FILE: bool = true;

pub(crate) fn default_binding() -> String {
    DEFAULT_BINDING.to_string()
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

pub(crate) fn default_log_to_file() -> bool {
    DEFAULT_LOG_TO_FILE
}
