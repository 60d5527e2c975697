pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

/// Steam store id of The Secret of Monkey Island: Special Edition.
pub(crate) fn default_steam_app_id() -> u32 {
    32360
}
