use tracing_subscriber::EnvFilter;
use wu_settings::Settings;
use wu_settings::defaults::default_log_filter;

/// Filter directives to log with: `requested`, then `settings.log_filter`, then `info`.
///
/// Blank strings count as absent. Directives `EnvFilter` cannot parse fall back to `info`.
pub fn filter_directives(requested: Option<&str>, settings: &Settings) -> String {
    let candidate = requested
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| settings.effective_log_filter());

    match EnvFilter::try_new(&candidate) {
        Ok(_) => candidate,
        Err(e) => {
            eprintln!("window-utils: invalid log filter `{candidate}` ({e}); using `info`");
            default_log_filter()
        }
    }
}

/// Install a stderr `fmt` subscriber. Returns `false` if one is already installed.
pub fn init(directives: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(log_filter: Option<&str>) -> Settings {
        Settings {
            log_filter: log_filter.map(str::to_string),
            ..Settings::default()
        }
    }

    #[test]
    fn argument_wins_over_settings() {
        assert_eq!(
            filter_directives(Some("wu_shim=debug"), &settings(Some("warn"))),
            "wu_shim=debug"
        );
    }

    #[test]
    fn settings_used_when_argument_absent_or_blank() {
        assert_eq!(filter_directives(None, &settings(Some("warn"))), "warn");
        assert_eq!(filter_directives(Some("  "), &settings(Some("warn"))), "warn");
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(filter_directives(None, &settings(None)), "info");
    }

    #[test]
    fn unparsable_filter_falls_back_to_info() {
        assert_eq!(filter_directives(Some("wu_shim=loud"), &settings(None)), "info");
        assert_eq!(filter_directives(None, &settings(Some("warn,wu_shim=verbose"))), "info");
    }
}
