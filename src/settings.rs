use crate::cli::Cli;
use log::LevelFilter;
use nfl_api::summary::FailurePolicy;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Settings {
    pub cache_dir: PathBuf,
    pub base_url: String,
    pub timeout: Duration,
    pub log_level: LevelFilter,
    pub policy: FailurePolicy,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            cache_dir: cli.cache_dir.clone(),
            base_url: cli.base_url.clone(),
            timeout: Duration::from_secs(cli.timeout),
            log_level: if cli.quiet { LevelFilter::Warn } else { LevelFilter::Info },
            policy: if cli.keep_going { FailurePolicy::Continue } else { FailurePolicy::Abort },
        }
    }
}

/// Console logger on stderr. `RUST_LOG` overrides the level picked from the
/// command line.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn quiet_and_keep_going_map_to_settings() {
        let cli = Cli::try_parse_from(["nflscores", "-q", "--keep-going", "--timeout", "3"]).unwrap();
        let settings = Settings::from_cli(&cli);

        assert_eq!(settings.log_level, LevelFilter::Warn);
        assert_eq!(settings.policy, FailurePolicy::Continue);
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn defaults_log_info_and_abort() {
        let cli = Cli::try_parse_from(["nflscores"]).unwrap();
        let settings = Settings::from_cli(&cli);

        assert_eq!(settings.log_level, LevelFilter::Info);
        assert_eq!(settings.policy, FailurePolicy::Abort);
    }
}
