use crate::app::Action;
use clap::Parser;
use nfl_api::client::ESPN_NFL_SITE_V2;
use std::path::PathBuf;

pub const DEFAULT_SANITY_PAYLOAD: &str = r#"{"foo": "bar"}"#;

#[derive(Debug, Parser)]
#[command(name = "nflscores", version)]
#[command(about = "Cache weekly NFL scoreboards from ESPN and summarize each game")]
pub struct Cli {
    /// Weeks to retrieve: a week number, or "all" (the default when no value is given)
    #[arg(short, long, value_name = "SELECTOR", num_args = 0..=1, default_missing_value = "all")]
    pub weeks: Option<String>,

    /// Print the game records for --weeks (week 1 if omitted) as JSON
    #[arg(long, visible_alias = "csv")]
    pub json: bool,

    /// Print a summary table for a week selector
    #[arg(long, value_name = "SELECTOR")]
    pub summary: Option<String>,

    /// Clear the cache folder before doing anything else
    #[arg(long)]
    pub clean: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// POST a payload to httpbin.org to check connectivity
    #[arg(long, value_name = "PAYLOAD", num_args = 0..=1, default_missing_value = DEFAULT_SANITY_PAYLOAD)]
    pub sanity: Option<String>,

    /// Skip weeks that fail instead of stopping at the first one
    #[arg(long)]
    pub keep_going: bool,

    /// Directory holding one JSON file per cached week
    #[arg(long, env = "NFLSCORES_CACHE_DIR", default_value = "cache")]
    pub cache_dir: PathBuf,

    /// Scoreboard API base URL
    #[arg(long, env = "NFLSCORES_BASE_URL", default_value = ESPN_NFL_SITE_V2)]
    pub base_url: String,

    /// HTTP request timeout in seconds (at least 1)
    #[arg(
        long,
        env = "NFLSCORES_TIMEOUT",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl Cli {
    /// Requested steps in execution order: clean, sanity, weeks, json, summary.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.clean {
            actions.push(Action::Clean);
        }
        if let Some(payload) = &self.sanity {
            actions.push(Action::Sanity { payload: payload.clone() });
        }
        if let Some(selector) = &self.weeks {
            actions.push(Action::FetchWeeks { selector: selector.clone() });
        }
        if self.json {
            actions.push(Action::EmitJson);
        }
        if let Some(selector) = &self.summary {
            actions.push(Action::Summary { selector: selector.clone() });
        }
        actions
    }
}
