use crate::fetcher::ScoreboardFetcher;
use crate::{Error, GameRecord, Result, Week, projector};
use log::{debug, error, info};

/// What to do when one week of a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing week and return its error.
    #[default]
    Abort,
    /// Record the failure and move on to the next week.
    Continue,
}

#[derive(Debug)]
pub struct WeekFailure {
    pub week: Week,
    pub error: Error,
}

/// Records for a batch of weeks, in week order then event order.
#[derive(Debug, Default)]
pub struct Summary {
    pub records: Vec<GameRecord>,
    /// Always empty under [`FailurePolicy::Abort`].
    pub failures: Vec<WeekFailure>,
}

impl Summary {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch and project each week in turn, one at a time. Every call builds a
/// fresh `Summary`; nothing is carried over between calls.
pub async fn accumulate(
    fetcher: &ScoreboardFetcher,
    weeks: &[Week],
    policy: FailurePolicy,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for &week in weeks {
        info!("week_number: {week}");
        match load_week(fetcher, week).await {
            Ok(records) => {
                debug!("week {week}: {} games", records.len());
                summary.records.extend(records);
            }
            Err(err) if policy == FailurePolicy::Abort => return Err(err),
            Err(err) => {
                error!("skipping week {week}: {err}");
                summary.failures.push(WeekFailure { week, error: err });
            }
        }
    }

    Ok(summary)
}

async fn load_week(fetcher: &ScoreboardFetcher, week: Week) -> Result<Vec<GameRecord>> {
    let document = fetcher.fetch(week).await?;
    projector::project(&document).map_err(|e| e.for_week(week))
}
