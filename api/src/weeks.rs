use crate::{Error, Result, Week};
use log::{info, warn};

pub const ALL_SELECTOR: &str = "all";

/// Exclusive upper bound for `"all"`. The regular season has 17 weeks, but
/// `"all"` has always stopped at week 16; kept as is for compatibility.
pub const ALL_WEEKS_END: u32 = 17;

/// Turn a week selector into the weeks to process, in ascending order.
///
/// - no selector: logs a warning and yields no weeks (not an error)
/// - `"all"`: weeks `1..ALL_WEEKS_END`
/// - a number: that single week, unchecked against the season range
pub fn resolve(selector: Option<&str>) -> Result<Vec<Week>> {
    info!("Evaluating week selector: {selector:?}");

    let Some(selector) = selector else {
        warn!("week selector is missing; use 1-17 or all");
        return Ok(Vec::new());
    };

    let trimmed = selector.trim();
    if trimmed == ALL_SELECTOR {
        return Ok((1..ALL_WEEKS_END).map(Week::new).collect());
    }

    let week = trimmed
        .parse::<u32>()
        .map(Week::new)
        .map_err(|_| Error::InvalidSelector(selector.to_owned()))?;

    if !week.is_regular_season() {
        warn!("week {week} is outside the regular season (1-17); requesting it anyway");
    }
    Ok(vec![week])
}
