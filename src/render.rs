use nfl_api::GameRecord;
use nfl_api::summary::WeekFailure;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, PartialEq, Tabled)]
struct GameRow {
    game_id: String,
    week: u32,
    date: String,
    name: String,
    attendance: String,
    home: String,
    away: String,
    win: String,
    home_score: String,
    away_score: String,
    game_over: bool,
}

impl From<&GameRecord> for GameRow {
    fn from(record: &GameRecord) -> Self {
        let date = record
            .kickoff()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| record.date.clone());

        Self {
            game_id: record.game_id.clone(),
            week: record.week,
            date,
            name: record.name.clone(),
            attendance: cell(&record.attendance),
            home: record.home.clone(),
            away: record.away.clone(),
            win: record.win.clone().unwrap_or_default(),
            home_score: cell(&record.home_score),
            away_score: cell(&record.away_score),
            game_over: record.game_over,
        }
    }
}

/// Strings print without quotes, null prints empty.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn table(records: &[GameRecord]) -> String {
    let mut table = Table::new(records.iter().map(GameRow::from));
    table.with(Style::psql());
    table.to_string()
}

pub fn json(records: &[GameRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

pub fn failures(failures: &[WeekFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("week {}: {}", f.week, f.error))
        .collect::<Vec<_>>()
        .join("\n")
}
