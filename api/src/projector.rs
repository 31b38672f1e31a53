use crate::espn::{EspnCompetitor, EspnEvent, ScoreboardResponse};
use crate::{Error, GameRecord, HomeAway, Result, Week};
use serde_json::Value;

/// `status.type.state` of a finished game.
const FINAL_STATE: &str = "post";

/// Flatten a week's scoreboard into one `GameRecord` per event, in the order
/// ESPN listed them.
pub fn project(document: &Value) -> Result<Vec<GameRecord>> {
    // Read ahead so a failure anywhere else can still name the week.
    let stated_week = document
        .pointer("/week/number")
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .map(Week::new);

    let scoreboard: ScoreboardResponse = serde_path_to_error::deserialize(document)
        .map_err(|e| Error::malformed(stated_week, e.path().to_string(), e.inner().to_string()))?;

    let week = Week::new(scoreboard.week.number);
    scoreboard
        .events
        .into_iter()
        .enumerate()
        .map(|(idx, event)| map_event(week, idx, event))
        .collect()
}

fn map_event(week: Week, idx: usize, event: EspnEvent) -> Result<GameRecord> {
    let game_over = event.status.status_type.state == FINAL_STATE;

    let competition = event
        .competitions
        .into_iter()
        .next()
        .ok_or_else(|| {
            Error::malformed(Some(week), format!("events[{idx}].competitions"), "no competitions")
        })?;

    let sides = HomeAway::from_positional(competition.competitors).ok_or_else(|| {
        Error::malformed(
            Some(week),
            format!("events[{idx}].competitions[0].competitors"),
            "expected a home and an away competitor",
        )
    })?;

    let win = winner(&sides);
    let HomeAway { home, away } = sides;

    Ok(GameRecord {
        game_id: event.id,
        week: week.number(),
        date: event.date,
        name: event.short_name,
        attendance: competition.attendance,
        home: home.team.abbreviation,
        away: away.team.abbreviation,
        win,
        home_score: home.score,
        away_score: away.score,
        game_over,
    })
}

/// Only the home side's `winner` flag is consulted: `false` there means the
/// away side won. Ties are not distinguished from away wins.
fn winner(sides: &HomeAway<EspnCompetitor>) -> Option<String> {
    sides.home.winner.map(|home_won| {
        let side = if home_won { &sides.home } else { &sides.away };
        side.team.abbreviation.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WEEK_1: &str = include_str!("../tests/fixtures/scoreboard-week-1.json");

    fn event(state: &str, home: Value, away: Value) -> Value {
        json!({
            "id": "401",
            "date": "2023-09-10T17:00Z",
            "shortName": "AWY @ HOM",
            "competitions": [{
                "attendance": 65000,
                "competitors": [home, away]
            }],
            "status": { "type": { "state": state } }
        })
    }

    fn scoreboard(events: Vec<Value>) -> Value {
        json!({ "week": { "number": 3 }, "events": events })
    }

    #[test]
    fn projects_fixture_in_event_order() {
        let doc: Value = serde_json::from_str(WEEK_1).unwrap();
        let records = project(&doc).unwrap();

        assert_eq!(records.len(), 2);
        let ids: Vec<&str> = records.iter().map(|r| r.game_id.as_str()).collect();
        assert_eq!(ids, ["401547353", "401547403"]);

        let opener = &records[0];
        assert_eq!(opener.week, 1);
        assert_eq!(opener.name, "DET @ KC");
        assert_eq!(opener.date, "2023-09-08T00:20Z");
        assert_eq!(opener.home, "KC");
        assert_eq!(opener.away, "DET");
        assert_eq!(opener.win.as_deref(), Some("DET"));
        assert_eq!(opener.home_score, json!("20"));
        assert_eq!(opener.away_score, json!("21"));
        assert_eq!(opener.attendance, json!(73426));
        assert!(opener.game_over);

        let scheduled = &records[1];
        assert_eq!(scheduled.win, None);
        assert!(!scheduled.game_over);
    }

    #[test]
    fn home_winner_true_in_progress() {
        let doc = scoreboard(vec![event(
            "in",
            json!({ "team": { "abbreviation": "HOM" }, "score": "14", "winner": true }),
            json!({ "team": { "abbreviation": "AWY" }, "score": "7" }),
        )]);
        let records = project(&doc).unwrap();

        assert_eq!(records[0].win.as_deref(), Some("HOM"));
        assert!(!records[0].game_over);
    }

    #[test]
    fn missing_home_winner_means_no_result_regardless_of_score() {
        let doc = scoreboard(vec![event(
            "post",
            json!({ "team": { "abbreviation": "HOM" }, "score": "3" }),
            json!({ "team": { "abbreviation": "AWY" }, "score": "30", "winner": true }),
        )]);
        let records = project(&doc).unwrap();

        assert_eq!(records[0].win, None);
        assert!(records[0].game_over);
    }

    #[test]
    fn only_post_state_is_game_over() {
        for (state, expected) in [("pre", false), ("in", false), ("post", true), ("postponed", false)] {
            let doc = scoreboard(vec![event(
                state,
                json!({ "team": { "abbreviation": "HOM" }, "score": "0" }),
                json!({ "team": { "abbreviation": "AWY" }, "score": "0" }),
            )]);
            assert_eq!(project(&doc).unwrap()[0].game_over, expected, "state {state}");
        }
    }

    #[test]
    fn scores_and_attendance_keep_their_json_types() {
        let doc = scoreboard(vec![event(
            "post",
            json!({ "team": { "abbreviation": "HOM" }, "score": 24, "winner": true }),
            json!({ "team": { "abbreviation": "AWY" }, "score": "10" }),
        )]);
        let record = &project(&doc).unwrap()[0];

        assert_eq!(record.home_score, json!(24));
        assert_eq!(record.away_score, json!("10"));
        assert_eq!(record.attendance, json!(65000));
    }

    #[test]
    fn position_decides_home_not_home_away_tag() {
        let doc = scoreboard(vec![event(
            "post",
            json!({ "homeAway": "away", "team": { "abbreviation": "FIRST" }, "score": "1", "winner": false }),
            json!({ "homeAway": "home", "team": { "abbreviation": "SECOND" }, "score": "2" }),
        )]);
        let record = &project(&doc).unwrap()[0];

        assert_eq!(record.home, "FIRST");
        assert_eq!(record.away, "SECOND");
        assert_eq!(record.win.as_deref(), Some("SECOND"));
    }

    #[test]
    fn empty_week_projects_nothing() {
        assert!(project(&scoreboard(vec![])).unwrap().is_empty());
    }

    #[test]
    fn missing_event_id_is_malformed_with_path() {
        let mut bad = event(
            "pre",
            json!({ "team": { "abbreviation": "HOM" }, "score": "0" }),
            json!({ "team": { "abbreviation": "AWY" }, "score": "0" }),
        );
        bad.as_object_mut().unwrap().remove("id");

        match project(&scoreboard(vec![bad])) {
            Err(Error::MalformedDocument { week, path, message }) => {
                assert_eq!(week, Some(Week::new(3)));
                assert!(path.starts_with("events[0]"), "path: {path}");
                assert!(message.contains("id"), "message: {message}");
            }
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn missing_attendance_is_malformed() {
        let mut bad = event(
            "pre",
            json!({ "team": { "abbreviation": "HOM" }, "score": "0" }),
            json!({ "team": { "abbreviation": "AWY" }, "score": "0" }),
        );
        bad["competitions"][0].as_object_mut().unwrap().remove("attendance");

        let err = project(&scoreboard(vec![bad])).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }), "got {err:?}");
    }

    #[test]
    fn missing_week_number_is_malformed() {
        let err = project(&json!({ "events": [] })).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { week: None, .. }), "got {err:?}");
    }

    #[test]
    fn empty_competitions_is_malformed() {
        let mut bad = event(
            "pre",
            json!({ "team": { "abbreviation": "HOM" }, "score": "0" }),
            json!({ "team": { "abbreviation": "AWY" }, "score": "0" }),
        );
        bad["competitions"] = json!([]);

        match project(&scoreboard(vec![bad])) {
            Err(Error::MalformedDocument { week, path, .. }) => {
                assert_eq!(week, Some(Week::new(3)));
                assert_eq!(path, "events[0].competitions");
            }
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn single_competitor_is_malformed() {
        let mut bad = event(
            "pre",
            json!({ "team": { "abbreviation": "HOM" }, "score": "0" }),
            json!({ "team": { "abbreviation": "AWY" }, "score": "0" }),
        );
        bad["competitions"][0]["competitors"].as_array_mut().unwrap().pop();

        let err = project(&scoreboard(vec![bad])).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }), "got {err:?}");
    }
}
