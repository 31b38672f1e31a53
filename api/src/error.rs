use crate::Week;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    /// Week selector was neither a week number nor "all".
    InvalidSelector(String),
    Io { path: PathBuf, source: io::Error },
    /// A cache file exists but does not hold valid JSON.
    CacheCorrupt {
        week: Week,
        path: PathBuf,
        source: serde_json::Error,
    },
    Network(reqwest::Error, String),
    /// The remote answered with a non-success status.
    Remote(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    /// A field the projection needs is absent or has the wrong shape. `week`
    /// is unknown only when the document itself doesn't say.
    MalformedDocument {
        week: Option<Week>,
        path: String,
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSelector(sel) => {
                write!(f, "Invalid week selector {sel:?}: use a week number (1-17) or \"all\"")
            }
            Error::Io { path, source } => write!(f, "I/O error at {}: {source}", path.display()),
            Error::CacheCorrupt { week, path, source } => write!(
                f,
                "Cache entry for week {week} at {} is not valid JSON: {source}",
                path.display()
            ),
            Error::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            Error::Remote(e, url) => write!(f, "Bad response from {url}: {e}"),
            Error::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            Error::MalformedDocument { week: Some(week), path, message } => {
                write!(f, "Malformed scoreboard document for week {week} at `{path}`: {message}")
            }
            Error::MalformedDocument { week: None, path, message } => {
                write!(f, "Malformed scoreboard document at `{path}`: {message}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::CacheCorrupt { source, .. } => Some(source),
            Error::Network(e, _) | Error::Remote(e, _) | Error::Parsing(e, _) => Some(e),
            Error::InvalidSelector(_) | Error::MalformedDocument { .. } => None,
        }
    }
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub(crate) fn malformed(
        week: Option<Week>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::MalformedDocument { week, path: path.into(), message: message.into() }
    }

    /// Pins a malformed-document error to the week it was loaded for.
    pub(crate) fn for_week(self, week: Week) -> Self {
        match self {
            Error::MalformedDocument { path, message, .. } => {
                Error::MalformedDocument { week: Some(week), path, message }
            }
            other => other,
        }
    }

    /// HTTP status of a remote failure, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote(e, _) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_the_week() {
        let err = Error::malformed(None, "events[3].id", "missing field `id`").for_week(Week::new(9));
        assert_eq!(
            err.to_string(),
            "Malformed scoreboard document for week 9 at `events[3].id`: missing field `id`"
        );
    }

    #[test]
    fn for_week_leaves_other_errors_alone() {
        let err = Error::InvalidSelector("x".into()).for_week(Week::new(2));
        assert!(matches!(err, Error::InvalidSelector(_)));
    }
}
