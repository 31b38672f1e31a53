use crate::{Error, Result, Week};
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "week-";
const FILE_SUFFIX: &str = ".json";

/// One JSON file per week under a root directory.
///
/// A file's existence is the whole validity check: no TTL, no checksum. Callers
/// only write on a miss, so entries are never refreshed once stored.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/week-<N>.json`
    pub fn path_for(&self, week: Week) -> PathBuf {
        self.root.join(format!("{FILE_PREFIX}{week}{FILE_SUFFIX}"))
    }

    pub fn exists(&self, week: Week) -> bool {
        self.path_for(week).is_file()
    }

    pub fn read(&self, week: Week) -> Result<Value> {
        let path = self.path_for(week);
        let raw = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        serde_json::from_str(&raw).map_err(|source| Error::CacheCorrupt { week, path, source })
    }

    /// Writes the document pretty-printed with a 2-space indent. The root
    /// directory must already exist.
    pub fn write(&self, week: Week, document: &Value) -> Result<()> {
        let path = self.path_for(week);
        let body = serde_json::to_string_pretty(document).map_err(|e| Error::io(&path, e.into()))?;
        fs::write(&path, body).map_err(|e| Error::io(&path, e))?;
        debug!("cached week {week} at {}", path.display());
        Ok(())
    }

    /// Creates the root directory if it is missing. Returns `true` when it had
    /// to be created.
    pub fn ensure_root(&self) -> Result<bool> {
        if self.root.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.root).map_err(|e| Error::io(&self.root, e))?;
        Ok(true)
    }

    /// Weeks currently cached, ascending. Only names `path_for` would produce
    /// count: `week-07.json` or `week-+7.json` are left alone.
    pub fn entries(&self) -> Result<Vec<Week>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let mut weeks = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(|e| Error::io(&self.root, e))? {
            let entry = entry.map_err(|e| Error::io(&self.root, e))?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(week) = entry.file_name().to_str().and_then(week_from_file_name) {
                weeks.push(week);
            }
        }
        weeks.sort_unstable();
        Ok(weeks)
    }

    /// Removes every cached week file and returns how many were deleted. The
    /// root directory itself and unrelated files are left alone.
    pub fn clear(&self) -> Result<usize> {
        let weeks = self.entries()?;
        for &week in &weeks {
            let path = self.path_for(week);
            fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
            debug!("removed {}", path.display());
        }
        Ok(weeks.len())
    }
}

fn week_from_file_name(name: &str) -> Option<Week> {
    let digits = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    let week = digits.parse::<u32>().ok().map(Week::new)?;
    (week.to_string() == digits).then_some(week)
}
