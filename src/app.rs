use crate::render;
use crate::settings::Settings;
use anyhow::{Context, bail};
use log::{debug, info, warn};
use nfl_api::cache::CacheStore;
use nfl_api::client::NflApi;
use nfl_api::fetcher::ScoreboardFetcher;
use nfl_api::summary::{WeekFailure, accumulate};
use nfl_api::{GameRecord, weeks};

/// Week used by `--json` when no `--weeks` selection was made.
const DEFAULT_JSON_WEEK: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Clean,
    Sanity { payload: String },
    FetchWeeks { selector: String },
    EmitJson,
    Summary { selector: String },
}

pub struct App {
    pub settings: Settings,
    fetcher: ScoreboardFetcher,
    /// Records loaded by `FetchWeeks`, consumed by `EmitJson`.
    fetched: Option<Vec<GameRecord>>,
    failures: Vec<WeekFailure>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let api = NflApi::new()
            .with_base_url(settings.base_url.clone())
            .with_timeout(settings.timeout);
        let cache = CacheStore::new(settings.cache_dir.clone());

        Self {
            fetcher: ScoreboardFetcher::new(api, cache),
            settings,
            fetched: None,
            failures: Vec::new(),
        }
    }

    /// Make sure the cache folder exists before anything reads or writes it.
    pub fn bootstrap(&self) -> anyhow::Result<()> {
        let cache = self.fetcher.cache();
        let created = cache
            .ensure_root()
            .with_context(|| format!("preparing cache folder {}", cache.root().display()))?;
        if created {
            info!("{} did not exist; created it", cache.root().display());
        }
        Ok(())
    }

    pub async fn run(&mut self, actions: Vec<Action>) -> anyhow::Result<()> {
        if actions.is_empty() {
            warn!("nothing to do; see --help");
            return Ok(());
        }

        for action in actions {
            if let Some(output) = self.execute(action).await? {
                println!("{output}");
            }
        }
        self.finish()
    }

    /// Run one step. Returns what should go to stdout, if anything.
    pub async fn execute(&mut self, action: Action) -> anyhow::Result<Option<String>> {
        debug!("running {action:?}");
        match action {
            Action::Clean => self.handle_clean().map(|_| None),
            Action::Sanity { payload } => self.handle_sanity(&payload).await.map(Some),
            Action::FetchWeeks { selector } => self.handle_fetch_weeks(&selector).await.map(|_| None),
            Action::EmitJson => self.handle_emit_json().await.map(Some),
            Action::Summary { selector } => self.handle_summary(&selector).await.map(Some),
        }
    }

    /// Weeks skipped under `--keep-going` turn into a failing exit once all
    /// output has been written.
    pub fn finish(&mut self) -> anyhow::Result<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        eprintln!("{}", render::failures(&self.failures));
        bail!("{} week(s) could not be loaded", self.failures.len())
    }

    // -----------------------------------------------------------------------
    // Step handlers
    // -----------------------------------------------------------------------

    fn handle_clean(&self) -> anyhow::Result<()> {
        let cache = self.fetcher.cache();
        let removed = cache
            .clear()
            .with_context(|| format!("clearing cache folder {}", cache.root().display()))?;
        info!("removed {removed} cached week(s) from {}", cache.root().display());
        Ok(())
    }

    async fn handle_sanity(&self, payload: &str) -> anyhow::Result<String> {
        let echo = self
            .fetcher
            .api()
            .sanity(payload)
            .await
            .context("sanity check against the echo endpoint")?;
        Ok(format!("Status code: {}\nResponse data:\n{}", echo.status, echo.body))
    }

    async fn handle_fetch_weeks(&mut self, selector: &str) -> anyhow::Result<()> {
        info!("handling weeks: {selector}");
        let records = self.collect(selector).await?;
        self.fetched = Some(records);
        Ok(())
    }

    async fn handle_emit_json(&mut self) -> anyhow::Result<String> {
        let records = match self.fetched.take() {
            Some(records) => records,
            None => self.collect(DEFAULT_JSON_WEEK).await?,
        };
        render::json(&records).context("serializing game records")
    }

    async fn handle_summary(&mut self, selector: &str) -> anyhow::Result<String> {
        let records = self.collect(selector).await?;
        Ok(render::table(&records))
    }

    async fn collect(&mut self, selector: &str) -> anyhow::Result<Vec<GameRecord>> {
        let weeks = weeks::resolve(Some(selector))
            .with_context(|| format!("resolving week selector {selector:?}"))?;
        let summary = accumulate(&self.fetcher, &weeks, self.settings.policy)
            .await
            .with_context(|| format!("loading scoreboards for {selector:?}"))?;
        self.failures.extend(summary.failures);
        Ok(summary.records)
    }
}
