use crate::cache::CacheStore;
use crate::client::NflApi;
use crate::{Result, Week};
use log::debug;
use serde_json::Value;

/// Read-through access to weekly scoreboards: the cache answers when it can,
/// otherwise ESPN is asked once and the answer is cached.
#[derive(Debug, Clone)]
pub struct ScoreboardFetcher {
    api: NflApi,
    cache: CacheStore,
}

impl ScoreboardFetcher {
    pub fn new(api: NflApi, cache: CacheStore) -> Self {
        Self { api, cache }
    }

    pub fn api(&self) -> &NflApi {
        &self.api
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// A cached document is returned as is, however old it is. On a miss the
    /// remote document is written to the cache before being returned, so a
    /// failed write fails the fetch.
    pub async fn fetch(&self, week: Week) -> Result<Value> {
        if self.cache.exists(week) {
            debug!("cache hit for week {week}");
            return self.cache.read(week);
        }

        debug!("cache miss for week {week}");
        let document = self.api.fetch_scoreboard(week).await?;
        self.cache.write(week, &document)?;
        Ok(document)
    }
}
