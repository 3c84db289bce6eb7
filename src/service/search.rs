//! Mod database search.
//!
//! The database is a handful of static JSON files. A search downloads the
//! file for the chosen category, scans it linearly, and resolves each hit's
//! game title from the shared category list.

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::AppError,
    model::mod_database::{categories_url, CategoryList, ModDatabase, ModEntry, SearchCategory},
    service::fetch::HttpFetcher,
};

/// A matching entry together with the title of the game it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModSearchHit {
    pub game_title: String,
    pub entry: ModEntry,
}

pub struct ModSearchService<'a> {
    fetcher: &'a dyn HttpFetcher,
    categories_url: String,
}

impl<'a> ModSearchService<'a> {
    pub fn new(fetcher: &'a dyn HttpFetcher) -> Self {
        Self {
            fetcher,
            categories_url: categories_url(),
        }
    }

    /// Searches `category` for entries mentioning `query`.
    ///
    /// # Arguments
    /// - `category` - Category whose database file is searched
    /// - `query` - Case-insensitive substring matched against name and description
    ///
    /// # Returns
    /// - `Ok(Vec<ModSearchHit>)` - Matches in database order; empty when nothing matched
    /// - `Err(AppError)` - Either file could not be fetched or decoded
    pub async fn search(
        &self,
        category: SearchCategory,
        query: &str,
    ) -> Result<Vec<ModSearchHit>, AppError> {
        self.search_at(&category.database_url(), query).await
    }

    /// Searches the database file at `database_url`.
    pub async fn search_at(
        &self,
        database_url: &str,
        query: &str,
    ) -> Result<Vec<ModSearchHit>, AppError> {
        let database: ModDatabase = self.fetch_json(database_url).await?;
        let matches = filter_entries(database.mods, query);

        tracing::debug!(
            "Search for '{}' in {} matched {} entries",
            query,
            database_url,
            matches.len()
        );

        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let categories: CategoryList = self.fetch_json(&self.categories_url).await?;

        Ok(matches
            .into_iter()
            .map(|entry| ModSearchHit {
                game_title: categories.title_for(&entry.category_id).to_string(),
                entry,
            })
            .collect())
    }

    /// Fetches a JSON document. The host serves `text/plain`, so the content
    /// type is not checked.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let url = Url::parse(url)?;
        let response = self.fetcher.fetch(&url).await?;

        if !response.status.is_success() {
            return Err(AppError::UpstreamStatus {
                url: url.to_string(),
                status: response.status.as_u16(),
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    #[cfg(test)]
    fn with_categories_url(mut self, url: &str) -> Self {
        self.categories_url = url.to_string();
        self
    }
}

/// Keeps entries whose name or description contains `query`, ignoring case.
///
/// The query is matched as given, surrounding whitespace included. Input order
/// is preserved.
pub fn filter_entries(entries: Vec<ModEntry>, query: &str) -> Vec<ModEntry> {
    let needle = query.to_lowercase();

    entries
        .into_iter()
        .filter(|entry| entry.matches(&needle))
        .collect()
}

#[cfg(test)]
mod test;
