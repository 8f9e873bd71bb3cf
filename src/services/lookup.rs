//! Search pipeline over the recipe API.
//!
//! A search issues three queries concurrently (non-alcoholic reference list,
//! ingredient match, name match), then merges name matches ahead of
//! ingredient matches, dropping repeated ids and optionally everything not in
//! the non-alcoholic list. Ingredient and name queries go through the cache;
//! the reference list, detail and random lookups never do.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CacheStore, CachedResult, Clock, QueryKind};
use crate::clients::cocktaildb::{ApiError, DrinkApi};
use crate::models::{Drink, NormalizedTerm};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter a search term")]
    InvalidInput,

    /// Cause is kept for logging only; callers see one generic condition.
    #[error("Something went wrong, try again")]
    Fetch(#[source] ApiError),

    #[error("No drink found with id {0}")]
    NotFound(String),

    #[error("No random drink available right now")]
    NoRandomDrink,
}

fn fetch_failure(what: &str, err: ApiError) -> LookupError {
    warn!("{} failed: {}", what, err);
    LookupError::Fetch(err)
}

pub struct LookupService {
    api: Arc<dyn DrinkApi>,
    cache: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl LookupService {
    #[must_use]
    pub fn new(
        api: Arc<dyn DrinkApi>,
        cache: Arc<dyn CacheStore>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            api,
            cache,
            clock,
            ttl,
        }
    }

    /// Ids of every drink the API lists as non-alcoholic. Fetched fresh each call.
    pub async fn fetch_non_alcoholic_set(&self) -> Result<HashSet<String>, LookupError> {
        let drinks = self
            .api
            .filter_non_alcoholic()
            .await
            .map_err(|e| fetch_failure("Non-alcoholic list", e))?;

        Ok(drinks.into_iter().map(|d| d.id).collect())
    }

    pub async fn fetch_by_ingredient(&self, term: &str) -> Result<Vec<Drink>, LookupError> {
        self.fetch_cached(QueryKind::Ingredient, term).await
    }

    pub async fn fetch_by_name(&self, term: &str) -> Result<Vec<Drink>, LookupError> {
        self.fetch_cached(QueryKind::Name, term).await
    }

    async fn fetch_cached(&self, kind: QueryKind, term: &str) -> Result<Vec<Drink>, LookupError> {
        let term = NormalizedTerm::new(term).ok_or(LookupError::InvalidInput)?;
        let key = CacheKey::new(kind, term);

        match self
            .cache
            .get_fresh(&key, self.clock.now_ms(), self.ttl)
            .await
        {
            Ok(Some(entry)) => {
                debug!("Cache hit for {}", key);
                metrics::counter!("barback_cache_hits_total", "kind" => kind.as_str()).increment(1);
                return Ok(entry.drinks);
            }
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for {}: {}", key, e),
        }

        metrics::counter!("barback_cache_misses_total", "kind" => kind.as_str()).increment(1);

        let query = key.term.as_str();
        let drinks = match kind {
            QueryKind::Ingredient => self.api.filter_by_ingredient(query).await,
            QueryKind::Name => self.api.search_by_name(query).await,
        }
        .map_err(|e| fetch_failure(&format!("{} search for '{query}'", kind.as_str()), e))?;

        debug!("Fetched {} drinks for {}", drinks.len(), key);

        let entry = CachedResult::new(drinks, self.clock.now_ms());
        if let Err(e) = self.cache.set(&key, &entry).await {
            warn!("Failed to cache results for {}: {}", key, e);
        }

        Ok(entry.drinks)
    }

    /// Runs all three queries and merges them. Any single failure fails the
    /// whole search; blank terms are rejected before anything is sent.
    pub async fn search(
        &self,
        term: &str,
        only_non_alcoholic: bool,
    ) -> Result<Vec<Drink>, LookupError> {
        if NormalizedTerm::new(term).is_none() {
            return Err(LookupError::InvalidInput);
        }

        info!(
            "Searching for '{}' (non-alcoholic only: {})",
            term.trim(),
            only_non_alcoholic
        );

        let (non_alcoholic, by_ingredient, by_name) = tokio::try_join!(
            self.fetch_non_alcoholic_set(),
            self.fetch_by_ingredient(term),
            self.fetch_by_name(term),
        )?;

        let facet = only_non_alcoholic.then_some(&non_alcoholic);
        let results = merge_results(by_name, by_ingredient, facet);

        debug!("Search for '{}' produced {} results", term.trim(), results.len());

        Ok(results)
    }

    /// Full recipe for one drink. Not cached.
    pub async fn get_detail(&self, id: &str) -> Result<Drink, LookupError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(LookupError::InvalidInput);
        }

        self.api
            .lookup_by_id(id)
            .await
            .map_err(|e| fetch_failure(&format!("Lookup of drink {id}"), e))?
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound(id.to_string()))
    }

    /// One arbitrary drink with full recipe. Not cached.
    pub async fn get_random(&self) -> Result<Drink, LookupError> {
        self.api
            .random()
            .await
            .map_err(|e| fetch_failure("Random drink", e))?
            .into_iter()
            .next()
            .ok_or(LookupError::NoRandomDrink)
    }
}

/// Name matches first, then ingredient matches whose id has not been kept yet.
/// With `non_alcoholic` set, only drinks whose id is in it survive.
#[must_use]
pub fn merge_results(
    by_name: Vec<Drink>,
    by_ingredient: Vec<Drink>,
    non_alcoholic: Option<&HashSet<String>>,
) -> Vec<Drink> {
    let allowed = |drink: &Drink| non_alcoholic.is_none_or(|ids| ids.contains(&drink.id));

    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(by_name.len() + by_ingredient.len());

    for drink in by_name.into_iter().chain(by_ingredient) {
        if allowed(&drink) && seen.insert(drink.id.clone()) {
            merged.push(drink);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drink(id: &str, instructions: Option<&str>) -> Drink {
        Drink {
            id: id.to_string(),
            name: format!("Drink {id}"),
            thumbnail: None,
            instructions: instructions.map(ToString::to_string),
            ingredients: vec![],
        }
    }

    fn ids(drinks: &[Drink]) -> Vec<&str> {
        drinks.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_name_matches_win_on_duplicate_ids() {
        let by_name = vec![drink("2", Some("Stir.")), drink("1", Some("Shake."))];
        let by_ingredient = vec![drink("1", None), drink("3", None)];

        let merged = merge_results(by_name, by_ingredient, None);

        assert_eq!(ids(&merged), vec!["2", "1", "3"]);
        assert_eq!(merged[1].instructions.as_deref(), Some("Shake."));
    }

    #[test]
    fn test_facet_filters_both_sets() {
        let non_alcoholic: HashSet<String> = ["1", "4"].iter().map(ToString::to_string).collect();
        let by_name = vec![drink("1", Some("x")), drink("2", Some("y"))];
        let by_ingredient = vec![drink("3", None), drink("4", None), drink("1", None)];

        let merged = merge_results(by_name, by_ingredient, Some(&non_alcoholic));

        assert_eq!(ids(&merged), vec!["1", "4"]);
        assert!(merged[0].is_detailed());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_results(vec![], vec![], None).is_empty());
        let empty = HashSet::new();
        assert!(merge_results(vec![drink("1", None)], vec![], Some(&empty)).is_empty());
    }
}
