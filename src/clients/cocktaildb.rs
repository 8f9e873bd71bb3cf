use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::constants::api::NON_ALCOHOLIC_FILTER;
use crate::constants::drink::MAX_INGREDIENT_SLOTS;
use crate::models::{Drink, IngredientLine};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CocktailDB API error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

/// Read-only view of the recipe API. Terms passed in are already normalized.
#[async_trait]
pub trait DrinkApi: Send + Sync {
    async fn filter_non_alcoholic(&self) -> Result<Vec<Drink>, ApiError>;

    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Drink>, ApiError>;

    async fn search_by_name(&self, name: &str) -> Result<Vec<Drink>, ApiError>;

    async fn lookup_by_id(&self, id: &str) -> Result<Vec<Drink>, ApiError>;

    async fn random(&self) -> Result<Vec<Drink>, ApiError>;
}

#[derive(Debug, Deserialize)]
struct DrinksResponse {
    #[serde(default)]
    drinks: Option<DrinkList>,
}

/// Misses come back as `null`, or as a placeholder string on the filter endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DrinkList {
    Found(Vec<RawDrink>),
    Placeholder(String),
}

#[derive(Debug, Deserialize)]
struct RawDrink {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink", default)]
    name: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

fn measure_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl From<RawDrink> for Drink {
    fn from(raw: RawDrink) -> Self {
        let ingredients = (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let ingredient = raw
                    .slots
                    .get(&format!("strIngredient{slot}"))
                    .and_then(Value::as_str);
                let measure = raw
                    .slots
                    .get(&format!("strMeasure{slot}"))
                    .and_then(measure_text);
                IngredientLine::from_slot(ingredient, measure.as_deref())
            })
            .collect();

        Self {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            thumbnail: raw.thumbnail,
            instructions: raw.instructions,
            ingredients,
        }
    }
}

/// Parses a `{"drinks": ...}` body. Empty bodies and null/placeholder
/// `drinks` fields are a successful empty result.
pub fn parse_drinks(body: &str) -> Result<Vec<Drink>, ApiError> {
    if body.trim().is_empty() {
        return Ok(vec![]);
    }

    let response: DrinksResponse = serde_json::from_str(body)?;

    Ok(match response.drinks {
        Some(DrinkList::Found(drinks)) => drinks.into_iter().map(Drink::from).collect(),
        Some(DrinkList::Placeholder(text)) => {
            debug!("CocktailDB returned placeholder instead of drinks: {}", text);
            vec![]
        }
        None => vec![],
    })
}

#[derive(Clone)]
pub struct CocktailDbClient {
    client: Client,
    base_url: String,
}

impl CocktailDbClient {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::builder()
                .user_agent(config.user_agent.as_str())
                .timeout(Duration::from_secs(config.request_timeout_seconds))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}/{path}", self.base_url))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn fetch_drinks(&self, url: Url) -> Result<Vec<Drink>, ApiError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let body = response.text().await?;
        parse_drinks(&body)
    }
}

#[async_trait]
impl DrinkApi for CocktailDbClient {
    async fn filter_non_alcoholic(&self) -> Result<Vec<Drink>, ApiError> {
        let url = self.endpoint("filter.php", &[("a", NON_ALCOHOLIC_FILTER)])?;
        self.fetch_drinks(url).await
    }

    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Drink>, ApiError> {
        let url = self.endpoint("filter.php", &[("i", ingredient)])?;
        self.fetch_drinks(url).await
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Drink>, ApiError> {
        let url = self.endpoint("search.php", &[("s", name)])?;
        self.fetch_drinks(url).await
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Vec<Drink>, ApiError> {
        let url = self.endpoint("lookup.php", &[("i", id)])?;
        self.fetch_drinks(url).await
    }

    async fn random(&self) -> Result<Vec<Drink>, ApiError> {
        let url = self.endpoint("random.php", &[])?;
        self.fetch_drinks(url).await
    }
}
