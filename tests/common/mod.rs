#![allow(dead_code)]

use async_trait::async_trait;
use barback::clients::cocktaildb::{ApiError, DrinkApi};
use barback::models::Drink;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Scripted stand-in for the recipe API that records every call it receives.
#[derive(Default)]
pub struct FakeApi {
    pub non_alcoholic: Vec<Drink>,
    pub by_ingredient: HashMap<String, Vec<Drink>>,
    pub by_name: HashMap<String, Vec<Drink>>,
    pub details: HashMap<String, Drink>,
    pub random: Option<Drink>,
    pub failing: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_random(drink: Drink) -> Self {
        Self {
            random: Some(drink),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split(':').next() == Some(endpoint))
            .count()
    }

    fn record(&self, endpoint: &'static str, arg: &str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(format!("{endpoint}:{arg}"));
        if self.failing.contains(endpoint) {
            return Err(ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "upstream exploded".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DrinkApi for FakeApi {
    async fn filter_non_alcoholic(&self) -> Result<Vec<Drink>, ApiError> {
        self.record("non_alcoholic", "")?;
        Ok(self.non_alcoholic.clone())
    }

    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Drink>, ApiError> {
        self.record("ingredient", ingredient)?;
        Ok(self.by_ingredient.get(ingredient).cloned().unwrap_or_default())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Drink>, ApiError> {
        self.record("name", name)?;
        Ok(self.by_name.get(name).cloned().unwrap_or_default())
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Vec<Drink>, ApiError> {
        self.record("lookup", id)?;
        Ok(self.details.get(id).cloned().into_iter().collect())
    }

    async fn random(&self) -> Result<Vec<Drink>, ApiError> {
        self.record("random", "")?;
        Ok(self.random.clone().into_iter().collect())
    }
}

/// Shape returned by the filter endpoints.
pub fn summary(id: &str, name: &str) -> Drink {
    Drink {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: Some(format!("https://example.test/{id}.jpg")),
        instructions: None,
        ingredients: vec![],
    }
}

/// Shape returned by name search and lookup.
pub fn detailed(id: &str, name: &str) -> Drink {
    Drink {
        instructions: Some(format!("Build {name} over ice.")),
        ..summary(id, name)
    }
}

/// Gin drinks: 11003 matches by name and ingredient, 12560 is non-alcoholic.
pub fn gin_api() -> FakeApi {
    let mut api = FakeApi {
        non_alcoholic: vec![summary("12560", "Afterglow"), summary("99999", "Lemonade")],
        ..FakeApi::default()
    };
    api.by_name.insert(
        "gin".to_string(),
        vec![detailed("11003", "Gin Fizz"), detailed("12560", "Gin-free Fizz")],
    );
    api.by_ingredient.insert(
        "gin".to_string(),
        vec![
            summary("11001", "Gimlet"),
            summary("11003", "Gin Fizz"),
            summary("12560", "Gin-free Fizz"),
            summary("11005", "Dry Martini"),
        ],
    );
    api
}
