use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    /// Only present on name-search, lookup and random responses.
    pub instructions: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl Drink {
    /// Filter endpoints return id, name and thumbnail only.
    #[must_use]
    pub fn is_detailed(&self) -> bool {
        self.instructions.is_some() || !self.ingredients.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub measure: String,
    pub ingredient: String,
}

impl IngredientLine {
    /// Builds a line from one upstream slot. Blank ingredients yield `None`
    /// so a measure is never shown on its own.
    #[must_use]
    pub fn from_slot(ingredient: Option<&str>, measure: Option<&str>) -> Option<Self> {
        let ingredient = ingredient.filter(|i| !i.trim().is_empty())?;
        Some(Self {
            measure: measure.unwrap_or_default().to_string(),
            ingredient: ingredient.to_string(),
        })
    }
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.measure, self.ingredient)
    }
}
