pub mod cache {

    pub const SEARCH_TTL_SECONDS: u64 = 60 * 10;

    pub const INGREDIENT_KEY_PREFIX: &str = "searchedIngredient";

    pub const NAME_KEY_PREFIX: &str = "searchedDrinkName";
}

pub mod api {

    pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

    pub const NON_ALCOHOLIC_FILTER: &str = "Non_Alcoholic";
}

pub mod drink {

    /// Upstream exposes `strIngredient1..15` and `strMeasure1..15`.
    pub const MAX_INGREDIENT_SLOTS: usize = 15;
}
