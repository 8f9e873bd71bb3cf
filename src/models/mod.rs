pub mod drink;
pub mod term;

pub use drink::{Drink, IngredientLine};
pub use term::NormalizedTerm;
