//! Plain-text views over lookup results.

use std::fmt::Write;

use crate::models::Drink;

/// How a single recipe was reached. A drink opened from a result list gets a
/// title and a way back; a random pick is introduced as a suggestion instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    ListFromSearch,
    ListFromRandom,
}

#[must_use]
pub fn render_list(drinks: &[Drink], term: &str) -> String {
    let term = term.trim();
    let mut out = String::new();

    if drinks.is_empty() {
        let _ = writeln!(out, "Nothing found on {term}.");
        return out;
    }

    let _ = writeln!(out, "Showing search result(s) for {term}:");
    let _ = writeln!(out, "{:-<60}", "");
    for drink in drinks {
        let _ = writeln!(out, "{:>7}  {}", drink.id, drink.name);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "To view a recipe: barback show <id>");

    out
}

/// One line per ingredient that has a name, in slot order.
#[must_use]
pub fn ingredient_lines(drink: &Drink) -> Vec<String> {
    drink.ingredients.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn render_detail(drink: &Drink, mode: ViewMode) -> String {
    let mut out = String::new();

    match mode {
        ViewMode::ListFromRandom => {
            let _ = writeln!(out, "How about a {}?", drink.name);
        }
        ViewMode::ListFromSearch => {
            let _ = writeln!(out, "{}", drink.name);
            let _ = writeln!(out, "{:-<60}", "");
        }
    }

    if let Some(thumbnail) = &drink.thumbnail {
        let _ = writeln!(out, "Image: {thumbnail}");
    }

    let lines = ingredient_lines(drink);
    if !lines.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Ingredients:");
        for line in lines {
            let _ = writeln!(out, "  {line}");
        }
    }

    if let Some(instructions) = drink.instructions.as_deref().filter(|i| !i.trim().is_empty()) {
        let _ = writeln!(out);
        let _ = writeln!(out, "Instructions:");
        let _ = writeln!(out, "  {}", instructions.trim());
    }

    if mode == ViewMode::ListFromSearch {
        let _ = writeln!(out);
        let _ = writeln!(out, "Back to the list: barback search <term>");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IngredientLine;

    fn martini() -> Drink {
        Drink {
            id: "11005".to_string(),
            name: "Dry Martini".to_string(),
            thumbnail: Some("https://example.test/martini.jpg".to_string()),
            instructions: Some("Stir with ice.".to_string()),
            ingredients: [("Gin", "2 oz"), ("", "1 oz"), ("Vermouth", "")]
                .iter()
                .filter_map(|(i, m)| IngredientLine::from_slot(Some(*i), Some(*m)))
                .collect(),
        }
    }

    #[test]
    fn test_ingredient_lines_skip_blank_slots() {
        assert_eq!(ingredient_lines(&martini()), vec!["2 oz Gin", " Vermouth"]);
    }

    #[test]
    fn test_random_mode_uses_headline() {
        let text = render_detail(&martini(), ViewMode::ListFromRandom);
        assert!(text.starts_with("How about a Dry Martini?\n"));
        assert!(!text.contains("Back to the list"));
    }

    #[test]
    fn test_search_mode_shows_title_and_way_back() {
        let text = render_detail(&martini(), ViewMode::ListFromSearch);
        assert!(text.starts_with("Dry Martini\n"));
        assert!(text.contains("  2 oz Gin\n"));
        assert!(text.contains("Back to the list"));
    }

    #[test]
    fn test_list_messages() {
        assert_eq!(render_list(&[], " rum "), "Nothing found on rum.\n");

        let text = render_list(&[martini()], "gin");
        assert!(text.starts_with("Showing search result(s) for gin:\n"));
        assert!(text.contains("11005  Dry Martini"));
    }
}
