use crate::model::{IngredientLine, IngredientSlot};

/// Number of ingredient/measure positions a recipe record carries
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Turn ingredient slots into display lines
///
/// Ingredients are front-packed, so the first slot without an ingredient
/// name ends the list even if later slots hold values. Slots past
/// [`MAX_INGREDIENT_SLOTS`] are ignored.
pub fn extract_ingredients(slots: &[IngredientSlot]) -> Vec<IngredientLine> {
    slots
        .iter()
        .take(MAX_INGREDIENT_SLOTS)
        .map_while(|slot| {
            let ingredient = slot.ingredient.as_deref().map(str::trim)?;
            if ingredient.is_empty() {
                return None;
            }
            Some(IngredientLine {
                ingredient: ingredient.to_string(),
                measure: slot.measure.as_deref().map(str::trim).unwrap_or("").to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(ingredient: Option<&str>, measure: Option<&str>) -> IngredientSlot {
        IngredientSlot {
            ingredient: ingredient.map(String::from),
            measure: measure.map(String::from),
        }
    }

    #[test]
    fn test_no_slots() {
        assert!(extract_ingredients(&[]).is_empty());
    }

    #[test]
    fn test_trims_and_defaults_measure() {
        let lines = extract_ingredients(&[
            slot(Some("  Chicken  "), Some(" 2 lbs ")),
            slot(Some("Salt"), None),
        ]);
        assert_eq!(
            lines,
            vec![
                IngredientLine {
                    ingredient: "Chicken".to_string(),
                    measure: "2 lbs".to_string(),
                },
                IngredientLine {
                    ingredient: "Salt".to_string(),
                    measure: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_stops_at_first_empty_slot() {
        // Blank, whitespace-only and absent names all terminate the list
        for empty in [None, Some(""), Some("   ")] {
            let lines = extract_ingredients(&[
                slot(Some("Rice"), Some("1 cup")),
                slot(empty, Some("2 tbsp")),
                slot(Some("Butter"), Some("1 knob")),
            ]);
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].ingredient, "Rice");
        }
    }

    #[test]
    fn test_empty_first_slot_yields_nothing() {
        let lines = extract_ingredients(&[slot(None, None), slot(Some("Egg"), Some("1"))]);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_caps_at_twenty_slots() {
        let slots: Vec<_> = (0..25)
            .map(|i| IngredientSlot::new(format!("Item {i}"), ""))
            .collect();
        let lines = extract_ingredients(&slots);
        assert_eq!(lines.len(), MAX_INGREDIENT_SLOTS);
        assert_eq!(lines[19].ingredient, "Item 19");
    }

    #[test]
    fn test_repeatable() {
        let slots = vec![IngredientSlot::new("Flour", "200g")];
        assert_eq!(extract_ingredients(&slots), extract_ingredients(&slots));
    }
}
