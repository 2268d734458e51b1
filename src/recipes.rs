//! Bundled Recipes
//!
//! Recipes shipped with the app, served through [`RecipeSource`].

use std::convert::Infallible;

use grocery_core::{RecipeSource, RecipeWithIngredients};

const BUNDLED_RECIPES: &str = include_str!("../assets/recipes.json");

#[derive(Debug, Clone, Default)]
pub struct BundledRecipes {
    recipes: Vec<RecipeWithIngredients>,
}

impl BundledRecipes {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self {
            recipes: serde_json::from_str(json)?,
        })
    }

    /// Recipes compiled into the app; none if the bundle does not parse
    pub fn load() -> Self {
        match Self::from_json(BUNDLED_RECIPES) {
            Ok(recipes) => {
                log::debug!("Loaded {} bundled recipes", recipes.recipes.len());
                recipes
            }
            Err(e) => {
                log::error!("Failed to parse bundled recipes: {}", e);
                Self::default()
            }
        }
    }

    /// `(id, name)` of every recipe, in bundle order
    pub fn names(&self) -> Vec<(String, String)> {
        self.recipes
            .iter()
            .map(|recipe| (recipe.id.clone(), recipe.name.clone()))
            .collect()
    }
}

impl RecipeSource for BundledRecipes {
    type Error = Infallible;

    fn get_recipe(&self, id: &str) -> Result<Option<RecipeWithIngredients>, Self::Error> {
        Ok(self.recipes.iter().find(|recipe| recipe.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocery_core::ingredient_lines;

    #[test]
    fn test_bundle_parses() {
        let recipes = BundledRecipes::load();
        let names = recipes.names();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], ("pizza-dough".to_string(), "Pizza Dough".to_string()));
    }

    #[test]
    fn test_get_recipe_by_id() {
        let recipes = BundledRecipes::load();
        let pizza = recipes.get_recipe("margherita").unwrap().unwrap();
        assert_eq!(
            ingredient_lines(&pizza),
            vec![
                "1 batch Pizza Dough",
                "400 g crushed tomatoes",
                "250 g fresh mozzarella",
                "basil leaves",
            ]
        );
        assert!(recipes.get_recipe("unknown").unwrap().is_none());
    }

    #[test]
    fn test_malformed_bundle_is_an_error() {
        assert!(BundledRecipes::from_json("{}").is_err());
    }
}
