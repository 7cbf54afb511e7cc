use std::fmt;

use tracing::trace;

/// A pie crust, made from a recipe.
///
/// The recipe is kept exactly as given and never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Crust {
    recipe: String,
}

impl Crust {
    /// Rolls a crust from any recipe text, including an empty one.
    pub fn new(recipe: impl Into<String>) -> Self {
        let recipe: String = recipe.into();
        trace!(recipe = %recipe, "rolled crust");
        Self { recipe }
    }

    /// Describes the layer this crust forms, which is its recipe unchanged.
    pub fn layer(&self) -> &str {
        &self.recipe
    }
}

impl From<&str> for Crust {
    fn from(recipe: &str) -> Self {
        Self::new(recipe)
    }
}

impl From<String> for Crust {
    fn from(recipe: String) -> Self {
        Self::new(recipe)
    }
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_layer_is_recipe() {
        let crust = Crust::new("grandma's secret recipe");
        assert_eq!(crust.layer(), "grandma's secret recipe");
    }

    #[test]
    fn test_layer_keeps_text_untouched() {
        // Whitespace, unicode and newlines are not normalised
        for recipe in ["  flaky  ", "pâte brisée", "line one\nline two", "🥧"] {
            assert_eq!(Crust::new(recipe).layer(), recipe);
        }
    }

    #[test]
    fn test_empty_recipe() {
        let crust = Crust::new("");
        assert_eq!(crust.layer(), "");
        assert_eq!(crust.to_string(), "");
    }

    #[test]
    fn test_from_conversions() {
        let owned: Crust = String::from("shortcrust").into();
        let borrowed: Crust = "shortcrust".into();
        assert_eq!(owned, borrowed);
        assert_eq!(format!("{}", owned), "shortcrust");
    }

    proptest! {
        #[test]
        fn test_layer_returns_any_recipe(recipe in any::<String>()) {
            let crust = Crust::new(recipe.clone());
            prop_assert_eq!(crust.layer(), recipe.as_str());
            prop_assert_eq!(crust.to_string(), recipe);
        }
    }
}
