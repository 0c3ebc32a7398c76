//! Recipe registry. Edit order is registration order and deterministic.

use super::provider_factories::ProviderFactoriesRecipe;
use super::requires_introspection::RequiresIntrospectionRecipe;
use super::traits::Recipe;

pub struct RecipeRegistry {
    recipes: Vec<Box<dyn Recipe>>,
}

impl RecipeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// The standard registry: both canonical recipes.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ProviderFactoriesRecipe));
        registry.register(Box::new(RequiresIntrospectionRecipe));
        registry
    }

    pub fn register(&mut self, recipe: Box<dyn Recipe>) {
        self.recipes.push(recipe);
    }

    pub fn recipes(&self) -> &[Box<dyn Recipe>] {
        &self.recipes
    }

    pub fn ids(&self) -> Vec<String> {
        self.recipes.iter().map(|r| r.id().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_order() {
        let registry = RecipeRegistry::standard();
        assert_eq!(
            registry.ids(),
            ["provider-factories", "requires-introspection"]
        );
    }
}
