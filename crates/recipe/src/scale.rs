use crate::{Recipe, RecipeIngredient};

impl Recipe {
    /// Factor that takes the base yield to `target_servings`.
    pub fn scale_factor(&self, target_servings: u32) -> f64 {
        if self.servings == 0 {
            return 1.0;
        }

        target_servings as f64 / self.servings as f64
    }

    /// Linear rescale of ingredient amounts, prices, cost and nutrition.
    ///
    /// Units and aisles are untouched. Scaling to the base yield returns an equal recipe.
    pub fn scaled(&self, target_servings: u32) -> Recipe {
        if target_servings == self.servings {
            return self.clone();
        }

        let factor = self.scale_factor(target_servings);

        tracing::trace!(
            recipe = %self.name,
            from = self.servings,
            to = target_servings,
            factor,
            "scaling recipe"
        );

        Recipe {
            servings: target_servings,
            ingredients: self
                .ingredients
                .iter()
                .map(|ingredient| ingredient.scaled(factor))
                .collect(),
            nutrition: self.nutrition.scale(factor),
            estimated_cost: self.estimated_cost * factor,
            ..self.clone()
        }
    }
}

impl RecipeIngredient {
    pub fn scaled(&self, factor: f64) -> RecipeIngredient {
        RecipeIngredient {
            amount: self.amount * factor,
            estimated_price: self.estimated_price * factor,
            ..self.clone()
        }
    }
}
