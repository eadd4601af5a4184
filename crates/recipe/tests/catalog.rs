use mealwise_recipe::{RecipeCatalog, RecipeCategory, RecipeSource};

#[test]
fn test_scaling_is_linear_across_catalog() -> anyhow::Result<()> {
    let catalog = RecipeCatalog::builtin()?;

    for recipe in catalog.recipes() {
        let target = recipe.servings * 3;
        let factor = recipe.scale_factor(target);
        let scaled = recipe.scaled(target);

        assert_eq!(scaled.servings, target);
        assert_eq!(scaled.ingredients.len(), recipe.ingredients.len());
        for (original, scaled) in recipe.ingredients.iter().zip(&scaled.ingredients) {
            assert!(
                (scaled.amount - original.amount * factor).abs() < 1e-9,
                "{} in {} did not scale linearly",
                original.name,
                recipe.name
            );
            assert!((scaled.estimated_price - original.estimated_price * factor).abs() < 1e-9);
            assert_eq!(scaled.unit, original.unit);
        }
        assert!((scaled.estimated_cost - recipe.estimated_cost * 3.0).abs() < 1e-9);
        assert!((scaled.nutrition.protein - recipe.nutrition.protein * 3.0).abs() < 1e-9);
        assert_eq!(scaled.nutrition.calories, recipe.nutrition.calories * 3);

        assert_eq!(
            &recipe.scaled(recipe.servings),
            recipe,
            "Base yield is unchanged"
        );
    }

    Ok(())
}

#[test]
fn test_queries_never_mutate_and_keep_order() -> anyhow::Result<()> {
    let catalog = RecipeCatalog::builtin()?;
    let before = catalog.clone();

    let breakfasts = catalog.by_category(RecipeCategory::Breakfast);
    let vegan = catalog.by_dietary_tag("VEGAN");
    let quick = catalog.quick_meals(15);
    let nothing = catalog.search("no such recipe anywhere");

    assert_eq!(breakfasts.len(), 5);
    assert!(vegan.iter().all(|r| r.dietary_info.vegan));
    assert!(quick.iter().all(|r| r.total_time() <= 15));
    assert!(nothing.is_empty());

    let positions: Vec<usize> = quick
        .iter()
        .map(|r| {
            catalog
                .recipes()
                .iter()
                .position(|c| c.id == r.id)
                .unwrap()
        })
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "Catalog order is kept"
    );

    assert_eq!(catalog.recipes(), before.recipes());

    Ok(())
}
