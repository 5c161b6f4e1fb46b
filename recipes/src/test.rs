// Copyright 2021 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::theme::THEME_KEY;
use crate::*;

fn sample_catalog() -> Catalog {
    Catalog::new().with_recipes(vec![
        Recipe::new(1, "Chocolate Cake", "Dessert")
            .with_ingredients(vec!["flour", "cocoa", "sugar"])
            .with_instructions("1. Mix\n2. Bake")
            .with_rating(5),
        Recipe::new(2, "Pancakes", "Breakfast")
            .with_ingredients(vec!["flour", "milk", "eggs"])
            .with_instructions("Whisk everything\nFry")
            .with_image("/img/pancakes.jpg")
            .with_rating(3),
        Recipe::new(5, "Mole", "dinner")
            .with_ingredients(vec!["chiles", "Dark Chocolate"])
            .with_instructions("Simmer for hours"),
        Recipe::new(7, "Brownies", "DESSERT")
            .with_ingredients(vec!["butter", "sugar"])
            .with_instructions("Bake")
            .with_rating(1),
    ])
}

fn ids(recipes: Vec<&Recipe>) -> Vec<RecipeId> {
    recipes.iter().map(|r| r.id).collect()
}

#[test]
fn test_rating_tier_boundaries() {
    assert_eq!(RatingTier::from_rating(-1), RatingTier::Low);
    assert_eq!(RatingTier::from_rating(0), RatingTier::Low);
    assert_eq!(RatingTier::from_rating(1), RatingTier::Low);
    assert_eq!(RatingTier::from_rating(2), RatingTier::Mid);
    assert_eq!(RatingTier::from_rating(3), RatingTier::Mid);
    assert_eq!(RatingTier::from_rating(4), RatingTier::High);
    assert_eq!(RatingTier::from_rating(5), RatingTier::High);
    assert_eq!(RatingTier::from_rating(4).as_str(), "high");
    assert_eq!(RatingTier::from_rating(2).css_class(), "rate-mid");
}

#[test]
fn test_recipe_display_helpers() {
    let catalog = sample_catalog();
    let cake = catalog.get(1).unwrap();
    assert_eq!(cake.image_src(), PLACEHOLDER_IMAGE);
    assert_eq!(cake.ingredients_text(), "flour, cocoa, sugar");
    assert_eq!(catalog.get(2).unwrap().image_src(), "/img/pancakes.jpg");
    let blank_image = Recipe::new(9, "Toast", "Breakfast").with_image("");
    assert_eq!(blank_image.image_src(), PLACEHOLDER_IMAGE);
}

#[test]
fn test_instruction_steps() {
    assert_eq!(
        instruction_steps("1. Mix the flour\r\n\r\n2.   Add eggs\n\n\n  Bake  \n10.Cool"),
        vec!["Mix the flour", "Add eggs", "Bake", "Cool"]
    );
    assert_eq!(instruction_steps(""), Vec::<String>::new());
    assert_eq!(instruction_steps("\n \n"), Vec::<String>::new());
    // Numbers that aren't followed by a period stay in the step.
    assert_eq!(instruction_steps("2 eggs, beaten"), vec!["2 eggs, beaten"]);
}

#[test]
fn test_next_id_after_load() {
    let catalog = Catalog::new().with_recipes(vec![
        Recipe::new(1, "a", "x"),
        Recipe::new(2, "b", "x"),
        Recipe::new(5, "c", "x"),
    ]);
    assert_eq!(catalog.next_id(), 6);
    let mut empty = catalog.clone();
    empty.replace(Vec::new());
    assert_eq!(empty.next_id(), 1);
    assert_eq!(Catalog::new().next_id(), 1);
}

#[test]
fn test_record_created_advances_next_id() {
    let mut catalog = sample_catalog();
    assert_eq!(catalog.next_id(), 8);
    catalog.record_created(8);
    assert_eq!(catalog.next_id(), 9);
    // An older id never moves the counter backwards.
    catalog.record_created(3);
    assert_eq!(catalog.next_id(), 9);
}

#[test]
fn test_replace_keeps_backend_order() {
    let mut catalog = sample_catalog();
    let reloaded = vec![
        Recipe::new(7, "Brownies", "Dessert"),
        Recipe::new(2, "Pancakes", "Breakfast"),
    ];
    catalog.replace(reloaded.clone());
    assert_eq!(catalog.recipes(), reloaded.as_slice());
}

#[test]
fn test_search() {
    let catalog = sample_catalog();
    assert_eq!(ids(catalog.search("choc")), vec![1, 5]);
    assert_eq!(ids(catalog.search("CHOC")), vec![1, 5]);
    assert_eq!(ids(catalog.search("")), vec![1, 2, 5, 7]);
    assert_eq!(ids(catalog.search("breakfast")), vec![2]);
    // Ingredients are matched as one space joined string.
    assert_eq!(ids(catalog.search("milk eggs")), vec![2]);
    assert!(catalog.search("lasagna").is_empty());
}

#[test]
fn test_filter() {
    let catalog = sample_catalog();
    assert_eq!(ids(catalog.filter(None)), vec![1, 2, 5, 7]);
    assert_eq!(ids(catalog.filter(Some("all"))), vec![1, 2, 5, 7]);
    assert_eq!(ids(catalog.filter(Some("Dessert"))), vec![1, 7]);
    assert_eq!(ids(catalog.filter(Some("Dinner"))), vec![5]);
    // Exact match only, no substrings.
    assert!(catalog.filter(Some("Dess")).is_empty());
}

#[test]
fn test_categories_are_distinct() {
    let catalog = sample_catalog();
    assert_eq!(catalog.categories(), vec!["Dessert", "Breakfast", "dinner"]);
}

#[test]
fn test_start_edit_populates_form() {
    let mut catalog = sample_catalog();
    assert_eq!(catalog.submit_label(), "Add Recipe");
    let form = catalog.start_edit(2).expect("recipe 2 is in the catalog");
    assert_eq!(
        form,
        RecipeForm {
            name: "Pancakes".to_owned(),
            category: "Breakfast".to_owned(),
            ingredients: "flour, milk, eggs".to_owned(),
            instructions: "Whisk everything\nFry".to_owned(),
            image: "/img/pancakes.jpg".to_owned(),
        }
    );
    assert_eq!(catalog.editing_id(), Some(2));
    assert_eq!(catalog.submit_label(), "Save Changes");
    catalog.finish_edit();
    assert_eq!(catalog.submit_label(), "Add Recipe");
}

#[test]
fn test_start_edit_unknown_id_is_noop() {
    let mut catalog = sample_catalog();
    let before = catalog.clone();
    assert!(catalog.start_edit(999).is_none());
    assert_eq!(catalog, before);
    assert_eq!(catalog.submit_label(), "Add Recipe");
}

#[test]
fn test_open_and_close_popup() {
    let mut catalog = sample_catalog();
    assert!(catalog.open(999).is_none());
    assert!(!catalog.is_popup_open());

    assert_eq!(catalog.open(2).map(|r| r.name.as_str()), Some("Pancakes"));
    assert!(catalog.is_popup_open());
    assert_eq!(catalog.stars(), 3);
    assert!(catalog.star_active(2));
    assert!(!catalog.star_active(3));

    catalog.close();
    assert!(!catalog.is_popup_open());
    assert_eq!(catalog.open_recipe_id(), None);
    // Closing twice is harmless.
    catalog.close();
    assert!(catalog.begin_rating(4).is_none());
}

#[test]
fn test_rating_rollback() {
    let mut catalog = sample_catalog();
    catalog.open(7);
    assert_eq!(catalog.begin_rating(4), Some(7));
    assert_eq!(catalog.stars(), 4);
    assert_eq!(
        catalog.pending_rating(),
        Some(PendingRating {
            recipe_id: 7,
            rating: 4,
            previous: 1
        })
    );
    catalog.rollback_rating();
    assert_eq!(catalog.stars(), 1);
    assert_eq!(catalog.pending_rating(), None);
}

#[test]
fn test_stale_rating_failure_leaves_newer_rating() {
    let mut catalog = sample_catalog();
    catalog.open(7);
    catalog.begin_rating(4);
    let first = catalog.pending_rating().expect("rating 4 is pending");
    catalog.begin_rating(2);
    let second = catalog.pending_rating().expect("rating 2 is pending");
    assert_eq!(second.previous, 4);

    // The first write failing must not undo the second one.
    catalog.settle_rating(first, false);
    assert_eq!(catalog.stars(), 2);
    let still_pending = catalog.pending_rating().expect("rating 2 is still pending");
    assert_eq!(still_pending.rating, 2);
    assert_eq!(still_pending.previous, 1);

    // Rating 4 never landed, so failing again goes back to the stored 1.
    catalog.settle_rating(second, false);
    assert_eq!(catalog.stars(), 1);
    assert_eq!(catalog.pending_rating(), None);
}

#[test]
fn test_settle_saved_rating() {
    let mut catalog = sample_catalog();
    catalog.open(2);
    catalog.begin_rating(5);
    let sent = catalog.pending_rating().expect("rating 5 is pending");
    catalog.settle_rating(sent, true);
    assert_eq!(catalog.stars(), 5);
    assert_eq!(catalog.pending_rating(), None);
}

#[test]
fn test_reload_refreshes_open_popup() {
    let mut catalog = sample_catalog();
    catalog.open(7);
    catalog.begin_rating(4);
    catalog.replace(vec![Recipe::new(7, "Brownies", "Dessert").with_rating(4)]);
    assert_eq!(catalog.stars(), 4);
    assert_eq!(catalog.pending_rating(), None);

    // The open recipe disappearing from the backend closes the popup.
    catalog.replace(vec![Recipe::new(1, "Chocolate Cake", "Dessert")]);
    assert!(!catalog.is_popup_open());
}

#[test]
fn test_split_ingredients() {
    assert_eq!(
        split_ingredients(" flour ,sugar,, ,  eggs "),
        vec!["flour", "sugar", "eggs"]
    );
    assert!(split_ingredients(" , ").is_empty());
}

#[test]
fn test_normalize_image() {
    assert_eq!(normalize_image(""), None);
    assert_eq!(normalize_image("   "), None);
    assert_eq!(normalize_image("img/cake.jpg"), Some("/img/cake.jpg".to_owned()));
    assert_eq!(normalize_image(" /img/cake.jpg "), Some("/img/cake.jpg".to_owned()));
    assert_eq!(
        normalize_image("HTTPS://example.com/img/cake.jpg"),
        Some("HTTPS://example.com/img/cake.jpg".to_owned())
    );
    assert_eq!(normalize_image("photos/cake.jpg"), Some("photos/cake.jpg".to_owned()));
}

#[test]
fn test_form_validation() {
    let form = RecipeForm {
        name: "  Soup ".to_owned(),
        category: "Dinner".to_owned(),
        ingredients: "water, salt".to_owned(),
        instructions: "Boil".to_owned(),
        image: "img/soup.png".to_owned(),
    };
    assert_eq!(
        form.validate(),
        Ok(RecipeFields {
            name: "Soup".to_owned(),
            category: "Dinner".to_owned(),
            ingredients: vec!["water".to_owned(), "salt".to_owned()],
            instructions: "Boil".to_owned(),
            image: Some("/img/soup.png".to_owned()),
        })
    );

    let missing_ingredients = RecipeForm {
        ingredients: String::new(),
        ..form.clone()
    };
    assert_eq!(
        missing_ingredients.validate(),
        Err(FormError::MissingField("ingredients"))
    );
    let blank_name = RecipeForm {
        name: "   ".to_owned(),
        ..form.clone()
    };
    assert_eq!(blank_name.validate(), Err(FormError::MissingField("name")));
    assert_eq!(
        format!("{}", blank_name.validate().unwrap_err()),
        "Please fill all fields."
    );
}

#[test]
fn test_theme() {
    assert_eq!(THEME_KEY, "theme");
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().as_str(), "light");
    assert_eq!(Theme::Dark.toggle_label(), "☀️ Light Mode");
    assert_eq!(Theme::Light.toggle_label(), "🌙 Dark Mode");
}

#[test]
fn test_recipe_deserialize_defaults() {
    let recipe: Recipe = serde_json::from_str(
        r#"{"id": 3, "name": "Salad", "category": "Lunch", "instructions": "Toss"}"#,
    )
    .expect("Failed to parse recipe");
    assert_eq!(recipe.ingredients, Vec::<String>::new());
    assert_eq!(recipe.image, None);
    assert_eq!(recipe.rating, 0);
    assert_eq!(recipe.rating_tier(), RatingTier::Low);
}
