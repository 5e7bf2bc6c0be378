//! Integration tests for sample catalog seeding.

use fastfood_seed::db::{CatalogStore, MemoryStore};
use fastfood_seed::models::NewCategory;
use fastfood_seed::seeders::sample_data::{BUBBLE_MILK_TEA, CREAM_PUFF, DRINKS, FLAN, SWEETS};
use fastfood_seed::seeders::{
    SeedError, seed_categories, seed_combos, seed_food_items, seed_sample_data,
};
use rust_decimal::Decimal;

#[tokio::test]
async fn test_empty_store_gets_full_sample() {
    let store = MemoryStore::new();

    seed_sample_data(&store).await.expect("seeding sample data");

    let counts = store.counts().await.expect("counts");
    assert_eq!(counts.categories, 2);
    assert_eq!(counts.food_items, 3);
    assert_eq!(counts.combos, 1);
    assert_eq!(counts.combo_items, 2);

    let puff = store
        .find_food_item_by_name(CREAM_PUFF)
        .await
        .expect("lookup")
        .expect("cream puff exists");
    let sweets = store
        .find_category_by_name(SWEETS)
        .await
        .expect("lookup")
        .expect("sweets exists");
    assert_eq!(puff.category_id, sweets.id);
    assert_eq!(puff.price.amount(), Decimal::new(349, 2));
    assert!(
        store
            .find_category_by_name(DRINKS)
            .await
            .expect("lookup")
            .is_some()
    );
}

#[tokio::test]
async fn test_rerun_adds_nothing() {
    let store = MemoryStore::new();

    seed_sample_data(&store).await.expect("first run");
    let before = store.counts().await.expect("counts");
    seed_sample_data(&store).await.expect("second run");
    let after = store.counts().await.expect("counts");

    assert_eq!(before.categories, after.categories);
    assert_eq!(before.food_items, after.food_items);
    assert_eq!(before.combos, after.combos);
    assert_eq!(before.combo_items, after.combo_items);
}

#[tokio::test]
async fn test_combo_before_food_items_leaves_no_combo() {
    let store = MemoryStore::new();
    seed_categories(&store).await.expect("seeding categories");

    let err = seed_combos(&store).await.expect_err("food items missing");

    assert!(matches!(err, SeedError::MissingFoodItem(ref name) if name == FLAN));
    let counts = store.counts().await.expect("counts");
    assert_eq!(counts.combos, 0);
    assert_eq!(counts.combo_items, 0);

    seed_food_items(&store).await.expect("seeding food items");
    seed_combos(&store).await.expect("seeding combo");
    assert_eq!(store.counts().await.expect("counts").combo_items, 2);
}

#[tokio::test]
async fn test_combo_price_and_members() {
    let store = MemoryStore::new();
    seed_sample_data(&store).await.expect("seeding sample data");

    let flan = store
        .find_food_item_by_name(FLAN)
        .await
        .expect("lookup")
        .expect("flan exists");
    let tea = store
        .find_food_item_by_name(BUBBLE_MILK_TEA)
        .await
        .expect("lookup")
        .expect("milk tea exists");
    assert_eq!(tea.description, "Trà sữa thơm béo kèm trân châu dẻo dai.");
    assert_eq!(tea.image_url, "/images/tstc.jpg");

    let combo = store
        .find_combo_by_name("Combo Bánh Flan + Trà Sữa")
        .await
        .expect("lookup")
        .expect("combo exists");
    assert_eq!(combo.price.amount(), Decimal::new(499, 2));
    assert_eq!(combo.description, "Kết hợp ngọt ngào giữa bánh và trà sữa.");

    let members: Vec<_> = store
        .list_combo_items(combo.id)
        .await
        .expect("combo items")
        .into_iter()
        .map(|item| (item.food_item_id, item.quantity))
        .collect();
    assert_eq!(members, [(flan.id, 1), (tea.id, 1)]);
}

#[tokio::test]
async fn test_foreign_categories_block_sample_categories_only() {
    let store = MemoryStore::new();
    store
        .insert_categories(&[NewCategory {
            name: "Cơm".to_string(),
        }])
        .await
        .expect("insert");

    let err = seed_sample_data(&store)
        .await
        .expect_err("sample categories were skipped");

    assert!(matches!(err, SeedError::MissingCategory(ref name) if name == SWEETS));
    assert_eq!(store.counts().await.expect("counts").food_items, 0);
}
