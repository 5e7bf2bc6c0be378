//! In-process store implementing every collaborator trait.
//!
//! Enforces the same unique and foreign-key rules as the `PostgreSQL` schema
//! so seeders behave identically against it. Used by tests and by
//! `ff-cli seed --dry-run`.

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use fastfood_core::{
    CategoryId, ComboId, Email, FoodItemId, RoleId, RoleName, UserId, normalize,
};

use super::{CatalogStore, RepositoryError, RoleStore, UserStore};
use crate::models::{
    CatalogCounts, Category, Combo, ComboItem, FoodItem, NewCategory, NewCombo, NewFoodItem,
    NewUser, Role, User,
};

struct StoredUser {
    user: User,
    normalized_user_name: String,
    normalized_email: String,
    password_hash: String,
}

#[derive(Default)]
struct Sequences {
    roles: i32,
    users: i32,
    categories: i32,
    food_items: i32,
    combos: i32,
}

fn next(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

#[derive(Default)]
struct State {
    seq: Sequences,
    roles: Vec<Role>,
    users: Vec<StoredUser>,
    user_roles: Vec<(UserId, RoleId)>,
    categories: Vec<Category>,
    food_items: Vec<FoodItem>,
    combos: Vec<Combo>,
    combo_items: Vec<ComboItem>,
}

impl State {
    fn role_by_name(&self, name: &str) -> Option<&Role> {
        let normalized = normalize(name);
        self.roles.iter().find(|r| normalize(&r.name) == normalized)
    }
}

/// In-memory storage for all seeded tables.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of roles.
    pub async fn role_count(&self) -> usize {
        self.state.lock().await.roles.len()
    }

    /// Number of user accounts.
    pub async fn user_count(&self) -> usize {
        self.state.lock().await.users.len()
    }

    /// Stored password hash of an account.
    pub async fn password_hash(&self, user_id: UserId) -> Option<String> {
        self.state
            .lock()
            .await
            .users
            .iter()
            .find(|u| u.user.id == user_id)
            .map(|u| u.password_hash.clone())
    }
}

impl RoleStore for MemoryStore {
    async fn find_role(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        Ok(self.state.lock().await.role_by_name(name).cloned())
    }

    async fn create_role_if_absent(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        let mut state = self.state.lock().await;
        if state.role_by_name(name).is_some() {
            return Ok(None);
        }

        let role = Role {
            id: RoleId::new(next(&mut state.seq.roles)),
            name: name.to_owned(),
        };
        state.roles.push(role.clone());
        Ok(Some(role))
    }
}

impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .iter()
            .find(|u| u.user.email.as_str() == email.as_str())
            .map(|u| u.user.clone()))
    }

    async fn find_by_normalized_email(
        &self,
        normalized_email: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .iter()
            .find(|u| u.normalized_email == normalized_email)
            .map(|u| u.user.clone()))
    }

    async fn create_with_role(
        &self,
        user: &NewUser,
        role: RoleName,
    ) -> Result<User, RepositoryError> {
        let mut state = self.state.lock().await;

        let role_id = state
            .role_by_name(role.as_str())
            .map(|r| r.id)
            .ok_or_else(|| RepositoryError::RoleNotFound(role.to_string()))?;

        let normalized_email = user.email.normalized();
        let normalized_user_name = normalize(user.user_name());
        if state.users.iter().any(|u| {
            u.normalized_email == normalized_email
                || u.normalized_user_name == normalized_user_name
        }) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let created = User {
            id: UserId::new(next(&mut state.seq.users)),
            public_id: Uuid::new_v4(),
            user_name: user.user_name().to_owned(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            phone_number: user.phone_number.clone(),
            address: user.address.clone(),
            date_of_birth: user.date_of_birth,
            created_at: Utc::now(),
        };

        state.users.push(StoredUser {
            user: created.clone(),
            normalized_user_name,
            normalized_email,
            password_hash: user.password_hash.clone(),
        });
        state.user_roles.push((created.id, role_id));

        Ok(created)
    }

    async fn roles_for(&self, user_id: UserId) -> Result<Vec<String>, RepositoryError> {
        let state = self.state.lock().await;
        let mut names: Vec<String> = state
            .user_roles
            .iter()
            .filter(|(uid, _)| *uid == user_id)
            .filter_map(|(_, rid)| state.roles.iter().find(|r| r.id == *rid))
            .map(|r| r.name.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}

impl CatalogStore for MemoryStore {
    async fn counts(&self) -> Result<CatalogCounts, RepositoryError> {
        let state = self.state.lock().await;
        Ok(CatalogCounts {
            categories: count(&state.categories),
            food_items: count(&state.food_items),
            combos: count(&state.combos),
            combo_items: count(&state.combo_items),
        })
    }

    async fn insert_categories(
        &self,
        categories: &[NewCategory],
    ) -> Result<Vec<Category>, RepositoryError> {
        let mut state = self.state.lock().await;
        let mut inserted = Vec::with_capacity(categories.len());

        for new in categories {
            if state.categories.iter().any(|c| c.name == new.name) {
                continue;
            }
            let category = Category {
                id: CategoryId::new(next(&mut state.seq.categories)),
                name: new.name.clone(),
            };
            state.categories.push(category.clone());
            inserted.push(category);
        }

        Ok(inserted)
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn insert_food_items(
        &self,
        items: &[NewFoodItem],
    ) -> Result<Vec<FoodItem>, RepositoryError> {
        let mut state = self.state.lock().await;

        // Reject the whole batch before writing, as the rolled back transaction would.
        if let Some(orphan) = items
            .iter()
            .find(|i| !state.categories.iter().any(|c| c.id == i.category_id))
        {
            return Err(RepositoryError::ConstraintViolation(format!(
                "category {} does not exist",
                orphan.category_id
            )));
        }

        let mut inserted = Vec::with_capacity(items.len());
        for new in items {
            if state.food_items.iter().any(|f| f.name == new.name) {
                continue;
            }
            let item = FoodItem {
                id: FoodItemId::new(next(&mut state.seq.food_items)),
                category_id: new.category_id,
                name: new.name.clone(),
                description: new.description.clone(),
                price: new.price,
                image_url: new.image_url.clone(),
                status: new.status,
            };
            state.food_items.push(item.clone());
            inserted.push(item);
        }

        Ok(inserted)
    }

    async fn find_food_item_by_name(&self, name: &str) -> Result<Option<FoodItem>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.food_items.iter().find(|f| f.name == name).cloned())
    }

    async fn insert_combo(
        &self,
        combo: &NewCombo,
        items: &[(FoodItemId, i32)],
    ) -> Result<Option<Combo>, RepositoryError> {
        let mut state = self.state.lock().await;

        if state.combos.iter().any(|c| c.name == combo.name) {
            return Ok(None);
        }
        if let Some((missing, _)) = items
            .iter()
            .find(|(id, _)| !state.food_items.iter().any(|f| f.id == *id))
        {
            return Err(RepositoryError::ConstraintViolation(format!(
                "food item {missing} does not exist"
            )));
        }
        if let Some((id, quantity)) = items.iter().find(|(_, q)| *q <= 0) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "quantity {quantity} for food item {id} must be positive"
            )));
        }

        let created = Combo {
            id: ComboId::new(next(&mut state.seq.combos)),
            name: combo.name.clone(),
            description: combo.description.clone(),
            price: combo.price,
        };
        state.combos.push(created.clone());

        for &(food_item_id, quantity) in items {
            let exists = state
                .combo_items
                .iter()
                .any(|ci| ci.combo_id == created.id && ci.food_item_id == food_item_id);
            if !exists {
                state.combo_items.push(ComboItem {
                    combo_id: created.id,
                    food_item_id,
                    quantity,
                });
            }
        }

        Ok(Some(created))
    }

    async fn find_combo_by_name(&self, name: &str) -> Result<Option<Combo>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.combos.iter().find(|c| c.name == name).cloned())
    }

    async fn list_combo_items(&self, combo_id: ComboId) -> Result<Vec<ComboItem>, RepositoryError> {
        let state = self.state.lock().await;
        let mut items: Vec<ComboItem> = state
            .combo_items
            .iter()
            .filter(|ci| ci.combo_id == combo_id)
            .copied()
            .collect();
        items.sort_by_key(|ci| ci.food_item_id);
        Ok(items)
    }
}

fn count<T>(rows: &[T]) -> i64 {
    i64::try_from(rows.len()).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use fastfood_core::{ItemStatus, Price};

    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: Email::parse(email).unwrap(),
            password_hash: "hash".to_owned(),
            full_name: "Test User".to_owned(),
            phone_number: "0000000000".to_owned(),
            address: "Somewhere".to_owned(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_role_names_are_unique_ignoring_case() {
        let store = MemoryStore::new();
        assert!(store.create_role_if_absent("Admin").await.unwrap().is_some());
        assert!(store.create_role_if_absent("ADMIN").await.unwrap().is_none());
        assert_eq!(store.role_count().await, 1);
        assert_eq!(store.find_role("admin").await.unwrap().unwrap().name, "Admin");
    }

    #[tokio::test]
    async fn test_create_with_role_requires_role() {
        let store = MemoryStore::new();
        let err = store
            .create_with_role(&new_user("a@b.c"), RoleName::Admin)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::RoleNotFound(_)));
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_normalized_email_is_unique() {
        let store = MemoryStore::new();
        store.create_role_if_absent("Customer").await.unwrap();
        store
            .create_with_role(&new_user("a@b.c"), RoleName::Customer)
            .await
            .unwrap();

        let err = store
            .create_with_role(&new_user("A@B.C"), RoleName::Customer)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_exact_lookup_is_case_sensitive() {
        let store = MemoryStore::new();
        store.create_role_if_absent("Customer").await.unwrap();
        store
            .create_with_role(&new_user("Mixed@Case.com"), RoleName::Customer)
            .await
            .unwrap();

        let lower = Email::parse("mixed@case.com").unwrap();
        assert!(store.find_by_email(&lower).await.unwrap().is_none());
        assert!(
            store
                .find_by_normalized_email(&lower.normalized())
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_food_item_batch_rejects_unknown_category() {
        let store = MemoryStore::new();
        let item = NewFoodItem {
            category_id: CategoryId::new(42),
            name: "Orphan".to_owned(),
            description: String::new(),
            price: Price::from_cents(100).unwrap(),
            image_url: String::new(),
            status: ItemStatus::Available,
        };

        let err = store.insert_food_items(&[item]).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
        assert_eq!(store.counts().await.unwrap().food_items, 0);
    }

    #[tokio::test]
    async fn test_duplicate_combo_name_is_skipped() {
        let store = MemoryStore::new();
        let combo = NewCombo {
            name: "Set".to_owned(),
            description: String::new(),
            price: Price::from_cents(500).unwrap(),
        };

        assert!(store.insert_combo(&combo, &[]).await.unwrap().is_some());
        assert!(store.insert_combo(&combo, &[]).await.unwrap().is_none());
        assert_eq!(store.counts().await.unwrap().combos, 1);
    }

    #[tokio::test]
    async fn test_combo_with_unknown_member_writes_nothing() {
        let store = MemoryStore::new();
        let combo = NewCombo {
            name: "Set".to_owned(),
            description: String::new(),
            price: Price::from_cents(500).unwrap(),
        };

        let err = store
            .insert_combo(&combo, &[(FoodItemId::new(7), 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
        assert!(store.find_combo_by_name("Set").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_combo_quantity_must_be_positive() {
        let store = MemoryStore::new();
        let category = store
            .insert_categories(&[NewCategory {
                name: "Drinks".to_owned(),
            }])
            .await
            .unwrap()
            .remove(0);
        let tea = store
            .insert_food_items(&[NewFoodItem {
                category_id: category.id,
                name: "Tea".to_owned(),
                description: String::new(),
                price: Price::from_cents(100).unwrap(),
                image_url: String::new(),
                status: ItemStatus::Available,
            }])
            .await
            .unwrap()
            .remove(0);
        let combo = NewCombo {
            name: "Set".to_owned(),
            description: String::new(),
            price: Price::from_cents(500).unwrap(),
        };

        let err = store
            .insert_combo(&combo, &[(tea.id, 0)])
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
        assert_eq!(store.counts().await.unwrap().combos, 0);
    }

    #[tokio::test]
    async fn test_find_combo_by_name_is_exact() {
        let store = MemoryStore::new();
        let combo = NewCombo {
            name: "Set".to_owned(),
            description: "Two of everything".to_owned(),
            price: Price::from_cents(500).unwrap(),
        };
        let created = store.insert_combo(&combo, &[]).await.unwrap().unwrap();

        let found = store.find_combo_by_name("Set").await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.description, "Two of everything");
        assert!(store.find_combo_by_name("set").await.unwrap().is_none());
    }
}
