//! Integration tests for the repository layer against a real database:
//! owner scoping, FK cascade behaviour, partial updates, and the
//! settings upsert.

use santaverse_core::types::DbId;
use sqlx::PgPool;

use santaverse_db::models::child::{CreateChild, UpdateChild};
use santaverse_db::models::elf::CreateElf;
use santaverse_db::models::settings::SaveSettings;
use santaverse_db::models::task::CreateTask;
use santaverse_db::models::user::CreateUser;
use santaverse_db::models::wishlist_item::CreateWishlistItem;
use santaverse_db::repositories::{
    ChildRepo, ElfRepo, RoleRepo, SettingsRepo, TaskRepo, UserRepo, WishlistItemRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a user to own test rows, returning its id.
async fn seed_owner(pool: &PgPool, username: &str) -> DbId {
    let role = RoleRepo::find_by_name(pool, "user")
        .await
        .expect("role query should succeed")
        .expect("roles are seeded by migrations");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@northpole.test"),
            password_hash: "$argon2id$placeholder".to_string(),
            role_id: role.id,
        },
    )
    .await
    .expect("user insert should succeed");
    user.id
}

fn new_child(name: &str) -> CreateChild {
    CreateChild {
        name: name.to_string(),
        age: 8,
        country: "Finland".to_string(),
        region: "Europe".to_string(),
        behavior_score: None,
        status: None,
    }
}

fn new_wishlist_item(name: &str) -> CreateWishlistItem {
    CreateWishlistItem {
        name: name.to_string(),
        category: "Toys".to_string(),
        priority: None,
        status: None,
        age_appropriate: None,
        in_stock: None,
    }
}

// ---------------------------------------------------------------------------
// Children
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_applies_database_defaults(pool: PgPool) {
    let owner = seed_owner(&pool, "kris").await;

    let child = ChildRepo::create(&pool, owner, &new_child("Emma"))
        .await
        .expect("insert should succeed");

    assert_eq!(child.owner_id, owner);
    assert_eq!(child.behavior_score, 50);
    assert_eq!(child.status, "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_set_fields(pool: PgPool) {
    let owner = seed_owner(&pool, "kris").await;
    let child = ChildRepo::create(&pool, owner, &new_child("Lucas"))
        .await
        .expect("insert should succeed");

    let updated = ChildRepo::update(
        &pool,
        owner,
        child.id,
        &UpdateChild {
            status: Some("nice".to_string()),
            behavior_score: Some(92),
            name: None,
            age: None,
            country: None,
            region: None,
        },
    )
    .await
    .expect("update should succeed")
    .expect("row should exist");

    assert_eq!(updated.status, "nice");
    assert_eq!(updated.behavior_score, 92);
    assert_eq!(updated.name, "Lucas");
    assert_eq!(updated.country, "Finland");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_and_update_miss_other_owners_rows(pool: PgPool) {
    let alice = seed_owner(&pool, "alice").await;
    let bob = seed_owner(&pool, "bob").await;

    let child = ChildRepo::create(&pool, alice, &new_child("Hidden"))
        .await
        .expect("insert should succeed");

    let found = ChildRepo::find_by_id(&pool, bob, child.id)
        .await
        .expect("query should succeed");
    assert!(found.is_none());

    let deleted = ChildRepo::delete(&pool, bob, child.id)
        .await
        .expect("delete should succeed");
    assert!(!deleted, "cross-owner delete must not remove rows");

    // Still present for the real owner.
    assert!(ChildRepo::find_by_id(&pool, alice, child.id)
        .await
        .expect("query should succeed")
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_child_cascades_to_wishlist(pool: PgPool) {
    let owner = seed_owner(&pool, "kris").await;
    let child = ChildRepo::create(&pool, owner, &new_child("Emma"))
        .await
        .expect("insert should succeed");

    let item = WishlistItemRepo::create(&pool, owner, child.id, &new_wishlist_item("Lego Set"))
        .await
        .expect("insert should succeed");

    let deleted = ChildRepo::delete(&pool, owner, child.id)
        .await
        .expect("delete should succeed");
    assert!(deleted);

    let found = WishlistItemRepo::find_by_id(&pool, owner, item.id)
        .await
        .expect("query should succeed");
    assert!(found.is_none(), "wishlist items go with their child");
}

// ---------------------------------------------------------------------------
// Elves and tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_elf_unassigns_tasks(pool: PgPool) {
    let owner = seed_owner(&pool, "kris").await;
    let elf = ElfRepo::create(
        &pool,
        owner,
        &CreateElf {
            name: "Snowball Mintberry".to_string(),
            skill: "logistics".to_string(),
            energy_level: None,
            tasks_completed: None,
            current_task: None,
            morale: None,
            efficiency: None,
        },
    )
    .await
    .expect("insert should succeed");

    let task = TaskRepo::create(
        &pool,
        owner,
        &CreateTask {
            title: "Load Sleigh Section A".to_string(),
            category: "Logistics".to_string(),
            elf_id: Some(elf.id),
            priority: None,
            status: None,
            deadline: None,
        },
    )
    .await
    .expect("insert should succeed");
    assert_eq!(task.elf_id, Some(elf.id));

    ElfRepo::delete(&pool, owner, elf.id)
        .await
        .expect("delete should succeed");

    let task = TaskRepo::find_by_id(&pool, owner, task.id)
        .await
        .expect("query should succeed")
        .expect("task should survive its elf");
    assert_eq!(task.elf_id, None);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn settings_upsert_inserts_then_updates_same_row(pool: PgPool) {
    let owner = seed_owner(&pool, "kris").await;

    assert!(SettingsRepo::find_by_owner(&pool, owner)
        .await
        .expect("query should succeed")
        .is_none());

    let target_a = "2026-12-25T00:00:00Z".parse().expect("valid timestamp");
    let first = SettingsRepo::upsert(&pool, owner, &SaveSettings {
        countdown_target: target_a,
    })
    .await
    .expect("upsert should succeed");

    let target_b = "2026-12-24T18:00:00Z".parse().expect("valid timestamp");
    let second = SettingsRepo::upsert(&pool, owner, &SaveSettings {
        countdown_target: target_b,
    })
    .await
    .expect("upsert should succeed");

    assert_eq!(first.id, second.id, "upsert must not create a second row");
    assert_eq!(second.countdown_target, target_b);
}
