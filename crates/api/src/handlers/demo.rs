//! Demo-mode seeding.
//!
//! Populates an owner's empty workspace with the static demo dataset so
//! the dashboard has data to present. A no-op when the owner already has
//! children rows -- real data is never mixed with demo data.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use santaverse_core::demo;
use santaverse_db::models::child::CreateChild;
use santaverse_db::models::delivery::CreateDelivery;
use santaverse_db::models::elf::CreateElf;
use santaverse_db::models::gift::CreateGift;
use santaverse_db::models::task::CreateTask;
use santaverse_db::models::wishlist_item::CreateWishlistItem;
use santaverse_db::repositories::{
    ChildRepo, DeliveryRepo, ElfRepo, GiftRepo, TaskRepo, WishlistItemRepo,
};
use santaverse_events::ChangeEvent;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Per-table insert counts returned by the seed endpoint.
#[derive(Debug, Default, Serialize)]
pub struct SeedReport {
    /// `false` when the owner already had data and nothing was inserted.
    pub seeded: bool,
    pub children: usize,
    pub wishlist_items: usize,
    pub gifts: usize,
    pub elves: usize,
    pub tasks: usize,
    pub deliveries: usize,
}

/// POST /api/v1/demo/seed
pub async fn seed(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<SeedReport>> {
    let owner_id = user.user_id;

    if ChildRepo::any_exist(&state.pool, owner_id).await? {
        return Ok(Json(SeedReport::default()));
    }

    let mut report = SeedReport {
        seeded: true,
        ..SeedReport::default()
    };

    // Children first; wishlist items resolve their parent by position.
    let mut child_ids = Vec::new();
    for seed in demo::children() {
        let input = CreateChild {
            name: seed.name.to_string(),
            age: seed.age,
            country: seed.country.to_string(),
            region: seed.region.to_string(),
            behavior_score: Some(seed.behavior_score),
            status: Some(seed.status.to_string()),
        };
        let child = ChildRepo::create(&state.pool, owner_id, &input).await?;
        state
            .change_bus
            .publish(ChangeEvent::insert("children", child.id, owner_id));
        child_ids.push(child.id);
        report.children += 1;
    }

    for seed in demo::wishlist_items() {
        let input = CreateWishlistItem {
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            priority: Some(seed.priority.to_string()),
            status: Some(seed.status.to_string()),
            age_appropriate: None,
            in_stock: None,
        };
        let item =
            WishlistItemRepo::create(&state.pool, owner_id, child_ids[seed.child_index], &input)
                .await?;
        state
            .change_bus
            .publish(ChangeEvent::insert("wishlist_items", item.id, owner_id));
        report.wishlist_items += 1;
    }

    for seed in demo::gifts() {
        let input = CreateGift {
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            stock: Some(seed.stock),
            max_stock: Some(seed.max_stock),
            status: Some(seed.status.to_string()),
            demand_level: Some(seed.demand_level.to_string()),
            production_progress: Some(seed.production_progress),
        };
        let gift = GiftRepo::create(&state.pool, owner_id, &input).await?;
        state
            .change_bus
            .publish(ChangeEvent::insert("gifts", gift.id, owner_id));
        report.gifts += 1;
    }

    // Elves before tasks; tasks resolve their assignee by position.
    let mut elf_ids = Vec::new();
    for seed in demo::elves() {
        let input = CreateElf {
            name: seed.name.to_string(),
            skill: seed.skill.to_string(),
            energy_level: Some(seed.energy_level),
            tasks_completed: Some(seed.tasks_completed),
            current_task: Some(seed.current_task.to_string()),
            morale: Some(seed.morale.to_string()),
            efficiency: Some(seed.efficiency),
        };
        let elf = ElfRepo::create(&state.pool, owner_id, &input).await?;
        state
            .change_bus
            .publish(ChangeEvent::insert("elves", elf.id, owner_id));
        elf_ids.push(elf.id);
        report.elves += 1;
    }

    for seed in demo::tasks() {
        let input = CreateTask {
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            elf_id: seed.elf_index.map(|i| elf_ids[i]),
            priority: Some(seed.priority.to_string()),
            status: Some(seed.status.to_string()),
            deadline: NaiveDate::parse_from_str(seed.deadline, "%Y-%m-%d").ok(),
        };
        let task = TaskRepo::create(&state.pool, owner_id, &input).await?;
        state
            .change_bus
            .publish(ChangeEvent::insert("tasks", task.id, owner_id));
        report.tasks += 1;
    }

    for seed in demo::deliveries() {
        let input = CreateDelivery {
            region: seed.region.to_string(),
            country: Some(seed.country.to_string()),
            total_gifts: Some(seed.total_gifts),
            delivered: Some(0),
            status: None,
            weather_risk: Some(seed.weather_risk.to_string()),
            timezone: Some(seed.timezone.to_string()),
        };
        let delivery = DeliveryRepo::create(&state.pool, owner_id, &input).await?;
        state
            .change_bus
            .publish(ChangeEvent::insert("deliveries", delivery.id, owner_id));
        report.deliveries += 1;
    }

    tracing::info!(
        owner_id,
        children = report.children,
        gifts = report.gifts,
        elves = report.elves,
        "Seeded demo dataset"
    );

    Ok(Json(report))
}
