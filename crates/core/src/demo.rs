//! Static demo dataset.
//!
//! Seeded into an owner's empty workspace so the dashboard has something to
//! show before real data exists. Wishlist items and tasks reference their
//! parent child/elf by position in the corresponding seed slice; the caller
//! resolves positions to database ids after inserting the parents.

use crate::statuses::*;

pub struct DemoChild {
    pub name: &'static str,
    pub age: i32,
    pub country: &'static str,
    pub region: &'static str,
    pub behavior_score: i32,
    pub status: &'static str,
}

pub struct DemoWishlistItem {
    /// Index into [`children`].
    pub child_index: usize,
    pub name: &'static str,
    pub category: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
}

pub struct DemoGift {
    pub name: &'static str,
    pub category: &'static str,
    pub stock: i32,
    pub max_stock: i32,
    pub status: &'static str,
    pub demand_level: &'static str,
    pub production_progress: i32,
}

pub struct DemoElf {
    pub name: &'static str,
    pub skill: &'static str,
    pub energy_level: i32,
    pub tasks_completed: i32,
    pub current_task: &'static str,
    pub morale: &'static str,
    pub efficiency: i32,
}

pub struct DemoTask {
    /// Index into [`elves`], or `None` for an unassigned task.
    pub elf_index: Option<usize>,
    pub title: &'static str,
    pub category: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
    /// ISO date (`YYYY-MM-DD`).
    pub deadline: &'static str,
}

pub struct DemoDelivery {
    pub region: &'static str,
    pub country: &'static str,
    pub total_gifts: i32,
    pub weather_risk: &'static str,
    pub timezone: &'static str,
}

pub fn children() -> &'static [DemoChild] {
    &[
        DemoChild { name: "Emma Thompson", age: 7, country: "United States", region: "North America", behavior_score: 92, status: CHILD_NICE },
        DemoChild { name: "Lucas Schmidt", age: 9, country: "Germany", region: "Europe", behavior_score: 78, status: CHILD_NICE },
        DemoChild { name: "Yuki Tanaka", age: 5, country: "Japan", region: "Asia", behavior_score: 95, status: CHILD_NICE },
        DemoChild { name: "Oliver Brown", age: 11, country: "United Kingdom", region: "Europe", behavior_score: 45, status: CHILD_NAUGHTY },
        DemoChild { name: "Sofia Martinez", age: 8, country: "Mexico", region: "North America", behavior_score: 88, status: CHILD_NICE },
    ]
}

pub fn wishlist_items() -> &'static [DemoWishlistItem] {
    &[
        DemoWishlistItem { child_index: 0, name: "Lego Star Wars Set", category: "Toys", priority: PRIORITY_HIGH, status: WISHLIST_APPROVED },
        DemoWishlistItem { child_index: 0, name: "Art Supplies Kit", category: "Creative", priority: PRIORITY_MEDIUM, status: WISHLIST_APPROVED },
        DemoWishlistItem { child_index: 1, name: "Nintendo Switch Game", category: "Electronics", priority: PRIORITY_HIGH, status: WISHLIST_PENDING },
        DemoWishlistItem { child_index: 2, name: "Stuffed Unicorn", category: "Plush", priority: PRIORITY_HIGH, status: WISHLIST_APPROVED },
    ]
}

pub fn gifts() -> &'static [DemoGift] {
    &[
        DemoGift { name: "Lego Star Wars Set", category: "Toys", stock: 45_000, max_stock: 100_000, status: GIFT_MANUFACTURING, demand_level: LEVEL_HIGH, production_progress: 45 },
        DemoGift { name: "Stuffed Unicorn", category: "Plush", stock: 89_000, max_stock: 100_000, status: GIFT_READY, demand_level: LEVEL_HIGH, production_progress: 100 },
        DemoGift { name: "Nintendo Switch Game", category: "Electronics", stock: 12_000, max_stock: 80_000, status: GIFT_MANUFACTURING, demand_level: LEVEL_HIGH, production_progress: 15 },
        DemoGift { name: "Art Supplies Kit", category: "Creative", stock: 67_000, max_stock: 75_000, status: GIFT_PACKED, demand_level: LEVEL_MEDIUM, production_progress: 90 },
        DemoGift { name: "Remote Control Car", category: "Toys", stock: 34_000, max_stock: 60_000, status: GIFT_MANUFACTURING, demand_level: LEVEL_MEDIUM, production_progress: 57 },
    ]
}

pub fn elves() -> &'static [DemoElf] {
    &[
        DemoElf { name: "Jingle Sparklefoot", skill: SKILL_TOYMAKER, energy_level: 85, tasks_completed: 1247, current_task: "Building Lego Sets", morale: MORALE_EXCELLENT, efficiency: 94 },
        DemoElf { name: "Tinsel McWrap", skill: SKILL_WRAPPER, energy_level: 72, tasks_completed: 2891, current_task: "Gift Wrapping Station A", morale: MORALE_GOOD, efficiency: 88 },
        DemoElf { name: "Cookie Sugarplum", skill: SKILL_QUALITY, energy_level: 45, tasks_completed: 892, current_task: "Quality Inspection", morale: MORALE_TIRED, efficiency: 76 },
        DemoElf { name: "Snowball Mintberry", skill: SKILL_LOGISTICS, energy_level: 91, tasks_completed: 456, current_task: "Sleigh Loading", morale: MORALE_EXCELLENT, efficiency: 97 },
        DemoElf { name: "Pepper Candycane", skill: SKILL_TECH, energy_level: 68, tasks_completed: 234, current_task: "Route Optimization", morale: MORALE_GOOD, efficiency: 91 },
    ]
}

pub fn tasks() -> &'static [DemoTask] {
    &[
        DemoTask { elf_index: Some(0), title: "Assemble 500 Lego Sets", category: "Production", priority: PRIORITY_URGENT, status: TASK_IN_PROGRESS, deadline: "2026-12-20" },
        DemoTask { elf_index: Some(1), title: "Wrap Europe Region Gifts", category: "Wrapping", priority: PRIORITY_HIGH, status: TASK_IN_PROGRESS, deadline: "2026-12-22" },
        DemoTask { elf_index: Some(2), title: "Quality Check Electronics", category: "Quality", priority: PRIORITY_HIGH, status: TASK_IN_PROGRESS, deadline: "2026-12-21" },
        DemoTask { elf_index: Some(3), title: "Load Sleigh Section A", category: "Logistics", priority: PRIORITY_MEDIUM, status: TASK_TODO, deadline: "2026-12-24" },
        DemoTask { elf_index: None, title: "Special Gift Wrapping", category: "Wrapping", priority: PRIORITY_LOW, status: TASK_TODO, deadline: "2026-12-23" },
    ]
}

pub fn deliveries() -> &'static [DemoDelivery] {
    &[
        DemoDelivery { region: "North America", country: "Multiple", total_gifts: 892_456, weather_risk: LEVEL_LOW, timezone: "UTC-5" },
        DemoDelivery { region: "Europe", country: "Multiple", total_gifts: 678_234, weather_risk: LEVEL_MEDIUM, timezone: "UTC+1" },
        DemoDelivery { region: "Asia", country: "Multiple", total_gifts: 1_234_567, weather_risk: LEVEL_LOW, timezone: "UTC+8" },
        DemoDelivery { region: "South America", country: "Multiple", total_gifts: 345_678, weather_risk: LEVEL_LOW, timezone: "UTC-3" },
        DemoDelivery { region: "Africa", country: "Multiple", total_gifts: 234_567, weather_risk: LEVEL_MEDIUM, timezone: "UTC+2" },
        DemoDelivery { region: "Oceania", country: "Multiple", total_gifts: 156_789, weather_risk: LEVEL_HIGH, timezone: "UTC+10" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wishlist_and_task_indices_are_in_bounds() {
        let child_count = children().len();
        for item in wishlist_items() {
            assert!(item.child_index < child_count);
        }
        let elf_count = elves().len();
        for task in tasks() {
            if let Some(i) = task.elf_index {
                assert!(i < elf_count);
            }
        }
    }

    #[test]
    fn demo_deadlines_parse_as_dates() {
        for task in tasks() {
            assert!(
                chrono::NaiveDate::parse_from_str(task.deadline, "%Y-%m-%d").is_ok(),
                "bad deadline: {}",
                task.deadline
            );
        }
    }

    #[test]
    fn every_region_is_unique() {
        let mut regions: Vec<_> = deliveries().iter().map(|d| d.region).collect();
        regions.sort_unstable();
        regions.dedup();
        assert_eq!(regions.len(), deliveries().len());
    }
}
