//! Well-known status and level values stored as TEXT columns.
//!
//! The data layer does not enforce these -- a row can carry any string --
//! but every value written by this codebase comes from here, and the demo
//! dataset and dashboards assume them.

/// `children.status`
pub const CHILD_NICE: &str = "nice";
pub const CHILD_NAUGHTY: &str = "naughty";
pub const CHILD_PENDING: &str = "pending";

/// `wishlist_items.status`
pub const WISHLIST_PENDING: &str = "pending";
pub const WISHLIST_APPROVED: &str = "approved";
pub const WISHLIST_REJECTED: &str = "rejected";
pub const WISHLIST_MODIFIED: &str = "modified";

/// `gifts.status`
pub const GIFT_MANUFACTURING: &str = "manufacturing";
pub const GIFT_READY: &str = "ready";
pub const GIFT_PACKED: &str = "packed";

/// `elves.skill`
pub const SKILL_TOYMAKER: &str = "toymaker";
pub const SKILL_WRAPPER: &str = "wrapper";
pub const SKILL_QUALITY: &str = "quality";
pub const SKILL_LOGISTICS: &str = "logistics";
pub const SKILL_TECH: &str = "tech";

/// `elves.morale`
pub const MORALE_EXCELLENT: &str = "excellent";
pub const MORALE_GOOD: &str = "good";
pub const MORALE_TIRED: &str = "tired";
pub const MORALE_EXHAUSTED: &str = "exhausted";

/// `tasks.status`
pub const TASK_TODO: &str = "todo";
pub const TASK_IN_PROGRESS: &str = "in_progress";
pub const TASK_DONE: &str = "done";

/// `tasks.priority` and `wishlist_items.priority`
pub const PRIORITY_URGENT: &str = "urgent";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_LOW: &str = "low";

/// `deliveries.status`
pub const DELIVERY_PENDING: &str = "pending";
pub const DELIVERY_IN_TRANSIT: &str = "in_transit";
pub const DELIVERY_COMPLETED: &str = "completed";

/// `deliveries.weather_risk` and `gifts.demand_level`
pub const LEVEL_LOW: &str = "low";
pub const LEVEL_MEDIUM: &str = "medium";
pub const LEVEL_HIGH: &str = "high";
