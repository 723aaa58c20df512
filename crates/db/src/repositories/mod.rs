//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Entity repositories also
//! take the owner id so every query stays scoped to the caller's rows.

pub mod child_repo;
pub mod dashboard_repo;
pub mod delivery_repo;
pub mod elf_repo;
pub mod gift_repo;
pub mod role_repo;
pub mod session_repo;
pub mod settings_repo;
pub mod task_repo;
pub mod user_repo;
pub mod wishlist_item_repo;

pub use child_repo::ChildRepo;
pub use dashboard_repo::DashboardRepo;
pub use delivery_repo::DeliveryRepo;
pub use elf_repo::ElfRepo;
pub use gift_repo::GiftRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use settings_repo::SettingsRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
pub use wishlist_item_repo::WishlistItemRepo;
