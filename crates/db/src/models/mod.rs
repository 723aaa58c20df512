//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Owner ids never appear in DTOs; repositories take the owner as an
//! explicit argument so a client cannot write into another owner's rows.

pub mod child;
pub mod dashboard;
pub mod delivery;
pub mod elf;
pub mod gift;
pub mod role;
pub mod session;
pub mod settings;
pub mod task;
pub mod user;
pub mod wishlist_item;
