//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let (group, membership) = factory::create_group_owned_by(&db, user.id).await?;
//! let sheet = factory::create_time_sheet(&db, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let sheet = factory::time_sheet::TimeSheetFactory::new(&db, user.id)
//!     .entry_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
//!     .title("Sprint review")
//!     .build()
//!     .await?;
//! ```

pub mod group;
pub mod helpers;
pub mod task;
pub mod time_sheet;
pub mod time_sheet_task;
pub mod user;
pub mod user_group;

pub use group::create_group;
pub use helpers::create_group_owned_by;
pub use task::create_task;
pub use time_sheet::create_time_sheet;
pub use time_sheet_task::create_time_sheet_task;
pub use user::create_user;
pub use user_group::create_user_group;
