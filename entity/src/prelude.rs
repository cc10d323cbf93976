pub use super::group::Entity as Group;
pub use super::invitation::Entity as Invitation;
pub use super::task::Entity as Task;
pub use super::time_sheet::Entity as TimeSheet;
pub use super::time_sheet_share_group::Entity as TimeSheetShareGroup;
pub use super::time_sheet_share_user::Entity as TimeSheetShareUser;
pub use super::time_sheet_task::Entity as TimeSheetTask;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
