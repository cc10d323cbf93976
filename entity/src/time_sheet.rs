use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "time_sheet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub entry_date: Date,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::time_sheet_task::Entity")]
    TimeSheetTask,
    #[sea_orm(has_many = "super::time_sheet_share_user::Entity")]
    TimeSheetShareUser,
    #[sea_orm(has_many = "super::time_sheet_share_group::Entity")]
    TimeSheetShareGroup,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::time_sheet_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheetTask.def()
    }
}

impl Related<super::time_sheet_share_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheetShareUser.def()
    }
}

impl Related<super::time_sheet_share_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheetShareGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
