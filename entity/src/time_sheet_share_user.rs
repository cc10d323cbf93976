use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "time_sheet_share_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub time_sheet_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub access_level: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::time_sheet::Entity",
        from = "Column::TimeSheetId",
        to = "super::time_sheet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TimeSheet,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::time_sheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheet.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
