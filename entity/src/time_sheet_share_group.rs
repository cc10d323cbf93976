use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "time_sheet_share_group")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub time_sheet_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: i32,
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
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Group,
}

impl Related<super::time_sheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheet.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
