use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "time_sheet_task")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub task_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub time_sheet_id: i32,
    /// Duration in seconds.
    pub duration: i32,
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::task::Entity",
        from = "Column::TaskId",
        to = "super::task::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Task,
    #[sea_orm(
        belongs_to = "super::time_sheet::Entity",
        from = "Column::TimeSheetId",
        to = "super::time_sheet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TimeSheet,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::time_sheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
