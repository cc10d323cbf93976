use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub repetition: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::time_sheet_task::Entity")]
    TimeSheetTask,
}

impl Related<super::time_sheet_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheetTask.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
