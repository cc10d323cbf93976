use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pseudo: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string, never the plain password.
    pub password: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::time_sheet::Entity")]
    TimeSheet,
    #[sea_orm(has_many = "super::user_group::Entity")]
    UserGroup,
    #[sea_orm(has_many = "super::time_sheet_share_user::Entity")]
    TimeSheetShareUser,
}

impl Related<super::time_sheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheet.def()
    }
}

impl Related<super::user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGroup.def()
    }
}

impl Related<super::time_sheet_share_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheetShareUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
