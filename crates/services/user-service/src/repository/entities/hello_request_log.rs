//! Hello request log entity. Append-only.

use sea_orm::entity::prelude::*;

use domain::HelloRequestLog;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hello_request_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// NULL for anonymous requests
    pub user_id: Option<i32>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HelloRequestLog {
    fn from(model: Model) -> Self {
        HelloRequestLog {
            id: model.id,
            user_id: model.user_id,
            user_agent: model.user_agent,
            ip_address: model.ip_address,
            timestamp: model.timestamp,
        }
    }
}
