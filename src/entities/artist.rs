use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    /// Path relative to the storage bucket, e.g. `avatars/profile.jpg`.
    pub avatar_url: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
