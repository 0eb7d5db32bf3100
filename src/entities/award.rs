use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "awards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub artist_id: Option<Uuid>,
    pub title: String,
    /// Free-text label shown next to the year, e.g. "Nominee".
    #[sea_orm(column_name = "type")]
    pub award_type: String,
    pub year: i32,
    pub url: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_featured: bool,
}

impl ActiveModelBehavior for ActiveModel {}
