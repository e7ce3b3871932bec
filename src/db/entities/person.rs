use sea_orm::entity::prelude::*;

/// A person is alive until a zombie gets to them; `eaten_by` stays null
/// while `alive` is true. The pairing is maintained by the mark-eaten
/// update, not by a database constraint.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(default_value = true)]
    pub alive: bool,
    #[sea_orm(indexed)]
    pub eaten_by: Option<i32>,
    #[sea_orm(belongs_to, from = "eaten_by", to = "id")]
    pub zombie: HasOne<super::zombie::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
