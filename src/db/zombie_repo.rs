use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::entities::prelude::Zombie;
use super::entities::zombie;

pub async fn list_zombies(db: &DatabaseConnection) -> Result<Vec<zombie::Model>, sea_orm::DbErr> {
    Zombie::find()
        .order_by_asc(zombie::Column::Id)
        .all(db)
        .await
}

pub async fn count_zombies(db: &DatabaseConnection) -> Result<u64, sea_orm::DbErr> {
    Zombie::find().count(db).await
}

pub async fn insert_zombie(
    db: &DatabaseConnection,
    name: &str,
) -> Result<zombie::Model, sea_orm::DbErr> {
    let model = zombie::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    model.insert(db).await
}
