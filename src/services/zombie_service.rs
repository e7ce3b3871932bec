use sea_orm::DatabaseConnection;

use crate::{db::entities::zombie, db::zombie_repo, error::AppError};

#[derive(Clone)]
pub struct ZombieService {
    db: DatabaseConnection,
}

impl ZombieService {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn list(&self) -> Result<Vec<zombie::Model>, AppError> {
        zombie_repo::list_zombies(&self.db).await.map_err(|err| {
            tracing::error!("failed to fetch zombies: {err}");
            AppError::internal("Could not fetch zombies")
        })
    }
}
