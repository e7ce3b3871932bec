use sea_orm::DatabaseConnection;

use crate::{
    services::{person_service::PersonService, zombie_service::ZombieService},
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    db: DatabaseConnection,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn person(&self) -> PersonService {
        PersonService::new(&self.db)
    }

    pub fn zombie(&self) -> ZombieService {
        ZombieService::new(&self.db)
    }
}
