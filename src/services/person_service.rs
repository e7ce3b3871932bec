use sea_orm::DatabaseConnection;

use crate::{
    db::entities::{person, zombie},
    db::person_repo,
    error::AppError,
};

/// Result of the mark-eaten update. Zero affected rows is a business
/// outcome of its own, not a database error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkEatenOutcome {
    Eaten,
    NothingToEat,
}

/// Person operations. Database errors are logged for the operator and
/// mapped to `AppError`s carrying the user-facing message.
#[derive(Clone)]
pub struct PersonService {
    db: DatabaseConnection,
}

impl PersonService {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn list_with_zombies(
        &self,
    ) -> Result<Vec<(person::Model, Option<zombie::Model>)>, AppError> {
        person_repo::list_with_zombies(&self.db).await.map_err(|err| {
            tracing::error!("failed to fetch people: {err}");
            AppError::internal("Could not fetch people")
        })
    }

    pub async fn create(&self, name: &str) -> Result<person::Model, AppError> {
        person_repo::insert_person(&self.db, name)
            .await
            .map_err(|err| {
                tracing::error!("failed to create person '{name}': {err}");
                AppError::internal(format!(
                    "Error: could not create a new person named {name}."
                ))
            })
    }

    pub async fn mark_eaten(
        &self,
        person_id: i32,
        zombie_id: i32,
    ) -> Result<MarkEatenOutcome, AppError> {
        let rows_affected = person_repo::mark_eaten(&self.db, person_id, zombie_id)
            .await
            .map_err(|err| {
                tracing::error!("failed to mark person {person_id} eaten by {zombie_id}: {err}");
                AppError::internal(format!("Unknown error. Description: {err}"))
            })?;

        if rows_affected == 0 {
            Ok(MarkEatenOutcome::NothingToEat)
        } else {
            Ok(MarkEatenOutcome::Eaten)
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        person_repo::delete_person(&self.db, id).await.map_err(|err| {
            tracing::error!("failed to delete person {id}: {err}");
            AppError::internal(format!("Could not delete the person with id = {id}."))
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    use super::{MarkEatenOutcome, PersonService};
    use crate::error::AppError;

    fn service_over(db: MockDatabase) -> PersonService {
        PersonService::new(&db.into_connection())
    }

    #[tokio::test]
    async fn mark_eaten_maps_one_row_to_eaten() {
        let service = service_over(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(
            [MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }],
        ));

        let outcome = service
            .mark_eaten(1, 2)
            .await
            .expect("update should succeed");
        assert_eq!(outcome, MarkEatenOutcome::Eaten);
    }

    #[tokio::test]
    async fn mark_eaten_maps_zero_rows_to_nothing_to_eat() {
        let service = service_over(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(
            [MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }],
        ));

        let outcome = service
            .mark_eaten(42, 2)
            .await
            .expect("update should succeed");
        assert_eq!(outcome, MarkEatenOutcome::NothingToEat);
    }

    #[tokio::test]
    async fn mark_eaten_wraps_database_errors_with_description() {
        let service = service_over(MockDatabase::new(DatabaseBackend::Postgres).append_exec_errors(
            [DbErr::Exec(RuntimeErr::Internal("lost connection".to_string()))],
        ));

        let err = service
            .mark_eaten(1, 2)
            .await
            .expect_err("update should fail");
        assert!(matches!(err, AppError::Internal(_)));
        assert!(err.message().starts_with("Unknown error. Description:"));
        assert!(err.message().contains("lost connection"));
    }

    #[tokio::test]
    async fn create_names_the_person_in_the_error_message() {
        let service = service_over(MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(
            [DbErr::Query(RuntimeErr::Internal("insert failed".to_string()))],
        ));

        let err = service
            .create("Joana")
            .await
            .expect_err("create should fail");
        assert_eq!(
            err.message(),
            "Error: could not create a new person named Joana."
        );
    }

    #[tokio::test]
    async fn delete_succeeds_on_zero_affected_rows() {
        let service = service_over(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(
            [MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }],
        ));

        service
            .delete(9999)
            .await
            .expect("delete should succeed even when no row matched");
    }

    #[tokio::test]
    async fn delete_carries_the_id_in_the_error_message() {
        let service = service_over(MockDatabase::new(DatabaseBackend::Postgres).append_exec_errors(
            [DbErr::Exec(RuntimeErr::Internal("delete failed".to_string()))],
        ));

        let err = service.delete(7).await.expect_err("delete should fail");
        assert_eq!(err.message(), "Could not delete the person with id = 7.");
    }
}
