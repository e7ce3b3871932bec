use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait, sea_query::Expr,
};

use super::entities::person;
use super::entities::prelude::{Person, Zombie};

/// People joined to the zombie that ate them (left outer join), so still
/// living rows come back with `None` on the zombie side.
pub async fn list_with_zombies(
    db: &DatabaseConnection,
) -> Result<Vec<(person::Model, Option<super::entities::zombie::Model>)>, sea_orm::DbErr> {
    Person::find()
        .find_also_related(Zombie)
        .order_by_asc(person::Column::Id)
        .all(db)
        .await
}

/// Inserts on a dedicated transaction. On insert failure the transaction is
/// rolled back, swallowing any rollback error so the insert error is the one
/// that propagates; the connection returns to the pool on every path.
pub async fn insert_person(
    db: &DatabaseConnection,
    name: &str,
) -> Result<person::Model, sea_orm::DbErr> {
    let txn = db.begin().await?;

    let model = person::ActiveModel {
        name: Set(name.to_string()),
        alive: Set(true),
        ..Default::default()
    };

    match model.insert(&txn).await {
        Ok(created) => {
            txn.commit().await?;
            Ok(created)
        }
        Err(err) => {
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}

/// The one multi-field state transition: alive -> eaten, both columns in a
/// single statement. Returns the affected-row count; zero means there was
/// nobody to eat and is the caller's call, not an error.
pub async fn mark_eaten(
    db: &DatabaseConnection,
    person_id: i32,
    zombie_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = Person::update_many()
        .col_expr(person::Column::Alive, Expr::value(false))
        .col_expr(person::Column::EatenBy, Expr::value(zombie_id))
        .filter(person::Column::Id.eq(person_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Deletes by id without checking the row exists first; the affected-row
/// count is deliberately not inspected.
pub async fn delete_person(db: &DatabaseConnection, id: i32) -> Result<(), sea_orm::DbErr> {
    Person::delete_by_id(id).exec(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    use super::{insert_person, mark_eaten};
    use crate::db::entities::person;

    fn person_model(id: i32, name: &str) -> person::Model {
        person::Model {
            id,
            name: name.to_string(),
            alive: true,
            eaten_by: None,
        }
    }

    #[tokio::test]
    async fn insert_person_commits_and_returns_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[person_model(1, "Maria")]])
            .into_connection();

        let created = insert_person(&db, "Maria")
            .await
            .expect("insert should succeed");
        assert_eq!(created.name, "Maria");
        assert!(created.alive);
        assert_eq!(created.eaten_by, None);
    }

    #[tokio::test]
    async fn insert_person_surfaces_the_insert_error_not_the_rollback() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "insert exploded".to_string(),
            ))])
            .into_connection();

        let err = insert_person(&db, "Maria")
            .await
            .expect_err("insert should fail");
        assert!(err.to_string().contains("insert exploded"));
    }

    #[tokio::test]
    async fn mark_eaten_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let hit = mark_eaten(&db, 1, 2).await.expect("update should succeed");
        assert_eq!(hit, 1);

        let miss = mark_eaten(&db, 99, 2).await.expect("update should succeed");
        assert_eq!(miss, 0);
    }
}
