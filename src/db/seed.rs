use sea_orm::DatabaseConnection;

use super::zombie_repo;

/// Starter roster so the mark-eaten flow works on a fresh database.
const ZOMBIE_ROSTER: [&str; 4] = ["Shambler", "Lurker", "Gnasher", "Patient Zero"];

/// Inserts the fixed zombie roster once; a non-empty table is left alone.
pub async fn ensure_zombies(db: &DatabaseConnection) -> anyhow::Result<()> {
    let existing = zombie_repo::count_zombies(db).await?;
    if existing > 0 {
        tracing::info!("zombie roster already present ({existing} zombies)");
        return Ok(());
    }

    for name in ZOMBIE_ROSTER {
        zombie_repo::insert_zombie(db, name).await?;
    }
    tracing::info!("seeded {} zombies", ZOMBIE_ROSTER.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_zombies;
    use crate::db::zombie_repo;
    use crate::test_helpers::test_db;

    #[tokio::test]
    async fn seeds_roster_on_empty_table() {
        let db = test_db().await;

        ensure_zombies(&db).await.expect("seed should succeed");

        let zombies = zombie_repo::list_zombies(&db)
            .await
            .expect("list should succeed");
        assert_eq!(zombies.len(), 4);
        assert_eq!(zombies[0].name, "Shambler");
    }

    #[tokio::test]
    async fn second_run_is_a_noop() {
        let db = test_db().await;

        ensure_zombies(&db).await.expect("first seed should succeed");
        zombie_repo::insert_zombie(&db, "Extra")
            .await
            .expect("insert should succeed");
        ensure_zombies(&db)
            .await
            .expect("second seed should succeed");

        let count = zombie_repo::count_zombies(&db)
            .await
            .expect("count should succeed");
        assert_eq!(count, 5);
    }
}
