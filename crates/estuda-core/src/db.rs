use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::migrator::Migrator;

/// Connects to the database and brings the schema up to date.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, DbBackend, Statement};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_create_connection_runs_migrations() {
        let dir = tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let db = create_connection(&url).await.unwrap();

        let rows = db
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' \
                 AND name IN ('usuarios', 'disciplinas', 'provas')",
            ))
            .await
            .unwrap();

        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn test_create_connection_file_backed() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let _db = create_connection(&url).await.unwrap();
        assert!(db_path.exists());
    }
}
