use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

/// Creates a database connection pool.
///
/// An in-memory SQLite database lives only as long as its connection, so
/// that case is pinned to a single pooled connection.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    if database_url.starts_with("sqlite::memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    info!("Connected to {:?} database", db.get_database_backend());

    Ok(db)
}
