// src/db/db.rs

use std::{str::FromStr, time::Duration};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::common::error::AppError;

// Migrações embutidas; também usadas pelos testes de integração.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Abre a pool de conexões com enforcement de chaves estrangeiras ligado.
/// As referências a categorias/localizações/responsáveis dependem disso.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await?;

    Ok(pool)
}

// Converte violação de chave estrangeira em um erro mais amigável; o resto
// segue como erro de banco.
pub(crate) fn map_reference_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return AppError::InvalidReference(db_err.message().to_string());
        }
    }
    e.into()
}
