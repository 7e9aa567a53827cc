// src/db/lookup_repo.rs

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::lookups::{Category, Custodian, Location},
};

// Repositório das entidades de consulta (categorias, localizações,
// responsáveis). O transporte só lista; a criação existe para carga
// inicial e testes. A exclusão fica com o banco: qualquer linha ainda
// referenciada por ferramenta ou movimento é protegida por chave
// estrangeira (política de restrição, não de cascata).
#[derive(Clone)]
pub struct LookupRepository {
    pool: SqlitePool,
}

impl LookupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ---
    // Listagens
    // ---

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>, AppError> {
        let locations = sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(locations)
    }

    pub async fn list_custodians(&self) -> Result<Vec<Custodian>, AppError> {
        let custodians =
            sqlx::query_as::<_, Custodian>("SELECT * FROM custodians ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(custodians)
    }

    // ---
    // Resolução de rótulos (consumida pela projeção de resumo)
    // ---
    // Devolve None quando o id não resolve; a projeção tolera o rótulo
    // ausente em vez de falhar. Aceitam executor para participarem do
    // snapshot da projeção.

    pub async fn category_label<'e, E>(&self, executor: E, id: i64) -> Result<Option<String>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(name)
    }

    pub async fn location_label<'e, E>(&self, executor: E, id: i64) -> Result<Option<String>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM locations WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(name)
    }

    pub async fn custodian_label<'e, E>(&self, executor: E, id: i64) -> Result<Option<String>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let name = sqlx::query_scalar::<_, String>("SELECT full_name FROM custodians WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(name)
    }

    // ---
    // Criação (carga inicial / testes)
    // ---

    pub async fn create_category(&self, name: &str) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES (?) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                // Converte violação de chave única em um erro mais amigável
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return AppError::CategoryNameAlreadyExists(name.to_string());
                    }
                }
                e.into()
            })
    }

    pub async fn create_location(&self, name: &str) -> Result<Location, AppError> {
        let location =
            sqlx::query_as::<_, Location>("INSERT INTO locations (name) VALUES (?) RETURNING *")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(location)
    }

    pub async fn create_custodian(&self, full_name: &str) -> Result<Custodian, AppError> {
        let custodian = sqlx::query_as::<_, Custodian>(
            "INSERT INTO custodians (full_name) VALUES (?) RETURNING *",
        )
        .bind(full_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(custodian)
    }
}
