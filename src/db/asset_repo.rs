// src/db/asset_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    db::db::map_reference_violation,
    models::assets::{Asset, NewAsset},
};

// O repositório de ferramentas, responsável por todas as interações com a
// tabela 'assets'.
#[derive(Clone)]
pub struct AssetRepository {
    pool: SqlitePool,
}

impl AssetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ---
    // Funções de "Leitura" (Getters)
    // ---
    // As leituras também aceitam um executor: o razão lê a ferramenta
    // DENTRO da transação que grava o movimento, e a projeção de resumo
    // lê tudo dentro de um snapshot único.

    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Asset>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let asset = sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(asset)
    }

    /// Todas as ferramentas, ordenadas por id para iteração estável.
    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Asset>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let assets = sqlx::query_as::<_, Asset>("SELECT * FROM assets ORDER BY id ASC")
            .fetch_all(executor)
            .await?;
        Ok(assets)
    }

    // ---
    // Funções de "Escrita" (Transacionais)
    // ---

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        new: &NewAsset,
        intake_date: NaiveDate,
    ) -> Result<Asset, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets
                (name, description, category_id, brand, model, status,
                 location_id, custodian_id, intake_date, internal_code)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.category_id)
        .bind(&new.brand)
        .bind(&new.model)
        .bind(&new.status)
        .bind(new.location_id)
        .bind(new.custodian_id)
        .bind(intake_date)
        .bind(&new.internal_code)
        .fetch_one(executor)
        .await
        .map_err(map_reference_violation)
    }

    /// Substituição integral dos campos mutáveis; `intake_date` não muda.
    /// Devolve None quando o id não existe.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        new: &NewAsset,
    ) -> Result<Option<Asset>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets
            SET name = ?, description = ?, category_id = ?, brand = ?,
                model = ?, status = ?, location_id = ?, custodian_id = ?,
                internal_code = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.category_id)
        .bind(&new.brand)
        .bind(&new.model)
        .bind(&new.status)
        .bind(new.location_id)
        .bind(new.custodian_id)
        .bind(&new.internal_code)
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(map_reference_violation)
    }

    /// Atualização desnormalizada feita pelo razão: localização e
    /// responsável atuais passam a ser o destino do movimento.
    pub async fn set_current_holding<'e, E>(
        &self,
        executor: E,
        id: i64,
        location_id: i64,
        custodian_id: i64,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("UPDATE assets SET location_id = ?, custodian_id = ? WHERE id = ?")
            .bind(location_id)
            .bind(custodian_id)
            .bind(id)
            .execute(executor)
            .await
            .map_err(map_reference_violation)?;
        Ok(())
    }

    /// Devolve true se alguma linha foi removida. Os movimentos da
    /// ferramenta não são tocados: histórico órfão é preservado.
    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM assets WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
