// src/db/movement_repo.rs

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    db::db::map_reference_violation,
    models::movements::{Movement, NewMovement},
};

// O repositório do razão de movimentos. Só existem INSERT e SELECT:
// movimentos são imutáveis depois de criados.
#[derive(Clone)]
pub struct MovementRepository {
    pool: SqlitePool,
}

impl MovementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E>(&self, executor: E, new: &NewMovement) -> Result<Movement, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO movements
                (asset_id, custodian_id, kind, date,
                 origin_location_id, destination_location_id, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(new.asset_id)
        .bind(new.custodian_id)
        .bind(new.kind)
        .bind(new.date)
        .bind(new.origin_location_id)
        .bind(new.destination_location_id)
        .bind(&new.notes)
        .fetch_one(executor)
        .await
        .map_err(map_reference_violation)
    }

    /// Todos os movimentos, sem filtro, na ordem de inserção.
    pub async fn list(&self) -> Result<Vec<Movement>, AppError> {
        let movements = sqlx::query_as::<_, Movement>("SELECT * FROM movements ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(movements)
    }

    /// Último movimento da ferramenta: maior data e, em empate de data,
    /// maior id (o registrado por último vence). Determinístico por
    /// construção, exigido pela projeção de resumo. Aceita executor para
    /// participar do snapshot da projeção.
    pub async fn latest_for_asset<'e, E>(
        &self,
        executor: E,
        asset_id: i64,
    ) -> Result<Option<Movement>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let movement = sqlx::query_as::<_, Movement>(
            r#"
            SELECT * FROM movements
            WHERE asset_id = ?
            ORDER BY date DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(asset_id)
        .fetch_optional(executor)
        .await?;
        Ok(movement)
    }
}
