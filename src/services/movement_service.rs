// src/services/movement_service.rs

use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::{AssetRepository, MovementRepository},
    models::movements::{Movement, NewMovement},
};

// O razão de movimentos: log append-only das transferências e único caminho
// de escrita que toca duas entidades de uma vez.
#[derive(Clone)]
pub struct MovementService {
    movement_repo: MovementRepository,
    asset_repo: AssetRepository,
    pool: SqlitePool,
}

impl MovementService {
    pub fn new(
        movement_repo: MovementRepository,
        asset_repo: AssetRepository,
        pool: SqlitePool,
    ) -> Self {
        Self {
            movement_repo,
            asset_repo,
            pool,
        }
    }

    /// Registra um movimento no razão.
    ///
    /// Esta é a transação de duas escritas do sistema, explícita e não um
    /// efeito colateral: insere a linha imutável do movimento E atualiza os
    /// campos desnormalizados da ferramenta (localização/responsável atuais)
    /// para o destino do movimento. Ou as duas escritas são confirmadas
    /// juntas, ou nenhuma.
    ///
    /// Política deliberada: a localização de ORIGEM declarada não é
    /// conferida contra a localização atual da ferramenta. O razão aceita o
    /// movimento mesmo em desacordo; simplicidade de append acima de
    /// verificação estrita de consistência.
    pub async fn append(&self, new: NewMovement) -> Result<Movement, AppError> {
        new.validate()?;

        let mut tx = self.pool.begin().await?;

        // A leitura participa da transação: um update/delete concorrente da
        // mesma ferramenta não se intercala entre a verificação e as duas
        // escritas, e nenhum leitor observa um movimento meio aplicado.
        self.asset_repo
            .find_by_id(&mut *tx, new.asset_id)
            .await?
            .ok_or(AppError::AssetNotFound(new.asset_id))?;

        let movement = self.movement_repo.insert(&mut *tx, &new).await?;

        self.asset_repo
            .set_current_holding(
                &mut *tx,
                new.asset_id,
                new.destination_location_id,
                new.custodian_id,
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            movement_id = movement.id,
            asset_id = movement.asset_id,
            kind = movement.kind.as_str(),
            "Movimento registrado"
        );
        Ok(movement)
    }

    /// Todos os movimentos, sem filtro, na ordem em que foram registrados.
    pub async fn list(&self) -> Result<Vec<Movement>, AppError> {
        self.movement_repo.list().await
    }
}
