// src/services/asset_service.rs

use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::AssetRepository,
    models::assets::{Asset, NewAsset},
};

// O registro de ferramentas: dono do estado atual de cada ativo. Só dois
// atores mexem nesse estado -- este serviço (edições diretas) e o
// MovementService (escrita do razão).
#[derive(Clone)]
pub struct AssetService {
    asset_repo: AssetRepository,
    pool: SqlitePool,
}

impl AssetService {
    pub fn new(asset_repo: AssetRepository, pool: SqlitePool) -> Self {
        Self { asset_repo, pool }
    }

    /// Cadastra uma ferramenta. A data de ingresso é a de hoje; as
    /// referências de categoria/localização/responsável são conferidas
    /// pelo banco (chave estrangeira), não re-validadas aqui.
    pub async fn create(&self, new: NewAsset) -> Result<Asset, AppError> {
        new.validate()?;

        let intake_date = Utc::now().date_naive();
        let asset = self.asset_repo.insert(&self.pool, &new, intake_date).await?;

        tracing::info!(asset_id = asset.id, "Ferramenta cadastrada");
        Ok(asset)
    }

    pub async fn get(&self, id: i64) -> Result<Asset, AppError> {
        self.asset_repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::AssetNotFound(id))
    }

    /// Substituição integral: todos os campos mutáveis precisam vir no
    /// payload (atualização parcial não é suportada).
    pub async fn update(&self, id: i64, new: NewAsset) -> Result<Asset, AppError> {
        new.validate()?;

        let updated = self
            .asset_repo
            .update(&self.pool, id, &new)
            .await?
            .ok_or(AppError::AssetNotFound(id))?;

        tracing::info!(asset_id = id, "Ferramenta atualizada");
        Ok(updated)
    }

    /// Remove a ferramenta. Não é idempotente: a segunda chamada falha com
    /// AssetNotFound. Os movimentos dela ficam no razão, órfãos de
    /// propósito, para preservar o histórico de auditoria.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.asset_repo.delete(&self.pool, id).await?;
        if !deleted {
            return Err(AppError::AssetNotFound(id));
        }

        tracing::info!(asset_id = id, "Ferramenta removida; movimentos preservados");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Asset>, AppError> {
        self.asset_repo.list(&self.pool).await
    }
}
