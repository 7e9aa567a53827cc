// src/config.rs

use std::env;

use anyhow::Context;
use sqlx::SqlitePool;

use crate::db::{self, AssetRepository, LookupRepository, MovementRepository};
use crate::services::{AssetService, MovementService, SummaryService};

// O estado da aplicação: a pool é o handle explícito do banco, passado a
// cada componente na construção. Nada de sessão global de processo; cada
// operação adquire sua transação no escopo e a libera em qualquer saída.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub assets: AssetService,
    pub movements: MovementService,
    pub summary: SummaryService,
    pub lookups: LookupRepository,
}

impl AppState {
    /// Carrega o .env, abre a pool e roda as migrações.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let db_pool = db::connect(&database_url).await?;
        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        db::MIGRATOR
            .run(&db_pool)
            .await
            .context("Falha ao rodar as migrações do banco de dados")?;
        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    /// Monta o gráfico de dependências sobre uma pool já aberta (testes e
    /// binários que embutem o núcleo).
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        let asset_repo = AssetRepository::new(db_pool.clone());
        let movement_repo = MovementRepository::new(db_pool.clone());
        let lookup_repo = LookupRepository::new(db_pool.clone());

        let assets = AssetService::new(asset_repo.clone(), db_pool.clone());
        let movements = MovementService::new(
            movement_repo.clone(),
            asset_repo.clone(),
            db_pool.clone(),
        );
        let summary = SummaryService::new(
            asset_repo,
            movement_repo,
            lookup_repo.clone(),
            db_pool.clone(),
        );

        Self {
            db_pool,
            assets,
            movements,
            summary,
            lookups: lookup_repo,
        }
    }
}
