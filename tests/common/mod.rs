//! Infra compartilhada dos testes de integração: banco sqlite em memória
//! com migrações aplicadas, mais dados de consulta semeados.

#![allow(dead_code)] // nem todo binário de teste usa todos os helpers

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use inventario_core::AppState;
use inventario_core::db::MIGRATOR;
use inventario_core::models::assets::NewAsset;
use inventario_core::models::movements::{MovementKind, NewMovement};

/// Abre um banco em memória já migrado e monta o AppState sobre ele.
/// Uma única conexão: com `sqlite::memory:`, cada conexão da pool seria um
/// banco separado.
pub async fn setup() -> AppState {
    let _ = tracing_subscriber::fmt().with_target(false).compact().try_init();

    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("URL de teste inválida")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Falha ao abrir o banco em memória");

    MIGRATOR.run(&pool).await.expect("Falha ao migrar o banco de teste");

    AppState::from_pool(pool)
}

/// Banco em arquivo temporário com várias conexões na pool, para exercitar
/// leitores e escritores em conexões distintas (o banco em memória de
/// [`setup`] não permite isso). Devolve o caminho para limpeza no final.
pub async fn setup_multi_conn(label: &str) -> (AppState, PathBuf) {
    let _ = tracing_subscriber::fmt().with_target(false).compact().try_init();

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "inventario-{label}-{}-{nanos}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await
        .expect("Falha ao abrir o banco em arquivo");

    MIGRATOR.run(&pool).await.expect("Falha ao migrar o banco de teste");

    (AppState::from_pool(pool), path)
}

/// Remove o arquivo do banco e os arquivos auxiliares do sqlite.
pub fn cleanup_db_file(path: &Path) {
    for suffix in ["", "-wal", "-shm", "-journal"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

/// Ids das linhas de consulta semeadas por [`seed_lookups`].
#[derive(Clone, Copy)]
pub struct Seed {
    pub category_id: i64,
    pub warehouse_a: i64,
    pub site_north: i64,
    pub perez: i64,
    pub torres: i64,
}

/// Semeia o mesmo conjunto de categorias/localizações/responsáveis da carga
/// inicial do sistema.
pub async fn seed_lookups(state: &AppState) -> Seed {
    let category = state.lookups.create_category("Taladros").await.unwrap();
    let warehouse_a = state.lookups.create_location("Bodega A").await.unwrap();
    let site_north = state.lookups.create_location("Obra Norte").await.unwrap();
    let perez = state.lookups.create_custodian("Juan Pérez").await.unwrap();
    let torres = state.lookups.create_custodian("Ana Torres").await.unwrap();

    Seed {
        category_id: category.id,
        warehouse_a: warehouse_a.id,
        site_north: site_north.id,
        perez: perez.id,
        torres: torres.id,
    }
}

/// Payload de ferramenta válido, em "Bodega A" com "Juan Pérez".
pub fn asset_payload(seed: &Seed) -> NewAsset {
    NewAsset {
        name: "Taladro percutor".into(),
        description: "Taladro de 750W".into(),
        category_id: seed.category_id,
        brand: "Bosch".into(),
        model: "GSB 16 RE".into(),
        status: "disponible".into(),
        location_id: seed.warehouse_a,
        custodian_id: seed.perez,
        internal_code: "HER-001".into(),
    }
}

/// Empréstimo de "Bodega A" para "Obra Norte", recebido por "Ana Torres".
pub fn loan_movement(asset_id: i64, seed: &Seed, date: &str) -> NewMovement {
    NewMovement {
        asset_id,
        custodian_id: seed.torres,
        kind: MovementKind::Loan,
        date: parse_date(date),
        origin_location_id: seed.warehouse_a,
        destination_location_id: seed.site_north,
        notes: String::new(),
    }
}

pub fn parse_date(date: &str) -> NaiveDate {
    date.parse().expect("data de teste inválida")
}
