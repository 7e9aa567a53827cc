// src/services/summary_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{AssetRepository, LookupRepository, MovementRepository},
    models::summary::AssetSummary,
};

/// Nome fixo do anexo quando o export é servido como download.
pub const EXPORT_FILENAME: &str = "resumen_herramientas.csv";

const EXPORT_HEADER: &str = "id,name,description,status,current_location,current_custodian,\
                             last_movement_kind,last_movement_date,last_movement_notes";

// A projeção de resumo: componente somente leitura que junta, por
// ferramenta, o estado atual com o último movimento do razão.
#[derive(Clone)]
pub struct SummaryService {
    asset_repo: AssetRepository,
    movement_repo: MovementRepository,
    lookup_repo: LookupRepository,
    pool: SqlitePool,
}

impl SummaryService {
    pub fn new(
        asset_repo: AssetRepository,
        movement_repo: MovementRepository,
        lookup_repo: LookupRepository,
        pool: SqlitePool,
    ) -> Self {
        Self {
            asset_repo,
            movement_repo,
            lookup_repo,
            pool,
        }
    }

    /// Uma linha por ferramenta, em ordem de id. O "último movimento" é o
    /// de maior data; empate de data decide pelo maior id (o registrado por
    /// último). Rótulos que não resolvem viram None.
    ///
    /// Todas as leituras compartilham uma transação: a projeção enxerga um
    /// snapshot único do banco e nunca emparelha um movimento recém
    /// confirmado com o estado anterior da ferramenta (nem o contrário).
    pub async fn summarize(&self) -> Result<Vec<AssetSummary>, AppError> {
        let mut tx = self.pool.begin().await?;

        let assets = self.asset_repo.list(&mut *tx).await?;

        let mut summaries = Vec::with_capacity(assets.len());
        for asset in assets {
            let last_movement = self
                .movement_repo
                .latest_for_asset(&mut *tx, asset.id)
                .await?;
            let current_location = self
                .lookup_repo
                .location_label(&mut *tx, asset.location_id)
                .await?;
            let current_custodian = self
                .lookup_repo
                .custodian_label(&mut *tx, asset.custodian_id)
                .await?;

            summaries.push(AssetSummary {
                id: asset.id,
                name: asset.name,
                description: asset.description,
                status: asset.status,
                current_location,
                current_custodian,
                last_movement,
            });
        }

        // Somente leitura; o commit apenas encerra o snapshot.
        tx.commit().await?;
        Ok(summaries)
    }

    /// Renderização tabular do resumo, estável byte a byte para entrada
    /// fixa: mesma ordem de colunas, datas ISO, string vazia para
    /// ferramenta sem movimento ou rótulo que não resolve, quebra de
    /// linha '\n'.
    pub async fn export_csv(&self) -> Result<String, AppError> {
        let summaries = self.summarize().await?;

        let mut out = String::from(EXPORT_HEADER);
        out.push('\n');

        for summary in summaries {
            let (kind, date, notes) = match &summary.last_movement {
                Some(m) => (
                    m.kind.as_str().to_string(),
                    m.date.format("%Y-%m-%d").to_string(),
                    m.notes.clone(),
                ),
                None => (String::new(), String::new(), String::new()),
            };

            let fields = [
                summary.id.to_string(),
                summary.name,
                summary.description,
                summary.status,
                summary.current_location.unwrap_or_default(),
                summary.current_custodian.unwrap_or_default(),
                kind,
                date,
                notes,
            ];

            let mut first = true;
            for field in &fields {
                if !first {
                    out.push(',');
                }
                out.push_str(&csv_field(field));
                first = false;
            }
            out.push('\n');
        }

        Ok(out)
    }
}

// Aspas no estilo RFC 4180: campo com vírgula, aspas ou quebra de linha é
// envolto em aspas duplas, com aspas internas dobradas.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        let mut quoted = String::with_capacity(raw.len() + 2);
        quoted.push('"');
        for c in raw.chars() {
            if c == '"' {
                quoted.push('"');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    } else {
        raw.to_string()
    }
}
