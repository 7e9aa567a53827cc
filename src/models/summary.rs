// src/models/summary.rs

use serde::{Deserialize, Serialize};

use crate::models::movements::Movement;

// --- Resumo por ferramenta ---
// Visão derivada, somente leitura: junta o estado atual da ferramenta com o
// seu último movimento. Os rótulos resolvidos ficam como Option: um lookup
// apagado vira None em vez de derrubar a projeção inteira.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
    pub current_location: Option<String>,
    pub current_custodian: Option<String>,
    pub last_movement: Option<Movement>,
}
