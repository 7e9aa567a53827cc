// src/models/lookups.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Entidades de consulta: referenciadas por id a partir de ferramentas e
// movimentos, expostas ao transporte apenas como listagem.

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Custodian {
    pub id: i64,
    pub full_name: String,
}
