// src/models/assets.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// --- Ferramenta (estado atual) ---
// `location_id` e `custodian_id` são campos desnormalizados: espelham sempre
// o destino do movimento mais recente da ferramenta (ver MovementService).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub brand: String,
    pub model: String,
    pub status: String,
    pub location_id: i64,
    pub custodian_id: i64,
    pub intake_date: NaiveDate,
    pub internal_code: String,
}

// Payload de criação e também de atualização: a atualização é substituição
// integral, todos os campos mutáveis precisam ser reenviados.
// `intake_date` fica de fora: é fixada na criação e nunca mais muda.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: i64,
    #[validate(length(min = 1, message = "A marca é obrigatória"))]
    pub brand: String,
    #[validate(length(min = 1, message = "O modelo é obrigatório"))]
    pub model: String,
    #[validate(length(min = 1, message = "O status é obrigatório"))]
    pub status: String,
    pub location_id: i64,
    pub custodian_id: i64,
    #[validate(length(min = 1, message = "O código interno é obrigatório"))]
    pub internal_code: String,
}
