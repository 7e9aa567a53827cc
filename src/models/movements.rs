// src/models/movements.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase")] // Banco (TEXT)
#[serde(rename_all = "lowercase")] // JSON
pub enum MovementKind {
    Loan,
    Return,
    Maintenance,
    Transfer,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Loan => "loan",
            MovementKind::Return => "return",
            MovementKind::Maintenance => "maintenance",
            MovementKind::Transfer => "transfer",
        }
    }
}

// --- Movimento (entrada do razão) ---
// Imutável depois de criado: o razão não define update nem delete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: i64,
    pub asset_id: i64,
    pub custodian_id: i64,
    pub kind: MovementKind,
    pub date: NaiveDate,
    pub origin_location_id: i64,
    pub destination_location_id: i64,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub asset_id: i64,
    pub custodian_id: i64,
    pub kind: MovementKind,
    pub date: NaiveDate,
    pub origin_location_id: i64,
    pub destination_location_id: i64,
    #[validate(length(max = 500, message = "As observações excedem 500 caracteres"))]
    #[serde(default)]
    pub notes: String,
}
