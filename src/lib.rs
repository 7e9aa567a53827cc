// src/lib.rs
//
// Núcleo do inventário de ferramentas: registro de ativos (estado atual),
// razão append-only de movimentos e projeção de resumo/export. A camada
// HTTP, a validação de schema e a UI ficam fora deste crate; elas consomem
// os serviços expostos pelo AppState.

pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

pub use common::error::AppError;
pub use config::AppState;
