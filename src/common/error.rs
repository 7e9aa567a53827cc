use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Toda operação dos serviços devolve Result<_, AppError>; nada é engolido
// em silêncio e nenhuma falha é re-tentada internamente.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    Validation(#[from] validator::ValidationErrors),

    // Violação de chave estrangeira vinda do banco: alguma referência de
    // categoria/localização/responsável aponta para um id inexistente.
    #[error("Referência inexistente: {0}")]
    InvalidReference(String),

    #[error("Ferramenta não encontrada: id {0}")]
    AssetNotFound(i64),

    #[error("Já existe uma categoria com o nome '{0}'")]
    CategoryNameAlreadyExists(String),

    // Reservado para corridas de atualização concorrente que o banco
    // reporte como tal (ver política de concorrência no MovementService).
    #[error("Conflito de atualização concorrente")]
    Conflict,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    Database(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno")]
    Internal(#[from] anyhow::Error),
}
