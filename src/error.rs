// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrate(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Erro ao processar senha")]
    PasswordHashing,

    #[error("Dados inválidos: {0}")]
    Validacao(String),

    #[error("Email já cadastrado")]
    EmailJaCadastrado,

    #[error("CPF já cadastrado")]
    CpfJaCadastrado,

    #[error("Usuário já possui inscrição")]
    UsuarioJaInscrito,

    #[error("Cadastro não permitido para este email")]
    CadastroBloqueado,

    #[error("Credenciais inválidas")]
    CredenciaisInvalidas,

    #[error("Registro não encontrado")]
    NaoEncontrado,

    #[error("Erro interno inesperado")]
    Interno,
}

// Como converter AppError numa resposta HTTP (JSON).
// Erros de domínio viram códigos específicos; erros de infraestrutura são
// logados com detalhe no servidor e o cliente recebe uma mensagem genérica
// (o texto cru do banco nunca vaza na resposta).
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Erro processado: {:?}", self);

        let (status, body) = match &self {
            AppError::Validacao(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::CpfJaCadastrado => {
                // Contrato legado: CPF duplicado responde 400 com mensagem de campo
                (StatusCode::BAD_REQUEST, json!({ "error": "CPF já cadastrado." }))
            }
            AppError::EmailJaCadastrado => {
                (StatusCode::CONFLICT, json!({ "error": "Email já cadastrado." }))
            }
            AppError::UsuarioJaInscrito => (
                StatusCode::CONFLICT,
                json!({ "error": "Este usuário já possui uma inscrição." }),
            ),
            AppError::CadastroBloqueado => (
                StatusCode::FORBIDDEN,
                json!({ "error": "Cadastro não permitido para este email." }),
            ),
            AppError::CredenciaisInvalidas => {
                // Mensagem idêntica para email desconhecido e senha errada
                (StatusCode::UNAUTHORIZED, json!({ "message": "Email ou senha incorretos" }))
            }
            AppError::NaoEncontrado => {
                (StatusCode::NOT_FOUND, json!({ "message": "Registro não encontrado." }))
            }
            AppError::Sqlx(_) | AppError::SqlxMigrate(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Erro ao acessar os dados." }),
            ),
            AppError::EnvVar(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Erro de configuração." }),
            ),
            AppError::PasswordHashing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Erro interno ao processar senha." }),
            ),
            AppError::Interno => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Ocorreu um erro inesperado." }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
