// src/services/auth_service.rs
use crate::error::{AppError, AppResult};

/// Verifica se a senha fornecida corresponde ao digest guardado.
/// bcrypt é CPU-bound, então roda em spawn_blocking para não travar o runtime.
pub async fn verificar_senha(senha: &str, digest_guardado: &str) -> AppResult<bool> {
    let senha = senha.to_string();
    let digest_guardado = digest_guardado.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(&senha, &digest_guardado))
        .await
        .map_err(|e| {
            tracing::error!("Erro na task spawn_blocking (verificar_senha): {:?}", e);
            AppError::Interno
        })?
        .map_err(|e| {
            tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
            AppError::PasswordHashing
        })
}

/// Gera um digest bcrypt para uma senha. A senha em claro nunca é logada.
pub async fn hash_senha(senha: &str) -> AppResult<String> {
    let senha = senha.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(&senha, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| {
            tracing::error!("Erro na task spawn_blocking (hash_senha): {:?}", e);
            AppError::Interno
        })?
        .map_err(|e| {
            tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
            AppError::PasswordHashing
        })
}
