// src/services/mod.rs
pub mod auth_service;
pub mod inscricao_service;
pub mod revisao_service;
pub mod usuario_service;

use crate::error::AppError;

/// Traduz violações de unicidade do SQLite para erros de domínio, mantendo
/// o texto cru do banco fora das respostas. Qualquer outro erro segue como
/// erro de infraestrutura.
pub(crate) fn mapear_violacao_unicidade(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let msg = db_err.message();
            if msg.contains("inscricoes.cpf") {
                return AppError::CpfJaCadastrado;
            }
            if msg.contains("inscricoes.usuario_id") {
                return AppError::UsuarioJaInscrito;
            }
            if msg.contains("usuarios.email") {
                return AppError::EmailJaCadastrado;
            }
        }
    }
    AppError::Sqlx(err)
}
