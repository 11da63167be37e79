// src/services/usuario_service.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{NovoUsuario, Usuario},
    services::{auth_service, mapear_violacao_unicidade},
    state::AppState,
};
use sqlx::SqlitePool;

/// Cria uma conta nova. A lista de bloqueio é consultada antes de qualquer
/// trabalho de hashing ou persistência; email duplicado vira erro de
/// conflito específico, não um 500 genérico.
pub async fn cadastrar(state: &AppState, novo: &NovoUsuario) -> AppResult<i64> {
    if novo.nome.trim().is_empty() || novo.email.trim().is_empty() {
        return Err(AppError::Validacao("Nome e email são obrigatórios.".into()));
    }
    if state.email_bloqueado(&novo.email) {
        tracing::warn!("Cadastro bloqueado para email na lista de bloqueio");
        return Err(AppError::CadastroBloqueado);
    }

    let digest = auth_service::hash_senha(&novo.senha).await?;

    let resultado = sqlx::query(
        r#"
        INSERT INTO usuarios (nome_completo, email, senha)
        VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(novo.nome.trim())
    .bind(novo.email.trim())
    .bind(&digest)
    .execute(&state.db_pool)
    .await
    .map_err(mapear_violacao_unicidade)?;

    let id = resultado.last_insert_rowid();
    tracing::info!("✅ Usuário {} criado com sucesso.", id);
    Ok(id)
}

/// Autentica por email + senha. Email desconhecido e senha errada produzem
/// o mesmo erro, para não permitir enumeração de contas.
pub async fn autenticar(db_pool: &SqlitePool, email: &str, senha: &str) -> AppResult<Usuario> {
    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        SELECT id, nome_completo, email, senha
        FROM usuarios
        WHERE email = ?1
        "#,
    )
    .bind(email.trim())
    .fetch_optional(db_pool)
    .await?;

    let Some(usuario) = usuario else {
        tracing::warn!("Tentativa de login com email desconhecido");
        return Err(AppError::CredenciaisInvalidas);
    };

    if auth_service::verificar_senha(senha, &usuario.senha).await? {
        tracing::info!("✅ Login bem-sucedido para usuário {}.", usuario.id);
        Ok(usuario)
    } else {
        tracing::warn!("Senha incorreta para usuário {}", usuario.id);
        Err(AppError::CredenciaisInvalidas)
    }
}
