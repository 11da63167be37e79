// src/web/auth_handlers.rs
use crate::{
    error::AppResult,
    models::usuario::{Credenciais, NovoUsuario},
    services::usuario_service,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

// POST /cadastro
pub async fn handle_cadastro(
    State(state): State<AppState>,
    Json(novo): Json<NovoUsuario>,
) -> AppResult<impl IntoResponse> {
    tracing::info!("Tentativa de cadastro");
    usuario_service::cadastrar(&state, &novo).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Usuário criado com sucesso!" })),
    ))
}

// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(credenciais): Json<Credenciais>,
) -> AppResult<impl IntoResponse> {
    let usuario =
        usuario_service::autenticar(&state.db_pool, &credenciais.email, &credenciais.senha).await?;
    // 'usuario' serializa sem o digest de senha
    Ok(Json(json!({ "message": "Login realizado!", "user": usuario })))
}
