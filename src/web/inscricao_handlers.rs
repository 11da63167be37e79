// src/web/inscricao_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::inscricao::{DadosInscricao, NovaInscricao},
    services::inscricao_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

// POST /inscricao
pub async fn handle_criar_inscricao(
    State(state): State<AppState>,
    Json(nova): Json<NovaInscricao>,
) -> AppResult<impl IntoResponse> {
    let id = inscricao_service::criar(&state.db_pool, &nova).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Inscrição realizada!", "id": id })),
    ))
}

// GET /inscricao/usuario/{usuario_id}
pub async fn handle_buscar_por_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let inscricao = inscricao_service::buscar_por_usuario(&state.db_pool, usuario_id)
        .await?
        .ok_or(AppError::NaoEncontrado)?;
    Ok(Json(inscricao))
}

// PUT /inscricao/{id} — reenvio pelo próprio inscrito
pub async fn handle_reenviar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dados): Json<DadosInscricao>,
) -> AppResult<impl IntoResponse> {
    inscricao_service::reenviar(&state.db_pool, id, &dados).await?;
    Ok(Json(json!({
        "message": "Inscrição atualizada e enviada para análise!"
    })))
}
