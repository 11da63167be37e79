// src/web/admin_handlers.rs
use crate::{
    error::AppResult,
    models::inscricao::DadosInscricao,
    services::{inscricao_service, revisao_service},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ParametrosBusca {
    pub busca: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AtualizarStatus {
    pub status: String,
}

// GET /admin/inscricoes?busca=
pub async fn handle_listar_inscricoes(
    State(state): State<AppState>,
    Query(params): Query<ParametrosBusca>,
) -> AppResult<impl IntoResponse> {
    let inscricoes = revisao_service::listar(&state.db_pool, params.busca.as_deref()).await?;
    tracing::debug!("Listagem de revisão com {} inscrições.", inscricoes.len());
    Ok(Json(inscricoes))
}

// PUT /admin/editar/{id} — corrige dados sem mexer no status
pub async fn handle_editar_inscricao(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dados): Json<DadosInscricao>,
) -> AppResult<impl IntoResponse> {
    inscricao_service::editar_admin(&state.db_pool, id, &dados).await?;
    Ok(Json(json!({ "message": "Inscrição editada com sucesso." })))
}

// PUT /admin/atualizar/{id}
pub async fn handle_atualizar_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(corpo): Json<AtualizarStatus>,
) -> AppResult<impl IntoResponse> {
    inscricao_service::atualizar_status(&state.db_pool, id, &corpo.status).await?;
    Ok(Json(json!({
        "message": format!("Status alterado para {}", corpo.status)
    })))
}
