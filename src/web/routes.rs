// src/web/routes.rs
use crate::{
    state::AppState,
    web::{admin_handlers, auth_handlers, inscricao_handlers},
};
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    let public_routes = Router::new()
        .route("/", get(|| async { "API Auxília no ar!" }))
        .route("/cadastro", post(auth_handlers::handle_cadastro))
        .route("/login", post(auth_handlers::handle_login))
        .route("/inscricao", post(inscricao_handlers::handle_criar_inscricao))
        .route(
            "/inscricao/usuario/{usuario_id}",
            get(inscricao_handlers::handle_buscar_por_usuario),
        )
        .route("/inscricao/{id}", put(inscricao_handlers::handle_reenviar));

    // --- Rotas de Admin ---
    // Sem verificação de acesso: o contrato legado expõe estas rotas abertas
    // e o front-end administrativo existente depende disso.
    let admin_routes = Router::new()
        .route("/inscricoes", get(admin_handlers::handle_listar_inscricoes))
        .route("/editar/{id}", put(admin_handlers::handle_editar_inscricao))
        .route("/atualizar/{id}", put(admin_handlers::handle_atualizar_status));

    Router::new()
        .merge(public_routes)
        .nest("/admin", admin_routes)
        .with_state(app_state)
}
