// src/web/mod.rs
pub mod admin_handlers;
pub mod auth_handlers;
pub mod inscricao_handlers;
pub mod routes;
