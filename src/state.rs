// src/state.rs
use sqlx::SqlitePool;
use std::collections::HashSet;
use std::sync::Arc;

// Estado partilhado da aplicação: o pool de conexões e a lista de emails
// bloqueados para cadastro (mitigação de spam), carregada uma vez no arranque.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub emails_bloqueados: Arc<HashSet<String>>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, emails_bloqueados: impl IntoIterator<Item = String>) -> Self {
        let emails_bloqueados = emails_bloqueados
            .into_iter()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect::<HashSet<_>>();
        Self {
            db_pool,
            emails_bloqueados: Arc::new(emails_bloqueados),
        }
    }

    /// Lê a lista de emails bloqueados da variável EMAILS_BLOQUEADOS
    /// (separados por vírgula). Variável ausente => lista vazia.
    pub fn emails_bloqueados_do_ambiente() -> Vec<String> {
        std::env::var("EMAILS_BLOQUEADOS")
            .map(|v| v.split(',').map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn email_bloqueado(&self, email: &str) -> bool {
        self.emails_bloqueados.contains(&email.trim().to_lowercase())
    }
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
