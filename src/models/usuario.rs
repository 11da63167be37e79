// src/models/usuario.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa uma conta lida da tabela 'usuarios'.
// A coluna legada 'senha' guarda o digest bcrypt e nunca é serializada
// em respostas.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nome_completo: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub senha: String,
}

// Corpo de POST /cadastro
#[derive(Debug, Deserialize)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

// Corpo de POST /login
#[derive(Debug, Deserialize)]
pub struct Credenciais {
    pub email: String,
    pub senha: String,
}
