// src/services/revisao_service.rs
//
// Monta a listagem de revisão dos administradores: cada inscrição enriquecida
// com o email do dono, filtrada por um termo de busca opcional e ordenada com
// as não resolvidas primeiro. O filtro e a ordenação ficam em funções puras
// (case-insensitive correto para acentos, coisa que o LIKE do SQLite não dá).

use crate::{
    error::AppResult,
    models::inscricao::{InscricaoComEmail, StatusAprovacao},
};
use sqlx::SqlitePool;

/// Listagem completa (busca ausente) ou filtrada. Cada chamada reconsulta o
/// banco; não há cache.
pub async fn listar(db_pool: &SqlitePool, busca: Option<&str>) -> AppResult<Vec<InscricaoComEmail>> {
    // Mais recentes primeiro; a ordenação por bucket é estável e preserva isto.
    let linhas = sqlx::query_as::<_, InscricaoComEmail>(
        r#"
        SELECT i.id, i.usuario_id, i.nome_completo, i.cpf, i.idade, i.sexo,
               i.endereco, i.renda_familiar, i.numero_membros_familia,
               i.despesas_mensais, i.nivel_escolaridade, i.status_aprovacao,
               i.data_inscricao, u.email
        FROM inscricoes i
        JOIN usuarios u ON u.id = i.usuario_id
        ORDER BY i.data_inscricao DESC, i.id DESC
        "#,
    )
    .fetch_all(db_pool)
    .await?;

    let mut linhas = match busca.map(str::trim) {
        Some(termo) if !termo.is_empty() => {
            let termo = termo.to_lowercase();
            linhas
                .into_iter()
                .filter(|linha| corresponde(linha, &termo))
                .collect()
        }
        _ => linhas,
    };

    linhas.sort_by_key(|linha| bucket_de_prioridade(linha.inscricao.status_aprovacao.as_deref()));
    Ok(linhas)
}

/// Busca por substring, case-insensitive, em nome OU cpf OU status
/// (condições independentes). `termo` já chega em minúsculas.
fn corresponde(linha: &InscricaoComEmail, termo: &str) -> bool {
    let inscricao = &linha.inscricao;
    inscricao.nome_completo.to_lowercase().contains(termo)
        || inscricao.cpf.to_lowercase().contains(termo)
        || inscricao
            .status_aprovacao
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(termo)
}

/// Bucket 0: ainda por resolver (sem status, PENDENTE, EM ANÁLISE).
/// Bucket 1: todo o resto, incluindo rótulos legados desconhecidos.
fn bucket_de_prioridade(rotulo: Option<&str>) -> u8 {
    match StatusAprovacao::do_rotulo(rotulo) {
        Ok(status) if status.em_aberto() => 0,
        _ => 1,
    }
}
