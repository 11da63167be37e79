// src/services/inscricao_service.rs
use crate::{
    error::{AppError, AppResult},
    models::inscricao::{DadosInscricao, Inscricao, NovaInscricao, StatusAprovacao},
    services::mapear_violacao_unicidade,
};
use sqlx::SqlitePool;

fn validar(dados: &DadosInscricao) -> AppResult<()> {
    if dados.nome_completo.trim().is_empty() {
        return Err(AppError::Validacao("Nome completo é obrigatório.".into()));
    }
    if dados.cpf.trim().is_empty() {
        return Err(AppError::Validacao("CPF é obrigatório.".into()));
    }
    Ok(())
}

/// Insere uma inscrição nova, com status ainda não avaliado. CPF duplicado e
/// dono que já possui inscrição são conflitos distintos de erro genérico,
/// para o front-end exibir mensagem por campo.
pub async fn criar(db_pool: &SqlitePool, nova: &NovaInscricao) -> AppResult<i64> {
    validar(&nova.dados)?;

    let resultado = sqlx::query(
        r#"
        INSERT INTO inscricoes
            (usuario_id, nome_completo, cpf, idade, sexo, endereco,
             renda_familiar, numero_membros_familia, despesas_mensais,
             nivel_escolaridade)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        "#,
    )
    .bind(nova.usuario_id)
    .bind(nova.dados.nome_completo.trim())
    .bind(nova.dados.cpf.trim())
    .bind(nova.dados.idade)
    .bind(&nova.dados.sexo)
    .bind(&nova.dados.endereco)
    .bind(nova.dados.renda_familiar)
    .bind(nova.dados.numero_membros_familia)
    .bind(nova.dados.despesas_mensais)
    .bind(&nova.dados.nivel_escolaridade)
    .execute(db_pool)
    .await
    .map_err(mapear_violacao_unicidade)?;

    let id = resultado.last_insert_rowid();
    tracing::info!("✅ Inscrição {} criada para usuário {}.", id, nova.usuario_id);
    Ok(id)
}

/// Busca a inscrição de um dono. A tabela garante no máximo uma por conta;
/// o ORDER BY fica como proteção caso a restrição seja relaxada um dia.
pub async fn buscar_por_usuario(
    db_pool: &SqlitePool,
    usuario_id: i64,
) -> AppResult<Option<Inscricao>> {
    let inscricao = sqlx::query_as::<_, Inscricao>(
        r#"
        SELECT id, usuario_id, nome_completo, cpf, idade, sexo, endereco,
               renda_familiar, numero_membros_familia, despesas_mensais,
               nivel_escolaridade, status_aprovacao, data_inscricao
        FROM inscricoes
        WHERE usuario_id = ?1
        ORDER BY data_inscricao DESC, id DESC
        LIMIT 1
        "#,
    )
    .bind(usuario_id)
    .fetch_optional(db_pool)
    .await?;

    Ok(inscricao)
}

/// Reenvio pelo próprio inscrito: sobrescreve os campos mutáveis e força o
/// status para EM ANÁLISE, independentemente do valor anterior. O dono e a
/// data de inscrição nunca mudam.
pub async fn reenviar(db_pool: &SqlitePool, id: i64, dados: &DadosInscricao) -> AppResult<()> {
    atualizar_campos(db_pool, id, dados, Some(StatusAprovacao::EmAnalise)).await?;
    tracing::info!("✅ Inscrição {} reenviada; status forçado para EM ANÁLISE.", id);
    Ok(())
}

/// Edição por administrador: mesma sobrescrita, mas o status fica intocado
/// (correção de dados sem reiniciar a revisão).
pub async fn editar_admin(db_pool: &SqlitePool, id: i64, dados: &DadosInscricao) -> AppResult<()> {
    atualizar_campos(db_pool, id, dados, None).await?;
    tracing::info!("✅ Inscrição {} editada pelo administrador.", id);
    Ok(())
}

async fn atualizar_campos(
    db_pool: &SqlitePool,
    id: i64,
    dados: &DadosInscricao,
    novo_status: Option<StatusAprovacao>,
) -> AppResult<()> {
    validar(dados)?;

    let sql = match novo_status {
        Some(_) => {
            r#"
            UPDATE inscricoes SET
                nome_completo = ?1, cpf = ?2, idade = ?3, sexo = ?4,
                endereco = ?5, renda_familiar = ?6, numero_membros_familia = ?7,
                despesas_mensais = ?8, nivel_escolaridade = ?9,
                status_aprovacao = ?10
            WHERE id = ?11
            "#
        }
        None => {
            r#"
            UPDATE inscricoes SET
                nome_completo = ?1, cpf = ?2, idade = ?3, sexo = ?4,
                endereco = ?5, renda_familiar = ?6, numero_membros_familia = ?7,
                despesas_mensais = ?8, nivel_escolaridade = ?9
            WHERE id = ?10
            "#
        }
    };

    let mut query = sqlx::query(sql)
        .bind(dados.nome_completo.trim())
        .bind(dados.cpf.trim())
        .bind(dados.idade)
        .bind(&dados.sexo)
        .bind(&dados.endereco)
        .bind(dados.renda_familiar)
        .bind(dados.numero_membros_familia)
        .bind(dados.despesas_mensais)
        .bind(&dados.nivel_escolaridade);
    if let Some(status) = novo_status {
        query = query.bind(status.rotulo());
    }

    let linhas = query
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(mapear_violacao_unicidade)?
        .rows_affected();

    if linhas == 0 {
        tracing::warn!("Atualização falhou: inscrição {} não encontrada.", id);
        return Err(AppError::NaoEncontrado);
    }
    Ok(())
}

/// Atualiza apenas o status. O rótulo recebido precisa mapear para um
/// StatusAprovacao conhecido; valores livres são rejeitados aqui na fronteira.
pub async fn atualizar_status(db_pool: &SqlitePool, id: i64, rotulo: &str) -> AppResult<()> {
    let status = StatusAprovacao::do_rotulo(Some(rotulo)).map_err(AppError::Validacao)?;

    let linhas = sqlx::query(
        r#"
        UPDATE inscricoes SET status_aprovacao = ?1 WHERE id = ?2
        "#,
    )
    .bind(status.rotulo())
    .bind(id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if linhas == 0 {
        tracing::warn!("Falha ao alterar status: inscrição {} não encontrada.", id);
        return Err(AppError::NaoEncontrado);
    }

    tracing::info!("✅ Status da inscrição {} alterado para {:?}.", id, status);
    Ok(())
}
