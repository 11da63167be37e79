// src/models/inscricao.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Status de aprovação de uma inscrição, fechado num enum em vez de string
/// livre. Os rótulos legados ("PENDENTE", "EM ANÁLISE", ...) continuam a ser
/// o formato de armazenamento e de transporte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAprovacao {
    /// Inscrição recém-criada, ainda sem avaliação (NULL/"" no banco).
    NaoAvaliada,
    Pendente,
    EmAnalise,
    Aprovada,
    Rejeitada,
}

impl StatusAprovacao {
    /// Rótulo legado correspondente; `NaoAvaliada` é armazenada como NULL.
    pub fn rotulo(self) -> Option<&'static str> {
        match self {
            StatusAprovacao::NaoAvaliada => None,
            StatusAprovacao::Pendente => Some("PENDENTE"),
            StatusAprovacao::EmAnalise => Some("EM ANÁLISE"),
            StatusAprovacao::Aprovada => Some("APROVADO"),
            StatusAprovacao::Rejeitada => Some("REJEITADO"),
        }
    }

    /// Converte um rótulo legado (case-insensitive, espaços ignorados).
    /// Rótulos desconhecidos são rejeitados na fronteira do workflow.
    pub fn do_rotulo(rotulo: Option<&str>) -> Result<Self, String> {
        let normalizado = rotulo.map(str::trim).unwrap_or("").to_uppercase();
        match normalizado.as_str() {
            "" => Ok(StatusAprovacao::NaoAvaliada),
            "PENDENTE" => Ok(StatusAprovacao::Pendente),
            "EM ANÁLISE" | "EM ANALISE" => Ok(StatusAprovacao::EmAnalise),
            "APROVADO" | "APROVADA" => Ok(StatusAprovacao::Aprovada),
            "REJEITADO" | "REJEITADA" => Ok(StatusAprovacao::Rejeitada),
            outro => Err(format!("Status desconhecido: '{}'", outro)),
        }
    }

    /// Inscrições não resolvidas aparecem primeiro na listagem de revisão.
    pub fn em_aberto(self) -> bool {
        matches!(
            self,
            StatusAprovacao::NaoAvaliada | StatusAprovacao::Pendente | StatusAprovacao::EmAnalise
        )
    }
}

// Registro completo da tabela 'inscricoes'. Os nomes dos campos JSON seguem
// o contrato legado do front-end.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Inscricao {
    pub id: i64,
    pub usuario_id: i64,
    pub nome_completo: String,
    pub cpf: String,
    pub idade: Option<i64>,
    pub sexo: Option<String>,
    pub endereco: Option<String>,
    pub renda_familiar: Option<f64>,
    pub numero_membros_familia: Option<i64>,
    pub despesas_mensais: Option<f64>,
    pub nivel_escolaridade: Option<String>,
    pub status_aprovacao: Option<String>,
    pub data_inscricao: NaiveDateTime,
}

// Linha da listagem de revisão: inscrição enriquecida com o email do dono.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InscricaoComEmail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub inscricao: Inscricao,
    pub email: String,
}

/// Campos mutáveis de uma inscrição, como chegam do formulário. O front-end
/// legado envia campos opcionais como string vazia; aqui tudo isso vira
/// `None` antes de tocar no banco, para manter as colunas numéricas limpas.
#[derive(Debug, Clone, Deserialize)]
pub struct DadosInscricao {
    pub nome_completo: String,
    pub cpf: String,
    #[serde(default, deserialize_with = "inteiro_opcional")]
    pub idade: Option<i64>,
    #[serde(default, deserialize_with = "texto_opcional")]
    pub sexo: Option<String>,
    #[serde(default, deserialize_with = "texto_opcional")]
    pub endereco: Option<String>,
    #[serde(default, deserialize_with = "numero_opcional")]
    pub renda_familiar: Option<f64>,
    #[serde(default, deserialize_with = "inteiro_opcional")]
    pub numero_membros_familia: Option<i64>,
    #[serde(default, deserialize_with = "numero_opcional")]
    pub despesas_mensais: Option<f64>,
    #[serde(default, deserialize_with = "texto_opcional")]
    pub nivel_escolaridade: Option<String>,
}

// Corpo de POST /inscricao: dono + campos do formulário.
#[derive(Debug, Clone, Deserialize)]
pub struct NovaInscricao {
    pub usuario_id: i64,
    #[serde(flatten)]
    pub dados: DadosInscricao,
}

fn texto_opcional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let valor = Option::<String>::deserialize(deserializer)?;
    Ok(valor.and_then(|s| {
        let s = s.trim();
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    }))
}

fn inteiro_opcional<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("esperado um número inteiro")),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse::<i64>().map(Some).map_err(serde::de::Error::custom)
            }
        }
        Some(outro) => Err(serde::de::Error::custom(format!(
            "esperado número ou texto, recebido {}",
            outro
        ))),
    }
}

fn numero_opcional<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => {
            // Aceita "1.234,56" do formulário legado além de "1234.56"
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                let normalizado = if s.contains(',') {
                    s.replace('.', "").replace(',', ".")
                } else {
                    s.to_string()
                };
                normalizado
                    .parse::<f64>()
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
        Some(outro) => Err(serde::de::Error::custom(format!(
            "esperado número ou texto, recebido {}",
            outro
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn campos_vazios_viram_none() {
        let dados: DadosInscricao = serde_json::from_value(json!({
            "nome_completo": "Maria da Silva",
            "cpf": "11122233344",
            "idade": "",
            "sexo": "",
            "endereco": "   ",
            "renda_familiar": "",
            "numero_membros_familia": "",
            "despesas_mensais": "",
            "nivel_escolaridade": ""
        }))
        .unwrap();

        assert_eq!(dados.idade, None);
        assert_eq!(dados.sexo, None);
        assert_eq!(dados.endereco, None);
        assert_eq!(dados.renda_familiar, None);
        assert_eq!(dados.numero_membros_familia, None);
        assert_eq!(dados.despesas_mensais, None);
        assert_eq!(dados.nivel_escolaridade, None);
    }

    #[test]
    fn aceita_numeros_como_string_ou_json() {
        let dados: DadosInscricao = serde_json::from_value(json!({
            "nome_completo": "João",
            "cpf": "55566677788",
            "idade": "42",
            "renda_familiar": 1500.50,
            "numero_membros_familia": 4,
            "despesas_mensais": "1.234,56"
        }))
        .unwrap();

        assert_eq!(dados.idade, Some(42));
        assert_eq!(dados.renda_familiar, Some(1500.50));
        assert_eq!(dados.numero_membros_familia, Some(4));
        assert_eq!(dados.despesas_mensais, Some(1234.56));
    }

    #[test]
    fn campos_ausentes_viram_none() {
        let dados: DadosInscricao = serde_json::from_value(json!({
            "nome_completo": "Ana",
            "cpf": "99988877766"
        }))
        .unwrap();
        assert_eq!(dados.idade, None);
        assert_eq!(dados.renda_familiar, None);
    }

    #[test]
    fn status_mapeia_rotulos_legados() {
        assert_eq!(StatusAprovacao::do_rotulo(None), Ok(StatusAprovacao::NaoAvaliada));
        assert_eq!(StatusAprovacao::do_rotulo(Some("")), Ok(StatusAprovacao::NaoAvaliada));
        assert_eq!(
            StatusAprovacao::do_rotulo(Some("pendente")),
            Ok(StatusAprovacao::Pendente)
        );
        assert_eq!(
            StatusAprovacao::do_rotulo(Some("em análise")),
            Ok(StatusAprovacao::EmAnalise)
        );
        assert_eq!(
            StatusAprovacao::do_rotulo(Some(" APROVADO ")),
            Ok(StatusAprovacao::Aprovada)
        );
        assert!(StatusAprovacao::do_rotulo(Some("TALVEZ")).is_err());
    }

    #[test]
    fn bucket_de_prioridade() {
        assert!(StatusAprovacao::NaoAvaliada.em_aberto());
        assert!(StatusAprovacao::Pendente.em_aberto());
        assert!(StatusAprovacao::EmAnalise.em_aberto());
        assert!(!StatusAprovacao::Aprovada.em_aberto());
        assert!(!StatusAprovacao::Rejeitada.em_aberto());
    }

    #[test]
    fn rotulo_e_do_rotulo_sao_inversos() {
        for status in [
            StatusAprovacao::NaoAvaliada,
            StatusAprovacao::Pendente,
            StatusAprovacao::EmAnalise,
            StatusAprovacao::Aprovada,
            StatusAprovacao::Rejeitada,
        ] {
            assert_eq!(StatusAprovacao::do_rotulo(status.rotulo()), Ok(status));
        }
    }
}
