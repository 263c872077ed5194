// src/models/complaint.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Status fixo atribuído a toda reclamação nova. Não existe fluxo de
// transição de status nesta versão.
pub const STATUS_PENDENTE: &str = "Pendente";

// Formato do created_at: ISO-8601 em UTC com "Z" no final, precisão de
// microssegundos. A ordenação da listagem compara essas strings
// lexicograficamente, então o formato precisa ser de largura fixa.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

// Representa uma reclamação persistida no arquivo JSON.
// Os nomes dos campos são o contrato do arquivo: ficam em português,
// exatamente como gravados, e na ordem de declaração abaixo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    // Epoch em milissegundos no momento da criação (ver ComplaintStore::append
    // para a garantia de unicidade).
    pub id: i64,

    pub nome: String,

    // O e-mail é opcional no formulário; reclamações antigas podem nem ter a
    // chave no arquivo.
    #[serde(default)]
    pub email: String,

    pub empresa: String,
    pub titulo: String,
    pub descricao: String,

    pub status: String,

    // Mantido como String para que a ordenação lexicográfica e a regravação
    // do arquivo sejam estáveis byte a byte.
    pub created_at: String,
}

// Dados do formulário de envio (POST /submit).
// Todos os campos usam `default` para que campo ausente vire string vazia e
// caia na validação, em vez de rejeitar a requisição antes do handler.
#[derive(Debug, Deserialize, Validate)]
pub struct NewComplaintPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,

    // Sem validação: e-mail é opcional e aceito como veio.
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "A empresa é obrigatória."))]
    pub empresa: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub titulo: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub descricao: String,
}

impl NewComplaintPayload {
    // Remove espaços em volta de cada campo. Validar só depois disso, para
    // que um campo composto apenas de espaços conte como vazio.
    pub fn trimmed(self) -> Self {
        Self {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            empresa: self.empresa.trim().to_string(),
            titulo: self.titulo.trim().to_string(),
            descricao: self.descricao.trim().to_string(),
        }
    }
}

// Formata um instante UTC no formato de created_at.
pub fn format_created_at(at: DateTime<Utc>) -> String {
    at.format(CREATED_AT_FORMAT).to_string()
}
