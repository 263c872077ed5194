// src/services/complaint_service.rs

use chrono::Utc;

use crate::{
    common::error::AppError,
    models::complaint::{Complaint, NewComplaintPayload, STATUS_PENDENTE, format_created_at},
    store::ComplaintStore,
};

#[derive(Clone)]
pub struct ComplaintService {
    store: ComplaintStore,
}

impl ComplaintService {
    pub fn new(store: ComplaintStore) -> Self {
        Self { store }
    }

    // Monta a reclamação a partir do formulário já validado e a anexa ao
    // arquivo. O id proposto é o epoch em milissegundos; o store pode
    // ajustá-lo se colidir com um existente.
    pub async fn submit(&self, payload: NewComplaintPayload) -> Result<Complaint, AppError> {
        let now = Utc::now();

        let complaint = Complaint {
            id: now.timestamp_millis(),
            nome: payload.nome,
            email: payload.email,
            empresa: payload.empresa,
            titulo: payload.titulo,
            descricao: payload.descricao,
            status: STATUS_PENDENTE.to_string(),
            created_at: format_created_at(now),
        };

        let stored = self.store.append(complaint).await?;
        tracing::info!("📝 Nova reclamação registrada (id {})", stored.id);

        Ok(stored)
    }

    // Todas as reclamações, mais recentes primeiro. created_at é ISO-8601
    // UTC de largura fixa, então comparar as strings ordena por data.
    pub async fn list_newest_first(&self) -> Vec<Complaint> {
        let mut complaints = self.store.load().await;
        complaints.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        complaints
    }

    // Busca linear pela primeira reclamação com o id dado.
    pub async fn find_by_id(&self, id: i64) -> Option<Complaint> {
        self.store.load().await.into_iter().find(|c| c.id == id)
    }
}
