// src/store/complaint_store.rs

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{common::error::AppError, models::complaint::Complaint};

// O repositório de reclamações. Em vez de um banco, a base é um único
// arquivo JSON contendo um array de reclamações; cada gravação reescreve o
// arquivo inteiro.
#[derive(Clone)]
pub struct ComplaintStore {
    path: PathBuf,
    // Serializa o load+push+save do append dentro do processo: sem isso,
    // dois envios simultâneos intercalariam as etapas e um se perderia.
    write_lock: Arc<Mutex<()>>,
}

impl ComplaintStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    // Carrega todas as reclamações do arquivo.
    // Arquivo inexistente é o estado inicial normal: lista vazia, em
    // silêncio. Arquivo ilegível ou com JSON inválido também vira lista
    // vazia, mas deixa um warning no log.
    pub async fn load(&self) -> Vec<Complaint> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Falha ao ler {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(complaints) => complaints,
            Err(e) => {
                tracing::warn!(
                    "Conteúdo inválido em {}, tratando como lista vazia: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    // Grava a lista completa, substituindo o arquivo.
    // Escrita atômica: serializa tudo num temporário ao lado e faz rename
    // por cima do definitivo, para um crash no meio da escrita não deixar o
    // arquivo truncado. Não-ASCII sai como UTF-8 puro, sem escapes.
    pub async fn save(&self, complaints: &[Complaint]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(complaints)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json.as_bytes()).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    // load + push + save, segurando o lock do início ao fim.
    // Ids vêm do timestamp em milissegundos, então dois envios no mesmo
    // milissegundo colidiriam; um id que não supera o máximo atual é
    // empurrado para max + 1. Dentro de um arquivo os ids ficam únicos e
    // crescentes. Soma saturante: um arquivo adulterado com id em i64::MAX
    // não pode derrubar a requisição.
    pub async fn append(&self, mut complaint: Complaint) -> Result<Complaint, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut complaints = self.load().await;
        if let Some(max_id) = complaints.iter().map(|c| c.id).max() {
            if complaint.id <= max_id {
                complaint.id = max_id.saturating_add(1);
            }
        }
        complaints.push(complaint.clone());
        self.save(&complaints).await?;

        Ok(complaint)
    }
}
