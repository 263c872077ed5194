// src/common/error.rs

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Falhas de gravação são capturadas pelo handler de envio, que as converte
// em um aviso para o usuário; nenhuma delas derruba o processo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de E/S no arquivo de dados: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao serializar as reclamações: {0}")]
    Serialization(#[from] serde_json::Error),
}
