// src/config.rs

use std::env;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::{services::complaint_service::ComplaintService, store::ComplaintStore};

// Segredo usado em desenvolvimento local quando SECRET_KEY não está
// definida. Inseguro para produção: quem conhece o valor consegue forjar os
// cookies de aviso.
const DEV_SECRET_KEY: &str = "chave-secreta-dev-apenas-para-uso-local";

const DEFAULT_DATA_FILE: &str = "complaints.json";

// A chave de assinatura é derivada do segredo; a derivação exige no mínimo
// 32 bytes.
const MIN_SECRET_LEN: usize = 32;

// O estado compartilhado, montado uma única vez no startup e passado ao
// Router. Nada de configuração em globals mutáveis.
#[derive(Clone)]
pub struct AppState {
    pub complaint_service: ComplaintService,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let secret_key = match env::var("SECRET_KEY") {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!(
                    "⚠️ SECRET_KEY não definida; usando a chave de desenvolvimento (não use em produção!)"
                );
                DEV_SECRET_KEY.to_string()
            }
        };
        if secret_key.len() < MIN_SECRET_LEN {
            anyhow::bail!(
                "SECRET_KEY precisa ter pelo menos {} bytes",
                MIN_SECRET_LEN
            );
        }

        let data_file = env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
        tracing::info!("✅ Reclamações serão persistidas em {}", data_file);

        let store = ComplaintStore::new(data_file);
        let complaint_service = ComplaintService::new(store);

        Ok(Self {
            complaint_service,
            cookie_key: Key::derive_from(secret_key.as_bytes()),
        })
    }
}

// Permite que o SignedCookieJar obtenha a chave de assinatura direto do
// estado da aplicação.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}
