//src/main.rs

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

// Declaração dos nossos módulos
mod common;
mod config;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;
mod views;


use crate::config::AppState;

// O router com as quatro rotas da aplicação. Separado do main para os
// testes montarem a aplicação sem abrir porta.
fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::complaints::show_form))
        .route("/submit", post(handlers::complaints::submit_complaint))
        .route("/reclamacoes", get(handlers::complaints::list_complaints))
        .route(
            "/reclamacao/{id}",
            get(handlers::complaints::complaint_detail),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let app = app(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
