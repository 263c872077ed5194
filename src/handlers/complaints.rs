// src/handlers/complaints.rs

use axum::{
    extract::{Form, Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::{CookieJar, SignedCookieJar};
use validator::Validate;

use crate::{
    config::AppState, middleware::flash, models::complaint::NewComplaintPayload, views,
};

// GET /
// Página inicial: o formulário de envio. Consome o aviso pendente do
// cookie para exibi-lo uma única vez.
pub async fn show_form(jar: SignedCookieJar, raw_jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = flash::take(jar, &raw_jar);
    (jar, Html(views::form_page(notice.as_ref())))
}

// POST /submit
// Processa o envio do formulário. Qualquer que seja o desfecho, a resposta
// é um redirect para o formulário com um aviso explicando o que houve.
pub async fn submit_complaint(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    Form(payload): Form<NewComplaintPayload>,
) -> impl IntoResponse {
    let payload = payload.trimmed();

    if let Err(errors) = payload.validate() {
        tracing::debug!("Formulário rejeitado: {}", errors);
        let jar = flash::error(jar, "Por favor, preencha todos os campos obrigatórios.");
        return (jar, redirect_found("/"));
    }

    let jar = match app_state.complaint_service.submit(payload).await {
        Ok(_) => flash::success(jar, "Reclamação enviada com sucesso!"),
        Err(e) => {
            tracing::error!("Falha ao gravar a reclamação: {}", e);
            flash::error(jar, format!("Erro ao salvar a reclamação: {}", e))
        }
    };

    (jar, redirect_found("/"))
}

// GET /reclamacoes
// Lista todas as reclamações, mais recentes primeiro.
pub async fn list_complaints(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    raw_jar: CookieJar,
) -> impl IntoResponse {
    let complaints = app_state.complaint_service.list_newest_first().await;
    let (jar, notice) = flash::take(jar, &raw_jar);
    (jar, Html(views::list_page(&complaints, notice.as_ref())))
}

// GET /reclamacao/{id}
// Detalhe de uma reclamação. O id na URL só casa com dígitos: segmento não
// numérico (ou negativo) é 404, não uma rota válida com parâmetro ruim. Id
// numérico desconhecido volta para a listagem com um aviso, sem tocar no
// arquivo.
pub async fn complaint_detail(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    Path(raw_id): Path<String>,
) -> Response {
    if !raw_id.bytes().all(|b| b.is_ascii_digit()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    // Dígitos demais para caber num i64 nunca correspondem a um id real.
    let complaint = match raw_id.parse::<i64>() {
        Ok(id) => app_state.complaint_service.find_by_id(id).await,
        Err(_) => None,
    };

    match complaint {
        Some(complaint) => Html(views::detail_page(&complaint)).into_response(),
        None => {
            let jar = flash::error(jar, "Reclamação não encontrada.");
            (jar, redirect_found("/reclamacoes")).into_response()
        }
    }
}

// O Redirect do axum responde 303/307; o contrato aqui é o 302 clássico do
// fluxo formulário -> redirect -> aviso.
fn redirect_found(to: &'static str) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, HeaderValue::from_static(to))],
    )
}
