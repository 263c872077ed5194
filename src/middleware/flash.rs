// src/middleware/flash.rs

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};

// Nome do cookie assinado que carrega o aviso através do redirect.
const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    Success,
    Error,
}

impl NoticeCategory {
    // Usado como classe CSS na renderização.
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeCategory::Success => "success",
            NoticeCategory::Error => "error",
        }
    }
}

// Um aviso de uma vez só para o usuário: gravado por um handler antes do
// redirect, consumido (lido e apagado) pela próxima página renderizada.
// Vive num cookie assinado, então sobrevive a múltiplas instâncias do
// servidor e não pode ser forjado pelo cliente.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub category: NoticeCategory,
    pub message: String,
}

pub fn success(jar: SignedCookieJar, message: impl Into<String>) -> SignedCookieJar {
    set(
        jar,
        Notice {
            category: NoticeCategory::Success,
            message: message.into(),
        },
    )
}

pub fn error(jar: SignedCookieJar, message: impl Into<String>) -> SignedCookieJar {
    set(
        jar,
        Notice {
            category: NoticeCategory::Error,
            message: message.into(),
        },
    )
}

fn set(jar: SignedCookieJar, notice: Notice) -> SignedCookieJar {
    let json =
        serde_json::to_string(&notice).expect("Notice é sempre serializável como JSON");

    // Percent-encoding deixa o valor em ASCII puro: as aspas, espaços e
    // acentos do JSON não podem ir crus num header de cookie.
    let value = urlencoding::encode(&json).into_owned();

    let cookie = Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    jar.add(cookie)
}

// Consome o aviso pendente, se houver. Devolve o jar já com a remoção do
// cookie agendada; o handler precisa incluir esse jar na resposta, senão o
// aviso reaparece na página seguinte.
//
// O jar assinado não distingue cookie ausente de cookie com assinatura
// inválida (os dois viram None), por isso o jar cru entra junto: se o
// navegador mandou o cookie, ele sai da resposta mesmo quando a assinatura
// não bate (uma troca de SECRET_KEY, por exemplo). Sem isso o cliente
// reenviaria o cookie morto para sempre.
pub fn take(jar: SignedCookieJar, raw: &CookieJar) -> (SignedCookieJar, Option<Notice>) {
    if raw.get(FLASH_COOKIE).is_none() {
        return (jar, None);
    }

    // Valor com assinatura válida mas conteúdo inesperado é descartado.
    let notice = jar.get(FLASH_COOKIE).and_then(|cookie| {
        urlencoding::decode(cookie.value())
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
    });

    let removal = Cookie::build(FLASH_COOKIE).path("/");
    (jar.remove(removal), notice)
}
