// src/views.rs

use crate::middleware::flash::Notice;
use crate::models::complaint::Complaint;

// Renderização das três páginas. Tudo que veio do usuário passa por esc()
// antes de entrar no HTML.

pub fn form_page(notice: Option<&Notice>) -> String {
    let body = r#"<h1>Enviar reclamação</h1>
<form action="/submit" method="post">
  <label for="nome">Nome *</label>
  <input type="text" id="nome" name="nome" required>

  <label for="email">E-mail</label>
  <input type="email" id="email" name="email">

  <label for="empresa">Empresa *</label>
  <input type="text" id="empresa" name="empresa" required>

  <label for="titulo">Título *</label>
  <input type="text" id="titulo" name="titulo" required>

  <label for="descricao">Descrição *</label>
  <textarea id="descricao" name="descricao" rows="6" required></textarea>

  <button type="submit">Enviar reclamação</button>
</form>"#;

    layout("Enviar reclamação", notice, body)
}

pub fn list_page(complaints: &[Complaint], notice: Option<&Notice>) -> String {
    let mut body = String::from("<h1>Reclamações</h1>\n");

    if complaints.is_empty() {
        body.push_str("<p class=\"empty\">Nenhuma reclamação cadastrada ainda.</p>\n");
    } else {
        body.push_str("<ul class=\"complaints\">\n");
        for complaint in complaints {
            body.push_str(&format!(
                r#"  <li>
    <a href="/reclamacao/{id}">{titulo}</a>
    <span class="status">{status}</span>
    <p class="meta">{empresa} · por {nome} em {data}</p>
  </li>
"#,
                id = complaint.id,
                titulo = esc(&complaint.titulo),
                status = esc(&complaint.status),
                empresa = esc(&complaint.empresa),
                nome = esc(&complaint.nome),
                data = esc(&short_date(&complaint.created_at)),
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Reclamações", notice, &body)
}

pub fn detail_page(complaint: &Complaint) -> String {
    let email = if complaint.email.is_empty() {
        "não informado".to_string()
    } else {
        esc(&complaint.email)
    };

    let body = format!(
        r#"<h1>{titulo}</h1>
<p><span class="status">{status}</span></p>
<dl>
  <dt>Empresa</dt>
  <dd>{empresa}</dd>
  <dt>Nome</dt>
  <dd>{nome}</dd>
  <dt>E-mail</dt>
  <dd>{email}</dd>
  <dt>Enviada em</dt>
  <dd>{data}</dd>
</dl>
<h2>Descrição</h2>
<p class="descricao">{descricao}</p>
<p><a href="/reclamacoes">&larr; Voltar para a lista</a></p>"#,
        titulo = esc(&complaint.titulo),
        status = esc(&complaint.status),
        empresa = esc(&complaint.empresa),
        nome = esc(&complaint.nome),
        email = email,
        data = esc(&short_date(&complaint.created_at)),
        descricao = esc(&complaint.descricao),
    );

    layout(&complaint.titulo, None, &body)
}

fn layout(title: &str, notice: Option<&Notice>, body: &str) -> String {
    let notice_html = match notice {
        Some(n) => format!(
            "<div class=\"notice {}\">{}</div>\n",
            n.category.as_str(),
            esc(&n.message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 46rem; margin: 0 auto; padding: 1rem; color: #222; }}
nav {{ margin-bottom: 1.5rem; }}
nav a {{ margin-right: 1rem; }}
label {{ display: block; margin-top: .8rem; font-weight: bold; }}
input, textarea {{ width: 100%; padding: .4rem; box-sizing: border-box; }}
button {{ margin-top: 1rem; padding: .5rem 1.2rem; }}
.notice {{ padding: .6rem .8rem; border-radius: 4px; margin-bottom: 1rem; }}
.notice.success {{ background: #e6f4ea; color: #1e5631; }}
.notice.error {{ background: #fdecea; color: #8a1f11; }}
.complaints li {{ margin-bottom: .8rem; }}
.status {{ background: #fff3cd; padding: .1rem .4rem; border-radius: 4px; font-size: .85rem; }}
.meta {{ color: #666; margin: .2rem 0 0; font-size: .9rem; }}
.descricao {{ white-space: pre-wrap; }}
</style>
</head>
<body>
<nav><a href="/">Nova reclamação</a><a href="/reclamacoes">Reclamações</a></nav>
{notice_html}<main>
{body}
</main>
</body>
</html>
"#,
        title = esc(title),
        notice_html = notice_html,
        body = body,
    )
}

// "2026-08-22T17:40:03.123456Z" -> "2026-08-22 17:40:03"
fn short_date(created_at: &str) -> String {
    created_at
        .chars()
        .take(19)
        .map(|c| if c == 'T' { ' ' } else { c })
        .collect()
}

fn esc(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
