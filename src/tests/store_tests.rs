//! tests/store_tests.rs
//! Testes do `ComplaintStore` e do `ComplaintService` contra arquivos reais
//! em diretórios temporários.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::DateTime;
    use tempfile::TempDir;

    use crate::models::complaint::{Complaint, STATUS_PENDENTE, format_created_at};
    use crate::services::complaint_service::ComplaintService;
    use crate::store::ComplaintStore;

    fn data_file(dir: &TempDir) -> PathBuf {
        dir.path().join("complaints.json")
    }

    // Helper: uma reclamação completa, variando só o que o teste precisa.
    fn sample(id: i64, titulo: &str, created_at: &str) -> Complaint {
        Complaint {
            id,
            nome: "Fulano de Tal".to_string(),
            email: "fulano@example.com".to_string(),
            empresa: "Empresa Exemplo".to_string(),
            titulo: titulo.to_string(),
            descricao: "Descrição de teste.".to_string(),
            status: STATUS_PENDENTE.to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ComplaintStore::new(data_file(&dir));

        let complaints = store.load().await;
        assert!(complaints.is_empty(), "arquivo inexistente deveria virar lista vazia");
    }

    #[tokio::test]
    async fn test_load_invalid_json_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        tokio::fs::write(&path, b"{ isso nao e um array").await.unwrap();

        let store = ComplaintStore::new(&path);
        let complaints = store.load().await;
        assert!(complaints.is_empty(), "JSON inválido deveria virar lista vazia");
    }

    #[tokio::test]
    async fn test_save_then_load_then_save_is_byte_stable() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        let store = ComplaintStore::new(&path);

        let complaints = vec![
            sample(1, "Primeira", "2026-08-20T10:00:00.000000Z"),
            sample(2, "Segunda", "2026-08-21T10:00:00.000000Z"),
        ];
        store.save(&complaints).await.unwrap();
        let before = tokio::fs::read(&path).await.unwrap();

        // Regravar o que foi lido não pode mudar um único byte do arquivo.
        let loaded = store.load().await;
        store.save(&loaded).await.unwrap();
        let after = tokio::fs::read(&path).await.unwrap();
        assert_eq!(before, after);

        // O temporário da escrita atômica não pode sobrar no diretório.
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_keeps_non_ascii_readable() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        let store = ComplaintStore::new(&path);

        let mut complaint = sample(1, "Cobrança indevida", "2026-08-22T10:00:00.000000Z");
        complaint.descricao = "Acentuação: ção, ã, é.".to_string();
        store.save(&[complaint]).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("Cobrança indevida"), "acentos deveriam sair como UTF-8 puro");
        assert!(raw.contains("Acentuação"));
        assert!(!raw.contains("\\u"), "não deveria haver escapes \\uXXXX no arquivo");
    }

    #[tokio::test]
    async fn test_save_fails_when_directory_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nao-existe").join("complaints.json");
        let store = ComplaintStore::new(&path);

        // Sem o diretório pai, a escrita do temporário falha com erro de E/S.
        let result = store
            .save(&[sample(1, "Perdida", "2026-08-22T10:00:00.000000Z")])
            .await;
        let message = result.unwrap_err().to_string();
        assert!(
            message.starts_with("Erro de E/S no arquivo de dados:"),
            "mensagem inesperada: {}",
            message
        );
    }

    #[tokio::test]
    async fn test_append_keeps_id_above_existing_max() {
        let dir = TempDir::new().unwrap();
        let store = ComplaintStore::new(data_file(&dir));

        let first = store
            .append(sample(50, "Primeira", "2026-08-20T10:00:00.000000Z"))
            .await
            .unwrap();
        assert_eq!(first.id, 50, "id acima do máximo deveria ser mantido");

        // Mesmo id proposto de novo: colide e é empurrado para max + 1.
        let second = store
            .append(sample(50, "Segunda", "2026-08-20T10:00:00.000001Z"))
            .await
            .unwrap();
        assert_eq!(second.id, 51);

        let loaded = store.load().await;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 50);
        assert_eq!(loaded[1].id, 51);
    }

    #[tokio::test]
    async fn test_append_with_id_at_i64_max_does_not_panic() {
        let dir = TempDir::new().unwrap();
        let store = ComplaintStore::new(data_file(&dir));

        // Arquivo adulterado à mão com o maior id possível: o ajuste de
        // colisão satura em vez de estourar.
        store
            .save(&[sample(i64::MAX, "Adulterada", "2026-08-20T10:00:00.000000Z")])
            .await
            .unwrap();

        let stored = store
            .append(sample(1, "Nova", "2026-08-22T10:00:00.000000Z"))
            .await
            .unwrap();
        assert_eq!(stored.id, i64::MAX);
        assert_eq!(store.load().await.len(), 2);
    }

    #[tokio::test]
    async fn test_append_over_corrupted_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        tokio::fs::write(&path, b"restos de um arquivo corrompido").await.unwrap();

        let store = ComplaintStore::new(&path);
        let stored = store
            .append(sample(7, "Nova", "2026-08-22T10:00:00.000000Z"))
            .await
            .unwrap();
        assert_eq!(stored.id, 7);

        // O conteúdo ilegível foi descartado; o arquivo agora tem só a nova.
        let loaded = store.load().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].titulo, "Nova");
    }

    #[tokio::test]
    async fn test_load_keeps_missing_email_empty() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);

        // Registro antigo, gravado sem a chave "email".
        let raw = r#"[
  {
    "id": 1,
    "nome": "Fulano",
    "empresa": "Empresa",
    "titulo": "Sem e-mail",
    "descricao": "Registro antigo.",
    "status": "Pendente",
    "created_at": "2026-08-20T10:00:00.000000Z"
  }
]"#;
        tokio::fs::write(&path, raw).await.unwrap();

        let store = ComplaintStore::new(&path);
        let loaded = store.load().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].email, "");
    }

    #[tokio::test]
    async fn test_format_created_at_is_fixed_width_utc() {
        let at = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(format_created_at(at), "1970-01-01T00:00:00.000000Z");

        let at = DateTime::from_timestamp(1_756_000_000, 123_456_000).unwrap();
        let formatted = format_created_at(at);
        assert_eq!(formatted.len(), 27);
        assert!(formatted.ends_with("123456Z"));
    }

    #[tokio::test]
    async fn test_submit_fills_status_and_created_at() {
        let dir = TempDir::new().unwrap();
        let store = ComplaintStore::new(data_file(&dir));
        let service = ComplaintService::new(store.clone());

        let payload = crate::models::complaint::NewComplaintPayload {
            nome: "Ana".to_string(),
            email: String::new(),
            empresa: "Acme".to_string(),
            titulo: "Atraso".to_string(),
            descricao: "Pedido atrasado".to_string(),
        };
        let stored = service.submit(payload).await.unwrap();

        assert!(stored.id > 0);
        assert_eq!(stored.status, STATUS_PENDENTE);
        assert_eq!(stored.email, "", "e-mail vazio deveria ser aceito");
        assert_eq!(stored.created_at.len(), 27);
        assert!(stored.created_at.ends_with('Z'));

        let loaded = store.load().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].nome, "Ana");
    }

    #[tokio::test]
    async fn test_submit_twice_yields_increasing_ids() {
        let dir = TempDir::new().unwrap();
        let service = ComplaintService::new(ComplaintStore::new(data_file(&dir)));

        let payload = |titulo: &str| crate::models::complaint::NewComplaintPayload {
            nome: "Ana".to_string(),
            email: String::new(),
            empresa: "Acme".to_string(),
            titulo: titulo.to_string(),
            descricao: "Pedido atrasado".to_string(),
        };

        // Dois envios no mesmo milissegundo colidiriam no id; o ajuste no
        // append garante que o segundo sai estritamente maior.
        let first = service.submit(payload("Primeira")).await.unwrap();
        let second = service.submit(payload("Segunda")).await.unwrap();
        assert!(second.id > first.id, "ids deveriam ser estritamente crescentes");
    }

    #[tokio::test]
    async fn test_list_newest_first_orders_by_created_at() {
        let dir = TempDir::new().unwrap();
        let store = ComplaintStore::new(data_file(&dir));
        let service = ComplaintService::new(store.clone());

        // Gravadas fora de ordem de propósito.
        store
            .save(&[
                sample(2, "Do meio", "2026-08-21T10:00:00.000000Z"),
                sample(3, "Mais nova", "2026-08-22T10:00:00.000000Z"),
                sample(1, "Mais antiga", "2026-08-20T10:00:00.000000Z"),
            ])
            .await
            .unwrap();

        let listed = service.list_newest_first().await;
        let titles: Vec<&str> = listed.iter().map(|c| c.titulo.as_str()).collect();
        assert_eq!(titles, vec!["Mais nova", "Do meio", "Mais antiga"]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let dir = TempDir::new().unwrap();
        let store = ComplaintStore::new(data_file(&dir));
        let service = ComplaintService::new(store.clone());

        store
            .save(&[sample(10, "Alvo", "2026-08-20T10:00:00.000000Z")])
            .await
            .unwrap();

        let found = service.find_by_id(10).await;
        assert_eq!(found.map(|c| c.titulo), Some("Alvo".to_string()));
        assert!(service.find_by_id(999).await.is_none());
    }
}
