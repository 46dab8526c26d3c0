use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use slovo_core::LookupTicket;
use slovo_dictionary::{DictionaryService, FetchError, LanguageCode, ProviderMetadata};
use slovo_lang_russian::OpenRussianClient;
use slovo_types::AppEvent;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::{FakeDictionary, test_config};
use crate::events::event_loop;
use crate::events::lookup::{fetch_document, run_lookup};
use crate::state::AppState;

#[tokio::test]
async fn test_fetch_document_renders_response() {
    let service = FakeDictionary::new(Duration::ZERO);

    let document = fetch_document(&service, "стол", "en").await;

    assert_eq!(
        document.to_markdown(),
        "# сто\u{0301}л\n\nnoun\n## Meanings\n\n- **table**\n\n"
    );
}

#[tokio::test]
async fn test_fetch_failure_renders_kind() {
    let service = FakeDictionary::new(Duration::ZERO);

    let document = fetch_document(&service, "нет", "en").await;

    assert_eq!(
        document.to_markdown(),
        "# Error\nFailed to fetch data: `Timeout`"
    );
}

#[tokio::test]
async fn test_new_input_cancels_previous_lookup() {
    let service = Arc::new(FakeDictionary::new(Duration::ZERO));
    let state = Arc::new(AppState::new(test_config(50)));
    let (ui_to_app_tx, ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_to_ui_tx, app_to_ui_rx) = kanal::unbounded_async::<AppEvent>();

    let handle = tokio::spawn(event_loop(
        state,
        ui_to_app_rx,
        app_to_ui_tx,
        service.clone(),
        CancellationToken::new(),
    ));

    ui_to_app_tx.send(AppEvent::TextInput("с".to_string())).await.unwrap();
    ui_to_app_tx.send(AppEvent::TextInput("стол".to_string())).await.unwrap();

    match timeout(Duration::from_secs(2), app_to_ui_rx.recv()).await {
        Ok(Ok(AppEvent::ShowDocument { ticket, document })) => {
            assert_eq!(ticket.query(), "стол");
            assert_eq!(ticket.generation(), 2);
            assert!(document.to_markdown().contains("- **table**"));
        }
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - document never arrived!"),
    }

    let extra = timeout(Duration::from_millis(200), app_to_ui_rx.recv()).await;
    assert!(extra.is_err(), "superseded lookup still delivered");
    assert_eq!(service.calls(), vec!["стол".to_string()]);

    ui_to_app_tx.send(AppEvent::Quit).await.unwrap();
    let result = timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_clear_input_cancels_lookup() {
    let service = Arc::new(FakeDictionary::new(Duration::ZERO));
    let state = Arc::new(AppState::new(test_config(50)));
    let (ui_to_app_tx, ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_to_ui_tx, app_to_ui_rx) = kanal::unbounded_async::<AppEvent>();

    let handle = tokio::spawn(event_loop(
        state,
        ui_to_app_rx,
        app_to_ui_tx,
        service.clone(),
        CancellationToken::new(),
    ));

    ui_to_app_tx.send(AppEvent::TextInput("стол".to_string())).await.unwrap();
    ui_to_app_tx.send(AppEvent::ClearInput).await.unwrap();

    let result = timeout(Duration::from_millis(300), app_to_ui_rx.recv()).await;
    assert!(result.is_err(), "cleared lookup still delivered");
    assert!(service.calls().is_empty());

    ui_to_app_tx.send(AppEvent::Quit).await.unwrap();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap().unwrap();
}

#[tokio::test]
async fn test_cancel_token_stops_event_loop() {
    let service = Arc::new(FakeDictionary::new(Duration::ZERO));
    let state = Arc::new(AppState::new(test_config(0)));
    let (_ui_to_app_tx, ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_to_ui_tx, _app_to_ui_rx) = kanal::unbounded_async::<AppEvent>();
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(event_loop(
        state,
        ui_to_app_rx,
        app_to_ui_tx,
        service,
        cancel.clone(),
    ));

    cancel.cancel();
    let result = timeout(Duration::from_secs(1), handle).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
}

/// Cancels the lookup's token while the fetch is completing
struct CancellingDictionary {
    inner: FakeDictionary,
    cancel: CancellationToken,
}

#[async_trait]
impl DictionaryService for CancellingDictionary {
    async fn lookup(&self, query: &str, lang: &str) -> Result<Value, FetchError> {
        let result = self.inner.lookup(query, lang).await;
        self.cancel.cancel();
        result
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        self.inner.supported_languages()
    }

    fn metadata(&self) -> ProviderMetadata {
        self.inner.metadata()
    }
}

#[tokio::test]
async fn test_lookup_cancelled_after_fetch_is_not_delivered() {
    let cancel = CancellationToken::new();
    let service = Arc::new(CancellingDictionary {
        inner: FakeDictionary::new(Duration::ZERO),
        cancel: cancel.clone(),
    });
    let (app_to_ui_tx, app_to_ui_rx) = kanal::unbounded_async::<AppEvent>();

    timeout(
        Duration::from_secs(1),
        run_lookup(
            LookupTicket::new(1, "стол"),
            service,
            "en".to_string(),
            Duration::ZERO,
            cancel,
            app_to_ui_tx.clone(),
        ),
    )
    .await
    .expect("lookup hung");

    assert!(matches!(app_to_ui_rx.try_recv(), Ok(None)));
}

#[tokio::test]
async fn test_http_status_failure_renders_kind() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf).await;
        stream
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
            .await
            .unwrap();
    });

    let client = OpenRussianClient::new(
        format!("http://{addr}/suggestions"),
        Duration::from_secs(2),
    )
    .unwrap();

    let document = fetch_document(&client, "стол", "en").await;

    assert_eq!(
        document.to_markdown(),
        "# Error\nFailed to fetch data: `HttpStatus`"
    );
}
