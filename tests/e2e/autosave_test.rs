//! Client-to-server autosave tests
//!
//! Runs the real server on an ephemeral port and drives it with
//! `CloudPadClient`, the same way the editor does.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::net::TcpListener;
use tokio::time::timeout;

use cloudpad::backend::server::{create_app, Application, ServerConfig};
use cloudpad::client::{AutosaveCoordinator, CloudPadClient, SaveState};
use cloudpad::shared::AppConfig;

const AUTOSAVE_DELAY: Duration = Duration::from_millis(50);

/// A server listening on 127.0.0.1 and a config pointing at it
async fn spawn_server() -> (Application, AppConfig) {
    let app = create_app(ServerConfig::for_testing())
        .await
        .expect("failed to build app");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let router = app.router.clone();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = AppConfig::builder()
        .server_url(format!("http://{}", addr))
        .autosave_delay(AUTOSAVE_DELAY)
        .build()
        .unwrap();
    (app, config)
}

async fn wait_for_saved(coordinator: &AutosaveCoordinator<Arc<CloudPadClient>>) {
    let mut states = coordinator.subscribe();
    timeout(Duration::from_secs(5), states.wait_for(|s| *s == SaveState::Saved))
        .await
        .expect("autosave did not settle")
        .unwrap();
}

#[tokio::test]
async fn test_typing_is_saved_after_pause() {
    let (_app, config) = spawn_server().await;
    let client = Arc::new(CloudPadClient::new(config.clone()).unwrap());

    client.register("alice", "pw1").await.unwrap();
    assert_eq!(client.me().await.unwrap(), "alice");

    let note = client.open_latest_note().await.unwrap();
    assert_eq!(note.title, "Untitled");

    let editor = AutosaveCoordinator::new(Arc::clone(&client), note.id, note.content, &config);
    editor.edit("d");
    editor.edit("dr");
    editor.edit("draft");
    assert_eq!(editor.state(), SaveState::Unsaved);

    wait_for_saved(&editor).await;

    let notes = client.list_notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, note.id);
    assert_eq!(notes[0].content, "draft");
}

#[tokio::test]
async fn test_reopening_returns_latest_note() {
    let (_app, config) = spawn_server().await;
    let client = Arc::new(CloudPadClient::new(config.clone()).unwrap());
    client.register("alice", "pw1").await.unwrap();

    let first = client.open_latest_note().await.unwrap();
    let second = client.create_note().await.unwrap();

    let editor = AutosaveCoordinator::new(Arc::clone(&client), first.id, "", &config);
    editor.edit("older note, newer edit");
    editor.flush().await.unwrap();
    assert_eq!(editor.state(), SaveState::Saved);

    // A fresh login lands on the note that was saved most recently
    let other = CloudPadClient::new(config).unwrap();
    assert!(!other.login("alice", "pw1").await.unwrap());
    let reopened = other.open_latest_note().await.unwrap();
    assert_eq!(reopened.id, first.id);
    assert_eq!(reopened.content, "older note, newer edit");
    assert_eq!(other.list_notes().await.unwrap().len(), 2);
    assert_ne!(reopened.id, second.id);
}

#[tokio::test]
async fn test_save_fails_after_logout() {
    let (_app, config) = spawn_server().await;
    let client = Arc::new(CloudPadClient::new(config.clone()).unwrap());
    client.register("alice", "pw1").await.unwrap();
    let note = client.open_latest_note().await.unwrap();

    client.logout().await.unwrap();

    let err = client.list_notes().await.unwrap_err();
    assert!(err.is_unauthorized(), "unexpected error: {:?}", err);

    let editor = AutosaveCoordinator::new(Arc::clone(&client), note.id, "", &config);
    editor.edit("lost");
    let err = editor.flush().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(matches!(editor.state(), SaveState::SaveFailed(_)));

    // Logging back in lets the retry through
    client.login("alice", "pw1").await.unwrap();
    editor.retry().await.unwrap();
    assert_eq!(editor.state(), SaveState::Saved);
    assert_eq!(client.list_notes().await.unwrap()[0].content, "lost");
}

#[tokio::test]
async fn test_cannot_save_foreign_note() {
    let (_app, config) = spawn_server().await;

    let alice = CloudPadClient::new(config.clone()).unwrap();
    alice.register("alice", "pw1").await.unwrap();
    let note = alice.open_latest_note().await.unwrap();

    let bob = CloudPadClient::new(config).unwrap();
    bob.register("bob", "pw2").await.unwrap();

    let err = bob.save_note(note.id, "mine now").await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(alice.list_notes().await.unwrap()[0].content, "");
}
