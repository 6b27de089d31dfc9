//! Client Module
//!
//! Rust client for the CloudPad HTTP API, plus the autosave logic an editor
//! needs on top of it.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs        - Module exports and documentation
//! ├── api.rs        - CloudPadClient (reqwest, cookie store) and ClientError
//! ├── scheduler.rs  - DebounceTimer
//! └── autosave.rs   - AutosaveCoordinator, SaveState, NoteSaver
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cloudpad::client::{AutosaveCoordinator, CloudPadClient};
//! use cloudpad::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let client = Arc::new(CloudPadClient::new(config.clone())?);
//! client.login("alice", "pw1").await?;
//!
//! let note = client.open_latest_note().await?;
//! let autosave = AutosaveCoordinator::new(client.clone(), note.id, note.content, &config);
//! autosave.edit("hello");
//! autosave.flush().await?;
//! # Ok(())
//! # }
//! ```

/// HTTP API client
pub mod api;

/// Debounce timer
pub mod scheduler;

/// Autosave state machine
pub mod autosave;

pub use api::{ClientError, CloudPadClient};
pub use autosave::{AutosaveCoordinator, NoteSaver, SaveState};
pub use scheduler::DebounceTimer;
