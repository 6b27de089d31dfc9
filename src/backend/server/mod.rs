//! Server Module
//!
//! Server configuration, shared state, and application startup/shutdown.
//!
//! # Architecture
//!
//! - **`config`** - `ServerConfig` loaded from the environment
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - `create_app`, background tasks, graceful shutdown
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and teardown
//! ```
//!
//! # Lifecycle
//!
//! 1. `ServerConfig::from_env()`
//! 2. `create_app(config)` opens storage and builds the router
//! 3. `axum::serve(...).with_graceful_shutdown(shutdown_signal())`
//! 4. `Application::shutdown()` stops the sweep task and closes the pool

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ServerConfig, ServerConfigError};
pub use init::{create_app, shutdown_signal, Application};
pub use state::AppState;
