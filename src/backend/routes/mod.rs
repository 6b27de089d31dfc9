//! Routes Module
//!
//! HTTP route configuration.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Router assembly, session + trace layers
//! └── api_routes.rs  - Public, login-guarded, and admin route groups
//! ```

/// Main router creation
pub mod router;

/// API route groups
pub mod api_routes;

pub use router::create_router;
