//! Veranda Server - marketing site backend and admin back office
//!
//! # Module structure
//!
//! ```text
//! veranda-server/src/
//! ├── core/        # config, shared state, HTTP listener
//! ├── auth/        # JWT auth, argon2 passwords, middleware
//! ├── api/         # HTTP routes and handlers (one module per resource)
//! ├── dashboard/   # cross-collection aggregation
//! ├── db/          # SQLite pool and repositories
//! ├── routes/      # router assembly and middleware stack
//! └── utils/       # errors, logging, time helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod dashboard;
pub mod db;
pub mod routes;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{AppError, AppResponse, AppResult};
