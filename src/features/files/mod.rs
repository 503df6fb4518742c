//! File metadata and pre-signed URL brokering.
//!
//! The server records metadata and mints short-lived URLs; file bytes travel
//! directly between the browser and object storage.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/files` | List file records, oldest first |
//! | POST | `/api/files/upload-url` | Record a file and mint a PUT URL |
//! | GET | `/api/files/{id}/download` | Mint a GET URL for a recorded file |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgFileRepository;
pub use routes::{health_routes, routes};
pub use services::FileService;
