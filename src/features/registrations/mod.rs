//! Product registration intake feature.
//!
//! A public endpoint that accepts a registration submission as a
//! multipart form (category, model, serial number, invoice date plus one
//! attached file), stores the attachment on disk and persists the record.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/register-product` | No | Submit a product registration |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegistrationService;
