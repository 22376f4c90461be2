//! Storage abstractions for the service layer
//!
//! Contains the reusable file-backed document collection used to persist
//! small record sets as JSON.

pub mod json_doc_store;
