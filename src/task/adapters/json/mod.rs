//! Durable JSON-blob adapter for the task repository port.

mod repository;

pub use repository::JsonTaskRepository;
