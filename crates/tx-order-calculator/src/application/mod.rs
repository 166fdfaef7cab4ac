//! Application layer for transaction ordering

pub mod service;

pub use service::TransactionOrderingService;
