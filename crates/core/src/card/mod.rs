//! Card creation and viewer workflows

pub mod ports;
pub mod service;

pub use service::CardService;
