//! UI layer for the product desk: app shell, table, and modal windows.

pub mod app;

pub use app::ProductDeskApp;
