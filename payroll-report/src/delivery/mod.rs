//! Third-party delivery reconciliation

pub mod reconcile;

pub use reconcile::{DeliveryLedger, PaymentStatus, reconcile_deliveries};
