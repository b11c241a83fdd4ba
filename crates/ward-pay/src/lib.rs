//! Payout allocation for a dialysis unit: a revenue pool derived from the
//! patient count is split across the staffed nursing roles without ever
//! exceeding the pool, and the leftover is pushed into the one flexible role.

pub mod allocation;
pub mod config;
pub mod error;
pub mod telemetry;
