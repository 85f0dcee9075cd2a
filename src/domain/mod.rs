//! Entities exchanged with the database management API.

pub mod backup;
pub mod ha;
pub mod optimization;
pub mod performance;
pub mod privilege;
pub mod role;
pub mod security;
pub mod types;
pub mod user;
