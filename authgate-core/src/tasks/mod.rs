// File: authgate-core/src/tasks/mod.rs
pub mod lockout_maintenance;
