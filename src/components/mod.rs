//! Reusable view components.

pub mod start_attack;
pub mod tag;
pub mod workspace_table;
