pub mod aliases;
pub mod commands;
pub mod state;
