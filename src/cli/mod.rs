pub mod commands;
pub mod watch;
