pub mod api;
pub mod commands;
pub mod config;
pub mod console;
pub mod consts;
pub mod content;
pub mod exceptions;
pub mod format;
pub mod fs;
pub mod models;
pub mod state;
pub mod upload;
pub mod utils;
