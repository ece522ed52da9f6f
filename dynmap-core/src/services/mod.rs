pub mod builtin_commands;
pub mod command_service;
pub mod dynmap;
