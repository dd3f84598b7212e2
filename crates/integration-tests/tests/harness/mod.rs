#![allow(dead_code)]

pub mod config;
pub mod mock_gemma;
pub mod server;
