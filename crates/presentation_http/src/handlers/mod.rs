//! HTTP request handlers

pub mod audio;
pub mod health;
pub mod page;
pub mod reader;
