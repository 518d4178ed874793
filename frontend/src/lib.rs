pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod gemini;
pub mod models;
pub mod prompt;
pub mod service;
pub mod session;
pub mod view;
