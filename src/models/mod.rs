//! CLI-facing display models

pub mod display;
