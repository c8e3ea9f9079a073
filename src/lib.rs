//! Everwin Industrial Park website.
//!
//! A bilingual (English/Arabic) single-page marketing site rendered on the
//! server from a small page state, with a decorative hero scene and a
//! progressive client script.

pub mod config;
pub mod content;
pub mod i18n;
pub mod page;
pub mod render;
pub mod scene;
pub mod server;
