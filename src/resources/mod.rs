//! ECS resources made available to systems.
//!
//! Overview
//! - `debugsession` – debug mode flag, tracked targets per slot, handle sets and overlay root
//! - `editorconfig` – scale limits, handle size and indicator layout, loaded from an ini file
//! - `input` – per-frame state of the debug key and the pointer
//! - `screensize` – stage dimensions in pixels
pub mod debugsession;
pub mod editorconfig;
pub mod input;
pub mod screensize;
