//! Terminal reminder manager built around a validated reminder form.
//!
//! [`form`] holds the form logic with no terminal dependency;
//! [`components`] draws it with ratatui and [`app`] hosts it.

pub mod app;
pub mod components;
pub mod event;
pub mod form;
pub mod keys;
pub mod logging;
pub mod reminder;
pub mod settings;
pub mod theme;
pub mod tui;
