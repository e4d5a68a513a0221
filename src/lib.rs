// SPDX-License-Identifier: MPL-2.0
//! `iced_album` is a small photo album builder built with the Iced GUI framework.
//!
//! The user picks 5-10 images, previews them as a thumbnail grid, and saves
//! the selection as a named directory of copied files. The crate also
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod album;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
