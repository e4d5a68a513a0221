// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`selection_screen`] - Main screen: the selected-image list and album actions
//! - [`album_screen`] - Modal album preview as a fixed-column thumbnail grid
//!
//! # Shared Infrastructure
//!
//! - [`name_prompt`] - Modal dialog asking for an album name
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod album_screen;
pub mod design_tokens;
pub mod name_prompt;
pub mod notifications;
pub mod selection_screen;
pub mod styles;
pub mod theming;
