// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Every failure condition and outcome report of the album workflow is
//! surfaced through this module: notifications appear as small cards in
//! the bottom-right corner. Success and info toasts dismiss themselves;
//! errors stay until the user dismisses them, carrying the weight of the
//! blocking error popups this application replaces.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
