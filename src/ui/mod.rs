// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`confirm`] - Reusable confirmation dialog with single-shot outcome
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod confirm;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
