// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Host document**: identifiers of mountable host elements
//! - **Window**: size bounds of the `app` host window

// ==========================================================================
// Host Document Defaults
// ==========================================================================

/// Identifier of the host element the root component mounts into.
pub const APP_ELEMENT_ID: &str = "app";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default width of the `app` host window (in logical pixels).
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;

/// Default height of the `app` host window (in logical pixels).
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

/// Minimum width of the `app` host window.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Minimum height of the `app` host window.
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!APP_ELEMENT_ID.is_empty());
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
