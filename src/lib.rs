// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a single-screen artwork gallery built with the Iced GUI
//! framework.
//!
//! It shows one artwork at a time from a small bundled catalog, with a
//! caption card and Previous/Next buttons. Navigation clamps at both ends
//! of the gallery.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod icon;
pub mod logging;
pub mod media;
pub mod ui;
