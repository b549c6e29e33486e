// SPDX-License-Identifier: MPL-2.0
//! User interface: the gallery screen plus shared design tokens and styles.

pub mod design_tokens;
pub mod gallery;
pub mod styles;
