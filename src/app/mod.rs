// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the gallery store and nothing else. iced drives the loop:
//! a button press becomes a [`Message`], `update` applies it to the store,
//! and `view` renders the store's current artwork again.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::Error;
use crate::gallery::{catalog, GalleryStore};
use crate::logging;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Name shown in the window title.
pub const APP_NAME: &str = "Art Space";

/// Root Iced application state.
pub struct App {
    /// The gallery, or the construction error that prevented building it.
    gallery: Result<GalleryStore, Error>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("App");
        match &self.gallery {
            Ok(store) => debug
                .field("index", &store.index())
                .field("len", &store.len()),
            Err(err) => debug.field("error", err),
        };
        debug.finish()
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();

    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Resolves configuration and logging first, so that everything the app
/// does afterwards is traced.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir);

    let (config, config_warning) = config::load();
    logging::init(flags.log.as_deref(), &config);
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting {APP_NAME}");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(&config))
        .run()
}

impl App {
    /// Builds the app over the bundled gallery catalog.
    fn new() -> (Self, Task<Message>) {
        let gallery = catalog::bundled_store();
        match &gallery {
            Ok(store) => tracing::info!(artworks = store.len(), "gallery loaded"),
            Err(err) => tracing::error!(%err, "failed to load gallery"),
        }
        (Self { gallery }, Task::none())
    }

    /// Builds the app over an explicit store.
    #[must_use]
    pub fn with_store(store: GalleryStore) -> Self {
        Self { gallery: Ok(store) }
    }

    /// Returns the gallery store, if it was built.
    #[must_use]
    pub fn store(&self) -> Option<&GalleryStore> {
        self.gallery.as_ref().ok()
    }

    fn title(&self) -> String {
        match &self.gallery {
            Ok(store) => format!("{APP_NAME} - {}", store.current().title()),
            Err(_) => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Applies a message to the gallery store.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self.gallery.as_mut().ok(), message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
        })
    }
}
