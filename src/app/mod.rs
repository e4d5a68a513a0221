// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the selection screen,
//! the album preview, and the persister.
//!
//! The `App` struct wires together the domains (selection, localization,
//! notifications) and translates messages into side effects like file
//! dialogs, thumbnail loading, and album saves. Policy decisions (window
//! geometry, albums root resolution) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, ThumbnailSlot};
pub use screen::Screen;

use crate::album::{AlbumLayout, Selection, DEFAULT_ALBUMS_DIR};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::extensions;
use crate::media::ThumbnailData;
use crate::ui::name_prompt;
use crate::ui::notifications;
use crate::ui::selection_screen;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

const WINDOW_DEFAULT_WIDTH: u32 = 800;
const WINDOW_DEFAULT_HEIGHT: u32 = 600;
const MIN_WINDOW_WIDTH: u32 = 560;
const MIN_WINDOW_HEIGHT: u32 = 400;

/// Thumbnails and grid geometry of an album being previewed.
#[derive(Debug, Clone)]
pub struct AlbumView {
    pub thumbnails: Vec<ThumbnailData>,
    pub layout: AlbumLayout,
}

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    selection: Selection,
    selection_screen: selection_screen::State,
    /// Present while the album screen is shown.
    album_view: Option<AlbumView>,
    /// Guards against overlapping thumbnail-loading tasks.
    loading_album: bool,
    /// Present while the album-name dialog is open.
    name_prompt: Option<name_prompt::State>,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Root directory albums are saved under.
    albums_root: PathBuf,
    /// Directory the file picker opens in, remembered within the session.
    last_picked_dir: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Selection,
            selection: Selection::new(),
            selection_screen: selection_screen::State::new(),
            album_view: None,
            loading_album: false,
            name_prompt: None,
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            albums_root: PathBuf::from(DEFAULT_ALBUMS_DIR),
            last_picked_dir: None,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and the configuration
    /// file, optionally preselecting images named on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode.unwrap_or_default();
        if let Some(albums_dir) = config.albums_dir {
            app.albums_root = albums_dir;
        }

        // Startup arguments obey the same screening and add rules as the
        // file picker.
        let candidates: Vec<PathBuf> = flags
            .image_paths
            .into_iter()
            .filter(|path| extensions::is_supported_image(path) && path.exists())
            .collect();
        if !candidates.is_empty() {
            let outcome = app.selection.add(candidates);
            update::report_add_outcome(&mut app.notifications, &outcome);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Selection => self.i18n.tr("window-title"),
            Screen::Album => self.i18n.tr("album-window-title"),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
