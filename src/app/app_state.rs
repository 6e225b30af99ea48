use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::dropdown::{DropdownState, MenuItem};
use crate::layout::LayoutRegions;
use crate::notification::NotificationCenter;
use crate::publish::{Navigation, PublishForm, PublishState, SubmitError, report_outcome};
use crate::scroll::{NavButtons, ScrollState, ScrollWatcher};
use crate::theme::{Theme, ThemeStore};

pub const PUBLISH_BUSY_MESSAGE: &str = "A post is already being published";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Publish,
}

pub struct App {
    pub notifications: NotificationCenter,
    pub theme: ThemeStore,
    pub dropdown: DropdownState,
    pub screen: Screen,
    pub home_scroll: ScrollState,
    pub scroll_watcher: ScrollWatcher,
    pub form: PublishForm,
    pub publish: PublishState,
    pub layout_regions: LayoutRegions,
    pub user_name: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, theme: ThemeStore) -> Self {
        Self::with_clock(config, theme, Box::new(SystemClock))
    }

    pub fn with_clock(config: &Config, theme: ThemeStore, clock: Box<dyn Clock>) -> Self {
        let notifications = NotificationCenter::with_clock(clock)
            .with_default_duration(config.notifications.duration())
            .with_max_active(config.notifications.max_active);

        Self {
            notifications,
            theme,
            dropdown: DropdownState::new(),
            screen: Screen::Home,
            home_scroll: ScrollState::new(),
            scroll_watcher: ScrollWatcher::new(config.scroll.threshold),
            form: PublishForm::new(),
            publish: PublishState::new(),
            layout_regions: LayoutRegions::new(),
            user_name: config.user.name.clone(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.get_preference()
    }

    pub fn nav_buttons(&self) -> NavButtons {
        self.scroll_watcher.sample(&self.home_scroll)
    }

    /// Advance notification timers and pick up publish results
    pub fn tick(&mut self) {
        let report = self.notifications.tick();
        if report.changed() {
            log::trace!("Notification tick: {:?}", report);
        }

        if let Some(result) = self.publish.poll()
            && let Some(Navigation::Home) = report_outcome(&result, &mut self.notifications)
        {
            self.form.reset();
            self.go_home();
        }
    }

    pub fn toggle_theme(&mut self) {
        if let Err(e) = self.theme.toggle() {
            self.notifications
                .warning(&format!("Theme changed but not saved: {}", e));
        }
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
    }

    pub fn open_publish(&mut self) {
        self.screen = Screen::Publish;
    }

    /// Validate the form and hand it to the publish worker
    pub fn submit_publish(&mut self) {
        if self.publish.is_pending() {
            self.notifications.info(PUBLISH_BUSY_MESSAGE);
            return;
        }

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.notifications.warning(&e.to_string());
                return;
            }
        };

        match self.publish.submit(request) {
            Ok(_) => {}
            Err(SubmitError::Busy) => {
                self.notifications.info(PUBLISH_BUSY_MESSAGE);
            }
            Err(e @ SubmitError::Disconnected) => {
                log::error!("Cannot publish: {}", e);
                self.notifications.error(&e.to_string());
            }
        }
    }

    pub fn select_menu_item(&mut self, item: MenuItem) {
        match item {
            MenuItem::Home => self.go_home(),
            MenuItem::Publish => self.open_publish(),
            MenuItem::ToggleTheme => self.toggle_theme(),
            MenuItem::Quit => self.quit(),
        }
    }

    /// Stop the run loop, abandoning any pending publish
    pub fn quit(&mut self) {
        self.publish.cancel();
        self.should_quit = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
