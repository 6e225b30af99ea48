/// Entries of the user menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Home,
    Publish,
    ToggleTheme,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Home,
        MenuItem::Publish,
        MenuItem::ToggleTheme,
        MenuItem::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Home => "Home",
            MenuItem::Publish => "Publish",
            MenuItem::ToggleTheme => "Toggle theme",
            MenuItem::Quit => "Quit",
        }
    }
}

#[derive(Debug, Default)]
pub struct DropdownState {
    open: bool,
    selected: usize,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger clicked: flip visibility
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.selected = 0;
        }
    }

    /// Click anywhere outside the menu, or Esc
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuItem::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(MenuItem::ALL.len() - 1);
    }

    /// Close the menu and return the highlighted item
    pub fn confirm(&mut self) -> Option<MenuItem> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.selected())
    }

    /// Close the menu and return the item at `index`, if any
    pub fn choose(&mut self, index: usize) -> Option<MenuItem> {
        let item = MenuItem::ALL.get(index).copied()?;
        self.selected = index;
        self.open = false;
        Some(item)
    }
}
