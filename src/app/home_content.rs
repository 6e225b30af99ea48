//! Text of the home page

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::Palette;

pub struct HomeSection {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HOME_SECTIONS: &[HomeSection] = &[
    HomeSection {
        title: "Welcome to Doniai",
        paragraphs: &[
            "A small blog about Go, web backends and the tools around them.",
            "This terminal client lets you write and publish posts without",
            "leaving the shell. Posts are written in markdown and rendered to",
            "HTML before they are sent to the server.",
        ],
        entries: &[],
    },
    HomeSection {
        title: "Getting around",
        paragraphs: &[
            "Scroll this page with the keyboard or the mouse wheel. Once you",
            "are far enough down, a Top button appears at the bottom of the",
            "page; a Bottom button is shown while there is more to read.",
        ],
        entries: &[
            ("j / ↓", "Scroll down one line"),
            ("k / ↑", "Scroll up one line"),
            ("PgDn", "Scroll down half a page"),
            ("PgUp", "Scroll up half a page"),
            ("g", "Jump to the top"),
            ("G", "Jump to the bottom"),
        ],
    },
    HomeSection {
        title: "Everywhere",
        paragraphs: &[],
        entries: &[
            ("Ctrl+T", "Toggle light and dark theme"),
            ("F2", "Open the user menu"),
            ("Ctrl+D", "Dismiss the newest notification"),
            ("Ctrl+C", "Quit"),
            ("q", "Quit (home page only)"),
            ("p", "Write a new post (home page only)"),
        ],
    },
    HomeSection {
        title: "User menu",
        paragraphs: &[
            "Click your name in the top-right corner or press F2. Choose an",
            "entry with the arrow keys and Enter, or click it. Clicking",
            "anywhere else closes the menu.",
        ],
        entries: &[
            ("Home", "Back to this page"),
            ("Publish", "Write a new post"),
            ("Toggle theme", "Same as Ctrl+T"),
            ("Quit", "Leave the client"),
        ],
    },
    HomeSection {
        title: "Writing a post",
        paragraphs: &[
            "The publish screen has four fields: title, category, tags and",
            "content. Tags are separated by commas, either , or ，. Content is",
            "markdown with tables, strikethrough, task lists and footnotes.",
            "A title is required; everything else may be left empty.",
        ],
        entries: &[
            ("Tab", "Next field"),
            ("Shift+Tab", "Previous field"),
            ("Enter", "Next field (content: new line)"),
            ("Ctrl+S", "Publish"),
            ("Esc", "Back to the home page"),
        ],
    },
    HomeSection {
        title: "Notifications",
        paragraphs: &[
            "Messages slide in at the top-right corner and go away on their",
            "own after a few seconds. Click × to close one early.",
            "A successful publish takes you back here; a failed one keeps",
            "your draft so you can fix it and try again.",
        ],
        entries: &[],
    },
    HomeSection {
        title: "Configuration",
        paragraphs: &[
            "Settings live in ~/.config/doniai/config.toml: the server URL,",
            "how long notifications stay up, how many may be shown at once,",
            "the scroll distance before the Top button appears and your",
            "display name. Your theme choice is remembered between runs.",
        ],
        entries: &[],
    },
];

const KEY_COLUMN_WIDTH: usize = 12;

/// Build the styled lines of the home page
pub fn home_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, section) in HOME_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        for paragraph in section.paragraphs {
            lines.push(Line::from(Span::styled(
                *paragraph,
                Style::default().fg(palette.text),
            )));
        }
        if !section.paragraphs.is_empty() && !section.entries.is_empty() {
            lines.push(Line::default());
        }

        for (key, description) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH),
                    Style::default().fg(palette.border_focused),
                ),
                Span::styled(*description, Style::default().fg(palette.text_dim)),
            ]));
        }
    }

    lines
}
