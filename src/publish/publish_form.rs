//! Publish form state
//!
//! Four editable fields backed by `tui_textarea`. The markdown body is the only
//! multi-line field; Enter in the others moves to the next field.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use serde::Serialize;
use thiserror::Error;
use tui_textarea::TextArea;

use super::markdown::render_markdown;
use super::tags::{join_tags, parse_tags};

/// Form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Title,
    Category,
    Tags,
    Content,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Category,
        FormField::Tags,
        FormField::Content,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Category => "Category",
            FormField::Tags => "Tags (comma separated)",
            FormField::Content => "Content (markdown)",
        }
    }

    pub fn is_multi_line(self) -> bool {
        self == FormField::Content
    }

    fn index(self) -> usize {
        FormField::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FormField {
        FormField::ALL[(self.index() + 1) % FormField::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        let len = FormField::ALL.len();
        FormField::ALL[(self.index() + len - 1) % len]
    }
}

/// JSON body of `POST /api/posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishRequest {
    pub title: String,
    pub category: String,
    /// Comma-joined tag list
    pub tags: String,
    /// Rendered HTML
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    BlankTitle,
}

pub struct PublishForm {
    fields: [TextArea<'static>; 4],
    focus: FormField,
}

impl Default for PublishForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishForm {
    pub fn new() -> Self {
        let fields = FormField::ALL.map(|field| {
            let mut textarea = TextArea::default();
            // Remove default underline from cursor line
            textarea.set_cursor_line_style(Style::default());
            if field == FormField::Content {
                textarea.set_placeholder_text("Be kind. Personal attacks are not allowed.");
            }
            textarea
        });

        Self {
            fields,
            focus: FormField::default(),
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn field(&self, field: FormField) -> &TextArea<'static> {
        &self.fields[field.index()]
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut TextArea<'static> {
        &mut self.fields[field.index()]
    }

    pub fn value(&self, field: FormField) -> String {
        self.field(field).lines().join("\n")
    }

    /// Replace the text of `field`
    pub fn set_value(&mut self, field: FormField, text: &str) {
        let textarea = self.field_mut(field);
        textarea.select_all();
        textarea.cut();
        textarea.insert_str(text);
    }

    /// Feed a key to the focused field; returns true if the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter && !self.focus.is_multi_line() {
            self.focus_next();
            return false;
        }
        let focus = self.focus;
        self.field_mut(focus).input(key)
    }

    pub fn insert_str(&mut self, text: &str) {
        let focus = self.focus;
        if focus.is_multi_line() {
            self.field_mut(focus).insert_str(text);
        } else {
            self.field_mut(focus).insert_str(text.replace(['\r', '\n'], " "));
        }
    }

    /// Build the request body, rendering the markdown content
    pub fn to_request(&self) -> Result<PublishRequest, FormError> {
        let title = self.value(FormField::Title).trim().to_string();
        if title.is_empty() {
            return Err(FormError::BlankTitle);
        }

        Ok(PublishRequest {
            title,
            category: self.value(FormField::Category).trim().to_string(),
            tags: join_tags(&parse_tags(&self.value(FormField::Tags))),
            content: render_markdown(&self.value(FormField::Content)),
        })
    }

    /// Clear every field after a successful publish
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[path = "publish_form_tests.rs"]
mod publish_form_tests;
