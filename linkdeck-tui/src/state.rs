//! Application state and input handling.
//!
//! `App` owns the catalog and everything the views need to draw a frame.
//! All user-facing messages are raised here as notifications; the views
//! only read state.

use crate::config::TuiConfig;
use crate::keys::{map_key, Action};
use crate::nav::{next_row, previous_row, CategoryTabs};
use crate::notifications::{prune, Notification, NotificationLevel};
use crate::persistence::PersistedState;
use crate::theme::MidnightTheme;
use crate::traits::UrlOpener;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use linkdeck_core::{Bookmark, CatalogError, StoreError, ValidationError};
use linkdeck_storage::{Catalog, CatalogStore};
use std::collections::HashMap;
use tracing::{debug, warn};

const MAX_NOTIFICATIONS: usize = 8;

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form {
    Bookmark {
        category: String,
        title: String,
        url: String,
        focus: FormField,
    },
    Category {
        name: String,
    },
}

impl Form {
    pub fn new_bookmark(category: &str) -> Self {
        Form::Bookmark {
            category: category.to_string(),
            title: String::new(),
            url: String::new(),
            focus: FormField::Title,
        }
    }

    pub fn new_category() -> Self {
        Form::Category {
            name: String::new(),
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self {
            Form::Bookmark {
                title,
                focus: FormField::Title,
                ..
            } => title,
            Form::Bookmark {
                url,
                focus: FormField::Url,
                ..
            } => url,
            Form::Category { name } => name,
        }
    }

    fn switch_field(&mut self) {
        if let Form::Bookmark { focus, .. } = self {
            *focus = match focus {
                FormField::Title => FormField::Url,
                FormField::Url => FormField::Title,
            };
        }
    }
}

/// An action waiting on a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirm {
    DeleteBookmark {
        category: String,
        index: usize,
        title: String,
    },
    RemoveEmptyCategory {
        category: String,
    },
    DeleteCategory {
        category: String,
        bookmarks: usize,
    },
}

impl Confirm {
    pub fn title(&self) -> &'static str {
        match self {
            Confirm::DeleteBookmark { .. } => "Delete Bookmark",
            Confirm::RemoveEmptyCategory { .. } => "Empty Category",
            Confirm::DeleteCategory { .. } => "Delete Category",
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            Confirm::DeleteBookmark {
                category, title, ..
            } => format!("Delete '{}' from '{}'?", title, category),
            Confirm::RemoveEmptyCategory { category } => {
                format!("Category '{}' is now empty. Remove it?", category)
            }
            Confirm::DeleteCategory {
                category,
                bookmarks,
            } => format!(
                "Delete category '{}' and its {} bookmark(s)?",
                category, bookmarks
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Form(Form),
    Confirm(Confirm),
    Help,
}

pub struct App<S: CatalogStore, O: UrlOpener> {
    pub catalog: Catalog<S>,
    pub config: TuiConfig,
    pub theme: MidnightTheme,
    pub opener: O,
    pub mode: Mode,
    pub notifications: Vec<Notification>,
    active: Option<String>,
    selections: HashMap<String, usize>,
}

impl<S: CatalogStore, O: UrlOpener> App<S, O> {
    pub fn new(catalog: Catalog<S>, config: TuiConfig, opener: O) -> Self {
        let mut app = Self {
            catalog,
            config,
            theme: MidnightTheme::midnight(),
            opener,
            mode: Mode::Browse,
            notifications: Vec::new(),
            active: None,
            selections: HashMap::new(),
        };
        let first = app.tabs().active().map(str::to_string);
        app.active = first;
        app.select_first_row();
        app
    }

    /// Re-activate the saved category if it still exists.
    pub fn restore(&mut self, state: PersistedState) {
        if let Some(name) = state.active_category {
            if self.catalog.contains_category(&name) {
                self.set_active(&name);
            }
        }
    }

    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            active_category: self.active_category().map(str::to_string),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        let message = message.into();
        debug!(level = level.label(), %message, "Notification");
        self.notifications.push(Notification::new(level, message));
    }

    /// Surface load or seed-save problems from opening the catalog.
    pub fn report_store_problems(&mut self, problems: &[StoreError]) {
        for problem in problems {
            self.notify(NotificationLevel::Error, problem.to_string());
        }
    }

    /// Expire old notifications.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        prune(
            &mut self.notifications,
            now,
            self.config.notification_ttl_ms,
            MAX_NOTIFICATIONS,
        );
    }

    pub fn tabs(&self) -> CategoryTabs<'_> {
        CategoryTabs::new(self.catalog.sorted_category_names(), self.active.as_deref())
    }

    pub fn active_category(&self) -> Option<&str> {
        self.tabs().active()
    }

    pub fn active_bookmarks(&self) -> &[Bookmark] {
        self.active_category()
            .and_then(|name| self.catalog.bookmarks(name))
            .unwrap_or(&[])
    }

    /// Selected row in the active category, if it is still in range.
    pub fn selected(&self) -> Option<usize> {
        let name = self.active_category()?;
        let len = self.catalog.bookmarks(name).map_or(0, <[Bookmark]>::len);
        self.selections.get(name).copied().filter(|i| *i < len)
    }

    pub fn selected_bookmark(&self) -> Option<&Bookmark> {
        self.selected()
            .and_then(|index| self.active_bookmarks().get(index))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }
        match std::mem::replace(&mut self.mode, Mode::Browse) {
            Mode::Browse => return self.handle_browse(key),
            Mode::Help => {}
            Mode::Form(form) => self.handle_form(form, key),
            Mode::Confirm(confirm) => self.handle_confirm(confirm, key),
        }
        Flow::Continue
    }

    fn handle_browse(&mut self, key: KeyEvent) -> Flow {
        let Some(action) = map_key(key) else {
            return Flow::Continue;
        };
        match action {
            Action::Quit => return Flow::Quit,
            Action::NextCategory => {
                let next = self.tabs().next().map(str::to_string);
                self.switch_to(next);
            }
            Action::PrevCategory => {
                let previous = self.tabs().previous().map(str::to_string);
                self.switch_to(previous);
            }
            Action::SwitchCategory(index) => {
                let target = self.tabs().at(index).map(str::to_string);
                self.switch_to(target);
            }
            Action::MoveDown => self.move_selection(next_row),
            Action::MoveUp => self.move_selection(previous_row),
            Action::OpenSelected => self.open_selected(),
            Action::AddBookmark => {
                if let Some(category) = self.active_category() {
                    self.mode = Mode::Form(Form::new_bookmark(category));
                }
            }
            Action::NewCategory => self.mode = Mode::Form(Form::new_category()),
            Action::DeleteSelected => self.request_delete_bookmark(),
            Action::DeleteCategory => self.request_delete_category(),
            Action::OpenHelp => self.mode = Mode::Help,
            Action::Cancel => {}
        }
        Flow::Continue
    }

    fn handle_form(&mut self, mut form: Form, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => return,
            KeyCode::Enter => {
                self.submit_form(form);
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => form.switch_field(),
            KeyCode::Backspace => {
                form.focused_mut().pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.focused_mut().push(c);
            }
            _ => {}
        }
        self.mode = Mode::Form(form);
    }

    fn handle_confirm(&mut self, confirm: Confirm, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.apply_confirmed(confirm),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
            _ => self.mode = Mode::Confirm(confirm),
        }
    }

    fn submit_form(&mut self, form: Form) {
        match form {
            Form::Bookmark {
                category,
                title,
                url,
                focus,
            } => match self.catalog.add_bookmark(&category, &title, Some(&url)) {
                Ok(()) => {
                    self.select_last_row(&category);
                    self.notify(
                        NotificationLevel::Success,
                        format!("Added '{}' to '{}'.", title.trim(), category),
                    );
                }
                Err(CatalogError::Store(err)) => {
                    self.select_last_row(&category);
                    self.report(&CatalogError::Store(err));
                }
                Err(err) => {
                    self.report(&err);
                    self.mode = Mode::Form(Form::Bookmark {
                        category,
                        title,
                        url,
                        focus,
                    });
                }
            },
            Form::Category { name } => match self.catalog.create_category(&name) {
                Ok(created) => {
                    self.set_active(&created);
                    self.notify(
                        NotificationLevel::Success,
                        format!("Created category '{}'.", created),
                    );
                }
                Err(CatalogError::Store(err)) => {
                    self.set_active(name.trim());
                    self.report(&CatalogError::Store(err));
                }
                Err(err) => {
                    self.report(&err);
                    self.mode = Mode::Form(Form::Category { name });
                }
            },
        }
    }

    fn open_selected(&mut self) {
        let (Some(category), Some(index)) = (self.active_category(), self.selected()) else {
            self.notify(
                NotificationLevel::Info,
                "Please select a bookmark to open.",
            );
            return;
        };
        match self.catalog.open_bookmark(category, index) {
            Ok(url) => match self.opener.open(&url) {
                Ok(()) => self.notify(NotificationLevel::Info, format!("Opened {}", url)),
                Err(reason) => {
                    warn!(%url, %reason, "Opening URL failed");
                    self.notify(NotificationLevel::Error, reason);
                }
            },
            Err(err) => self.report(&err),
        }
    }

    fn request_delete_bookmark(&mut self) {
        let (Some(category), Some(index)) = (self.active_category(), self.selected()) else {
            self.notify(
                NotificationLevel::Info,
                "Please select a bookmark to delete.",
            );
            return;
        };
        let confirm = Confirm::DeleteBookmark {
            category: category.to_string(),
            index,
            title: self
                .selected_bookmark()
                .map(|b| b.title.clone())
                .unwrap_or_default(),
        };
        if self.config.confirm_deletes {
            self.mode = Mode::Confirm(confirm);
        } else {
            self.apply_confirmed(confirm);
        }
    }

    fn request_delete_category(&mut self) {
        let Some(category) = self.active_category() else {
            return;
        };
        let confirm = Confirm::DeleteCategory {
            category: category.to_string(),
            bookmarks: self.active_bookmarks().len(),
        };
        if self.config.confirm_deletes {
            self.mode = Mode::Confirm(confirm);
        } else {
            self.apply_confirmed(confirm);
        }
    }

    fn apply_confirmed(&mut self, confirm: Confirm) {
        match confirm {
            Confirm::DeleteBookmark {
                category, index, ..
            } => self.delete_bookmark(&category, index),
            Confirm::RemoveEmptyCategory { category } => {
                let confirm = Confirm::DeleteCategory {
                    bookmarks: self.catalog.bookmarks(&category).map_or(0, <[Bookmark]>::len),
                    category,
                };
                if self.config.confirm_deletes {
                    self.mode = Mode::Confirm(confirm);
                } else {
                    self.apply_confirmed(confirm);
                }
            }
            Confirm::DeleteCategory { category, .. } => self.delete_category(&category),
        }
    }

    fn delete_bookmark(&mut self, category: &str, index: usize) {
        match self.catalog.delete_bookmark(category, index) {
            Ok(removed) => self.notify(
                NotificationLevel::Success,
                format!("Deleted '{}'.", removed.title),
            ),
            Err(err) => self.report(&err),
        }
        self.clamp_selection(category);
        if self.catalog.is_category_empty(category) {
            self.mode = Mode::Confirm(Confirm::RemoveEmptyCategory {
                category: category.to_string(),
            });
        }
    }

    fn delete_category(&mut self, category: &str) {
        let result = self.catalog.delete_category(category);
        self.selections.remove(category);
        if self.active.as_deref() == Some(category) {
            self.active = None;
            let first = self.tabs().active().map(str::to_string);
            if let Some(first) = first {
                self.set_active(&first);
            }
        }
        match result {
            Ok(deleted) => {
                self.notify(
                    NotificationLevel::Success,
                    format!("Deleted category '{}'.", deleted.name),
                );
                if deleted.reseeded {
                    self.notify(
                        NotificationLevel::Info,
                        "No categories left; recreated 'General'.",
                    );
                }
            }
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, err: &CatalogError) {
        let (level, message) = describe(err);
        self.notify(level, message);
    }

    fn switch_to(&mut self, name: Option<String>) {
        if let Some(name) = name {
            self.set_active(&name);
        }
    }

    fn set_active(&mut self, name: &str) {
        self.active = Some(name.to_string());
        if !self.selections.contains_key(name) {
            self.select_first_row();
        }
    }

    fn select_first_row(&mut self) {
        if let Some(name) = self.active_category().map(str::to_string) {
            if !self.active_bookmarks().is_empty() {
                self.selections.insert(name, 0);
            }
        }
    }

    fn select_last_row(&mut self, category: &str) {
        let len = self.catalog.bookmarks(category).map_or(0, <[Bookmark]>::len);
        if len > 0 {
            self.selections.insert(category.to_string(), len - 1);
        }
        self.set_active(category);
    }

    fn clamp_selection(&mut self, category: &str) {
        let len = self.catalog.bookmarks(category).map_or(0, <[Bookmark]>::len);
        match self.selections.get(category).copied() {
            Some(_) if len == 0 => {
                self.selections.remove(category);
            }
            Some(i) if i >= len => {
                self.selections.insert(category.to_string(), len - 1);
            }
            _ => {}
        }
    }

    fn move_selection(&mut self, step: fn(Option<usize>, usize) -> Option<usize>) {
        let Some(name) = self.active_category().map(str::to_string) else {
            return;
        };
        let len = self.active_bookmarks().len();
        match step(self.selected(), len) {
            Some(index) => {
                self.selections.insert(name, index);
            }
            None => {
                self.selections.remove(&name);
            }
        }
    }
}

/// Map a catalog error to the message shown in the footer.
pub fn describe(err: &CatalogError) -> (NotificationLevel, String) {
    match err {
        CatalogError::Validation(ValidationError::EmptyTitle) => (
            NotificationLevel::Warning,
            "Please enter a title for the bookmark.".to_string(),
        ),
        CatalogError::Validation(ValidationError::EmptyName) => (
            NotificationLevel::Warning,
            "Category name cannot be empty.".to_string(),
        ),
        CatalogError::Duplicate { name } => (
            NotificationLevel::Warning,
            format!("Category '{}' already exists.", name),
        ),
        CatalogError::NoUrl { .. } => (
            NotificationLevel::Warning,
            "Selected bookmark does not have an associated URL.".to_string(),
        ),
        CatalogError::NotFound(err) => (NotificationLevel::Error, err.to_string()),
        CatalogError::Store(err) => (
            NotificationLevel::Error,
            format!("Could not save bookmarks: {}", err),
        ),
    }
}
