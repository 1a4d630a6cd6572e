use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use toolshare_core::{Action, AppState, Category, KvStore, Mode, Outcome, ToolView};

use super::input::Input;

// ── ui state ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Field {
    Name,
    Email,
}

/// Terminal-side state layered over the core [`AppState`]: form contents,
/// focus and selection. Session data lives only in `state`.
pub(super) struct App<S: KvStore> {
    pub(super) state: AppState<S>,
    pub(super) name: Input,
    pub(super) email: Input,
    pub(super) focus: Field,
    pub(super) tool_name: Input,
    /// Index into [`Category::ALL`]; `None` is the empty placeholder.
    pub(super) category: Option<usize>,
    /// Highlighted row in the borrow view, in display order.
    pub(super) selected: usize,
    pub(super) quit: bool,
}

impl<S: KvStore> App<S> {
    pub(super) fn new(state: AppState<S>) -> Self {
        Self {
            state,
            name: Input::default(),
            email: Input::default(),
            focus: Field::Name,
            tool_name: Input::default(),
            category: None,
            selected: 0,
            quit: false,
        }
    }

    pub(super) fn selected_category(&self) -> Option<Category> {
        self.category.map(|i| Category::ALL[i].clone())
    }

    /// Rows of the borrow view in display order.
    pub(super) fn rows(&self) -> Vec<ToolView> {
        self.state.projection().rows().cloned().collect()
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        match self.state.mode() {
            Mode::Unidentified => self.identify_key(key),
            Mode::Menu => self.menu_key(key),
            Mode::Adding => self.adding_key(key),
            Mode::Borrowing => self.borrowing_key(key),
        }
    }

    fn identify_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    Field::Name => Field::Email,
                    Field::Email => Field::Name,
                };
            }
            KeyCode::Enter => {
                self.state.dispatch(Action::Identify {
                    name: self.name.as_str().to_string(),
                    email: self.email.as_str().to_string(),
                });
            }
            KeyCode::Esc => self.quit = true,
            _ => {
                let field = match self.focus {
                    Field::Name => &mut self.name,
                    Field::Email => &mut self.email,
                };
                edit(field, key.code);
            }
        }
    }

    fn menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('1') | KeyCode::Char('a') => {
                self.state.dispatch(Action::Enter(Mode::Adding));
            }
            KeyCode::Char('2') | KeyCode::Char('b') => {
                self.selected = 0;
                self.state.dispatch(Action::Enter(Mode::Borrowing));
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn adding_key(&mut self, key: KeyEvent) {
        let n = Category::ALL.len();
        match key.code {
            KeyCode::Esc => {
                self.state.dispatch(Action::Back);
            }
            KeyCode::Down | KeyCode::Tab => {
                self.category = match self.category {
                    None => Some(0),
                    Some(i) if i + 1 < n => Some(i + 1),
                    Some(_) => None,
                };
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.category = match self.category {
                    None => Some(n - 1),
                    Some(0) => None,
                    Some(i) => Some(i - 1),
                };
            }
            KeyCode::Enter => {
                let category = self
                    .selected_category()
                    .map(|c| c.as_str().to_string())
                    .unwrap_or_default();
                let outcome = self.state.dispatch(Action::AddTool {
                    name: self.tool_name.as_str().to_string(),
                    category,
                });
                if outcome == Outcome::Accepted {
                    self.tool_name.clear();
                    self.category = None;
                }
            }
            code => edit(&mut self.tool_name, code),
        }
    }

    fn borrowing_key(&mut self, key: KeyEvent) {
        let rows = self.rows();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.state.dispatch(Action::Back);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < rows.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(row) = rows.get(self.selected) {
                    self.state.dispatch(Action::BorrowTool {
                        index: row.original_index,
                    });
                }
            }
            _ => {}
        }
    }
}

fn edit(input: &mut Input, code: KeyCode) {
    match code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.cursor_left(),
        KeyCode::Right => input.cursor_right(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshare_core::InMemoryStore;

    fn press(app: &mut App<InMemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App<InMemoryStore>, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn identified_app() -> App<InMemoryStore> {
        let mut app = App::new(AppState::open(InMemoryStore::new()));
        type_str(&mut app, "Jesse");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "jesse@example.nl");
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn identification_form_unlocks_menu() {
        let app = identified_app();
        assert_eq!(app.state.mode(), Mode::Menu);
        assert_eq!(app.state.user().unwrap().email, "jesse@example.nl");
    }

    #[test]
    fn empty_email_keeps_form_open() {
        let mut app = App::new(AppState::open(InMemoryStore::new()));
        type_str(&mut app, "Jesse");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.mode(), Mode::Unidentified);
        assert_eq!(app.name.as_str(), "Jesse");
    }

    #[test]
    fn add_form_requires_category_and_clears_on_success() {
        let mut app = identified_app();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state.mode(), Mode::Adding);

        type_str(&mut app, "Tacker");
        press(&mut app, KeyCode::Enter);
        assert!(app.state.registry().is_empty());
        assert_eq!(app.tool_name.as_str(), "Tacker");

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_category(), Some(Category::Boren));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.registry().len(), 1);
        assert_eq!(app.state.registry().get(0).unwrap().category, Category::Boren);
        assert_eq!(app.tool_name.as_str(), "");
        assert_eq!(app.category, None);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.mode(), Mode::Menu);
    }

    #[test]
    fn category_selector_wraps_through_placeholder() {
        let mut app = identified_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_category(), Some(Category::VervenMaskeren));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.category, None);
    }

    #[test]
    fn borrow_view_borrows_highlighted_row() {
        let mut app = identified_app();
        press(&mut app, KeyCode::Char('a'));
        for name in ["Zaag", "accu"] {
            type_str(&mut app, name);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.state.mode(), Mode::Borrowing);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        // second row in display order is "Zaag", registry position 0
        let reg = app.state.registry();
        assert_eq!(reg.get(0).unwrap().borrowed_by.as_deref(), Some("Jesse"));
        assert_eq!(reg.get(1).unwrap().borrowed_by, None);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = identified_app();
        press(&mut app, KeyCode::Char('a'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.quit);
    }
}
