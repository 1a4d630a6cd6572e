use tracing::debug;

use crate::identity::IdentityGate;
use crate::model::User;
use crate::outcome::Outcome;
use crate::registry::ToolRegistry;
use crate::store::KvStore;
use crate::view::{project, Projection};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Unidentified,
    /// Identified, no activity chosen yet.
    Menu,
    Adding,
    Borrowing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Identify { name: String, email: String },
    Enter(Mode),
    Back,
    AddTool { name: String, category: String },
    BorrowTool { index: usize },
}

/// All session state, owned in one place. Every mutation goes through
/// [`AppState::dispatch`], which also writes the store before returning.
pub struct AppState<S: KvStore> {
    identity: IdentityGate,
    mode: Mode,
    registry: ToolRegistry,
    store: S,
}

impl<S: KvStore> AppState<S> {
    /// Start a session from whatever `store` holds.
    pub fn open(store: S) -> Self {
        let identity = IdentityGate::restore(&store);
        let registry = ToolRegistry::load(&store);
        let mode = if identity.is_open() {
            Mode::Menu
        } else {
            Mode::Unidentified
        };
        Self {
            identity,
            mode,
            registry,
            store,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.apply(action.clone());
        debug!(?action, %outcome, mode = ?self.mode, "dispatch");
        outcome
    }

    fn apply(&mut self, action: Action) -> Outcome {
        let user = self.identity.user().cloned();
        match (action, user) {
            (Action::Identify { name, email }, _) => {
                let outcome = self.identity.identify(&name, &email, &self.store);
                if outcome.is_accepted() {
                    self.mode = Mode::Menu;
                }
                outcome
            }
            (_, None) => Outcome::RejectedNotIdentified,
            // Identification is only ever left, never re-entered.
            (Action::Enter(Mode::Unidentified), Some(_)) => Outcome::RejectedInvalidTransition,
            (Action::Enter(mode), Some(_)) => {
                self.mode = mode;
                Outcome::Accepted
            }
            (Action::Back, Some(_)) => {
                self.mode = Mode::Menu;
                Outcome::Accepted
            }
            (Action::AddTool { name, category }, Some(user)) => {
                self.registry
                    .add_tool(&name, &category, &user.name, &user.email, &self.store)
            }
            (Action::BorrowTool { index }, Some(user)) => {
                self.registry.borrow_tool(index, &user.name, &self.store)
            }
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn user(&self) -> Option<&User> {
        self.identity.user()
    }

    pub fn is_identified(&self) -> bool {
        self.identity.is_open()
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current grouped view of the registry.
    pub fn projection(&self) -> Projection {
        project(self.registry.tools())
    }
}
