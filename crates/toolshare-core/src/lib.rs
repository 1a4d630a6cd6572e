pub mod app;
pub mod config;
pub mod identity;
pub mod model;
pub mod outcome;
pub mod registry;
pub mod store;
pub mod view;

pub use app::{Action, AppState, Mode};
pub use config::ToolshareConfig;
pub use identity::IdentityGate;
pub use model::{Category, Tool, User};
pub use outcome::Outcome;
pub use registry::ToolRegistry;
pub use store::{FileStore, InMemoryStore, KvStore, StoreError};
pub use view::{
    category_colour, project, CategoryGroup, Colour, Projection, ToolView, DEFAULT_COLOUR,
};
