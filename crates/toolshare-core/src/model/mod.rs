pub mod tool;
pub mod user;

pub use tool::{Category, Tool};
pub use user::User;
