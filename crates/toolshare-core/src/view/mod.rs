pub mod collation;
pub mod projector;

pub use collation::compare_base;
pub use projector::{
    category_colour, project, CategoryGroup, Colour, Projection, ToolView, DEFAULT_COLOUR,
};
