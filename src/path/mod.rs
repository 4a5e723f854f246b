mod expander;
mod resolver;

pub use expander::{normalize, PathExpander};
pub use resolver::{strip_quotes, Navigation, PathResolver, Resolution, HOME_TOKEN, PARENT_TOKEN};
