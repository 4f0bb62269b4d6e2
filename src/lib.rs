//! Universal-link routing for the Reader.

pub mod config;
pub mod error;
pub mod navigation;
pub mod observability;
pub mod reader;
pub mod routing;

pub use config::LinksConfig;
pub use error::{LinkError, PatternError};
pub use navigation::{LinkSource, Navigation, ReaderCoordinator, RootPresenter};
pub use reader::ReaderRoute;
pub use routing::{LinkRouter, MatchedValues};
