pub mod builder;
pub mod store;

pub use builder::TypeExplorerBuilder;
pub use store::{Registration, TypeDefStore};
