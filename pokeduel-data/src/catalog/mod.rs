mod catalog;
mod loader;
mod query;

pub use catalog::Catalog;
pub use loader::CatalogLoader;
pub use query::SearchQuery;
