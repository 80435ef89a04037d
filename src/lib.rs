pub mod config;
pub mod logger;
pub mod document;
pub mod render;
pub mod filter;
pub mod query_string;
pub mod text_utils;
mod test_data;

pub use document::Document;
pub use filter::predicate_builder::build_predicate;
pub use filter::selection::FilterSelection;
pub use filter::QueryPredicate;
pub use render::document_renderer::{render, DocumentRenderer};
pub use render::RenderTree;
