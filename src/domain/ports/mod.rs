pub mod analysis_store;
pub mod notifier;
pub mod page_parser;
pub mod page_source;
pub mod result_source;
