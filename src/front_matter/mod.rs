pub mod types;
pub mod deserializers;
pub mod parser;

pub use types::FrontMatter;
pub use parser::parse_document;
