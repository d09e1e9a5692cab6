pub mod engine;
pub mod renderer;
pub mod sanitizer;

pub use renderer::MarkdownRenderer;
pub use sanitizer::Sanitizer;
