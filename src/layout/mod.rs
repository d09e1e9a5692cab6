mod renderer;

pub use renderer::{SiteRenderer, INDEX_FILE};
