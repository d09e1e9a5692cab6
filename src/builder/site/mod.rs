mod builder;
mod collection;
mod converter;

pub use builder::{build_site, BuildOptions};
pub use converter::{page_to_liquid, site_to_liquid};
