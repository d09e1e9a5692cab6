pub mod site;
pub mod page;
pub mod processor;

pub use site::{build_site, BuildOptions};
