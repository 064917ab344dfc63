//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Stock VitePress"
//! description = "use vitepress display stock info"
//! ```

mod info;

pub use info::SiteInfoConfig;
