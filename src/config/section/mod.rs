//! Manifest section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module   | TOML Section | Purpose                                 |
//! |----------|--------------|-----------------------------------------|
//! | `deploy` | `[deploy]`   | Mode variable, base path, data dirs     |
//! | `site`   | `[site]`     | Title and description                   |
//! | `theme`  | `[theme]`    | Nav bar, sidebar, social links          |

mod deploy;
pub mod site;
pub mod theme;

pub use deploy::DeployConfig;
pub use site::SiteInfoConfig;
pub use theme::ThemeSectionConfig;
