//! Core page composition: company and theme inputs, content defaults, and
//! the seams to the data preparation and composition collaborators.

pub mod cache;
pub mod company;
pub mod component_data;
pub mod composer;
pub mod config;
pub mod content;
pub mod log;
pub mod render;
pub mod theme;

// Re-export main types for cleaner imports
pub use company::CompanyProfile;
pub use component_data::{Analyst, BaseData, ComponentDataProvider};
pub use composer::{ComponentComposer, JsonComposer, TemplateKey, TemplateSpec};
pub use content::{ComposedContent, compose_content};
pub use render::{assemble_page, render_page};
pub use theme::{ResolvedTheme, ThemeSpec, resolve_theme};
