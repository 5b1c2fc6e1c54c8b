//! Project file serialization.
//!
//! Renders [`vgproj_model`] project descriptions into the textual project
//! file format consumed by volume analysis applications: a sequence of
//! named sections, each with tab-indented `key = value` lines.
//!
//! # Example
//!
//! ```
//! use vgproj_model::{MeshSection, ProjectDescription};
//! use vgproj_xvgi::to_string;
//!
//! let mut project = ProjectDescription::default();
//! project.meshes.meshes.push(MeshSection::new("/data/part.stl"));
//!
//! let text = to_string(&project);
//! assert!(text.starts_with("[VersionSection]"));
//! assert!(text.contains("[MeshSection0]"));
//! ```

pub mod error;
pub mod escape;
pub mod section;
pub mod sections;
pub mod value;
pub mod writer;

pub use error::{Result, XvgiError};
pub use escape::escape_name;
pub use value::FieldValue;
pub use writer::{XvgiWriter, to_string, write_file};
