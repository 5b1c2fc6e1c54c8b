//! Mesh import descriptors.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::meta::MeshMetaInfoContainer;
use crate::types::{Vector3f, section_enum};

section_enum! {
    /// Format of a mesh file.
    pub enum MeshFormat {
        /// Stereolithography file format.
        STL,
        /// Wavefront OBJ file format.
        OBJ,
        /// Polygon File Format.
        PLY,
    }
}

section_enum! {
    /// Unit of the lengths within a mesh file.
    pub enum MeshUnit {
        Kilometer,
        Meter,
        Centimeter,
        Millimeter,
        Micrometer,
        Nanometer,
        Inch,
        Foot,
        Yard,
        Mile,
    }
}

/// Descriptor to completely define a mesh data set import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSection {
    /// Path to the mesh file that has to be imported. Mandatory.
    pub file_name: PathBuf,
    /// Format of the mesh file.
    pub mesh_format: MeshFormat,
    /// Rotation of the mesh in the scene as euler angles in degrees
    /// (heading, elevation, bank).
    pub mesh_rotation: Vector3f,
    /// Translation applied to the mesh origin in the scene.
    pub mesh_translation: Vector3f,
    /// Unit of the lengths within the mesh file.
    pub mesh_unit: MeshUnit,
    /// Name of the mesh object in the scene. Empty means the host
    /// application picks one (e.g. "Mesh 1").
    pub object_name_in_scene: String,
    /// Optional component meta information shown in object properties.
    pub meta_info: Option<MeshMetaInfoContainer>,
}

impl MeshSection {
    /// Mesh descriptor for the given file with default import settings.
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            mesh_format: MeshFormat::STL,
            mesh_rotation: Vector3f(0.0, 0.0, 0.0),
            mesh_translation: Vector3f(0.0, 0.0, 0.0),
            mesh_unit: MeshUnit::Millimeter,
            object_name_in_scene: String::new(),
            meta_info: None,
        }
    }
}

/// A container holding [`MeshSection`] object(s).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshSectionHolder {
    pub meshes: Vec<MeshSection>,
}
