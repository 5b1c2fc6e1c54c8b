//! Project descriptions and convenience constructors.
//!
//! A [`ProjectDescription`] is the root object handed to the XVGI writer.
//! The constructors in this module build the minimal descriptions most
//! callers need; everything they produce can be adjusted afterwards
//! through the public fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::mesh::{MeshFormat, MeshSection, MeshSectionHolder, MeshUnit};
use crate::meta::{ComponentInfoSection, MeshMetaInfoContainer};
use crate::reconstruction::{
    ReconstructionProjectionDataType, ReconstructionProjectionFileEndian,
    ReconstructionProjectionFileFormat, ReconstructionProjectionFileSection,
    ReconstructionProjectionSorting, ReconstructionROISection, ReconstructionSection,
    ReconstructionSectionHolder,
};
use crate::types::{Vector2f, Vector2i, Vector3f, Vector3i};
use crate::volume::{
    VolumeDataType, VolumeEndian, VolumeFileFormat, VolumeFileSection, VolumeSection,
    VolumeSectionHolder,
};

/// Version of the transfer file schema.
pub const SCHEMA_VERSION: &str = "3.0.0";

/// File version section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSection {
    /// Current version of the transfer file schema.
    pub version: String,
}

impl Default for VersionSection {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// Root description of a project.
///
/// Field declaration order is the emission order of the project file:
/// version first, then volumes, meshes and reconstructions. Empty holders
/// contribute no sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectDescription {
    pub version: VersionSection,
    pub volumes: VolumeSectionHolder,
    pub meshes: MeshSectionHolder,
    pub reconstructions: ReconstructionSectionHolder,
}

/// Minimal project description for a single mesh import.
pub fn mesh_project(
    mesh: &Path,
    mesh_format: MeshFormat,
    mesh_unit: MeshUnit,
    mesh_info: ComponentInfoSection,
    mesh_translation: Vector3f,
    mesh_rotation: Vector3f,
) -> ProjectDescription {
    ProjectDescription {
        meshes: MeshSectionHolder {
            meshes: vec![MeshSection {
                mesh_format,
                mesh_rotation,
                mesh_translation,
                mesh_unit,
                meta_info: Some(MeshMetaInfoContainer {
                    component_info: mesh_info,
                }),
                ..MeshSection::new(mesh)
            }],
        },
        ..ProjectDescription::default()
    }
}

/// Minimal volume project description for a slice stack.
///
/// Each slice becomes one file section of z-size 1.
pub fn volume_project_from_slices(
    slice_size: Vector2i,
    slices: &[PathBuf],
    slice_format: VolumeFileFormat,
    volume_resolution: Vector3f,
    file_data_type: VolumeDataType,
    file_data_endian: VolumeEndian,
) -> ProjectDescription {
    let slice_sections = slices
        .iter()
        .map(|slice| VolumeFileSection {
            file_format: slice_format,
            endian: file_data_endian,
            size: Vector3i(slice_size.0, slice_size.1, 1),
            data_type: file_data_type,
            ..VolumeFileSection::new(slice)
        })
        .collect();

    ProjectDescription {
        volumes: VolumeSectionHolder {
            volumes: vec![VolumeSection {
                destination_data_type: file_data_type,
                resolution: volume_resolution,
                projections: slice_sections,
                ..VolumeSection::default()
            }],
        },
        ..ProjectDescription::default()
    }
}

/// Minimal volume project description for a single block file.
pub fn volume_project_from_block(
    block_size: Vector3i,
    block: &Path,
    block_format: VolumeFileFormat,
    volume_resolution: Vector3f,
    file_data_type: VolumeDataType,
    file_data_endian: VolumeEndian,
) -> ProjectDescription {
    let block_section = VolumeFileSection {
        file_format: block_format,
        endian: file_data_endian,
        size: block_size,
        data_type: file_data_type,
        ..VolumeFileSection::new(block)
    };

    ProjectDescription {
        volumes: VolumeSectionHolder {
            volumes: vec![VolumeSection {
                destination_data_type: file_data_type,
                resolution: volume_resolution,
                projections: vec![block_section],
                ..VolumeSection::default()
            }],
        },
        ..ProjectDescription::default()
    }
}

/// Geometry and file parameters for [`reconstruction_project_from_projections`].
#[derive(Debug, Clone)]
pub struct ReconstructionProjectParams {
    /// Distance (in mm) from x-ray source to the rotation axis.
    pub distance_source_object: f64,
    /// Distance (in mm) from the rotation axis to the detector.
    pub distance_object_detector: f64,
    /// Bright calibration image.
    pub calibration_bright_file: PathBuf,
    /// Number of pixels of each projection image.
    pub projection_file_number_of_pixels: Vector2i,
    /// Physical size (in mm) of each projection image.
    pub projection_file_physical_size: Vector2f,
    /// Number of voxels of the result volume per axis.
    pub result_number_of_voxels: Vector3i,
    /// Base file name for the result volume files.
    pub reconstruction_base_filename: String,
    /// Lower boundary of the region of interest.
    pub roi_min: Vector3i,
    /// Upper boundary of the region of interest.
    pub roi_max: Vector3i,
    /// Name of the reconstructed volume in the scene.
    pub volume_name: String,
    pub projection_file_endian: ReconstructionProjectionFileEndian,
    pub projection_file_format: ReconstructionProjectionFileFormat,
    pub projection_file_data_type: ReconstructionProjectionDataType,
    pub projection_file_sorting: ReconstructionProjectionSorting,
    /// Angle (in degrees) of the first projection.
    pub angular_offset: f64,
    /// Angular range (in degrees) covered by the projections.
    pub angular_section: f64,
}

impl Default for ReconstructionProjectParams {
    fn default() -> Self {
        Self {
            distance_source_object: 0.0,
            distance_object_detector: 0.0,
            calibration_bright_file: PathBuf::new(),
            projection_file_number_of_pixels: Vector2i(0, 0),
            projection_file_physical_size: Vector2f(0.0, 0.0),
            result_number_of_voxels: Vector3i(0, 0, 0),
            reconstruction_base_filename: String::new(),
            roi_min: Vector3i(0, 0, 0),
            roi_max: Vector3i(-1, -1, -1),
            volume_name: "Reconstructed volume".to_string(),
            projection_file_endian: ReconstructionProjectionFileEndian::Little,
            projection_file_format: ReconstructionProjectionFileFormat::Raw,
            projection_file_data_type: ReconstructionProjectionDataType::UInt16,
            projection_file_sorting: ReconstructionProjectionSorting::NumbersUp,
            angular_offset: 0.0,
            angular_section: 360.0,
        }
    }
}

/// Reconstruction project built from a set of projection images.
///
/// Projections are assigned equidistant angles covering the angular
/// section, in the given order.
pub fn reconstruction_project_from_projections(
    params: ReconstructionProjectParams,
    projections: &[PathBuf],
) -> ProjectDescription {
    let angle_step = if projections.is_empty() {
        0.0
    } else {
        (params.angular_section - params.angular_offset) / projections.len() as f64
    };

    let projection_files = projections
        .iter()
        .enumerate()
        .map(|(index, file)| {
            ReconstructionProjectionFileSection::new(file, index as f64 * angle_step)
        })
        .collect();

    ProjectDescription {
        reconstructions: ReconstructionSectionHolder {
            reconstructions: vec![ReconstructionSection {
                object_name_in_scene: params.volume_name,
                distance_source_object: params.distance_source_object,
                distance_object_detector: params.distance_object_detector,
                calibration_bright_file: Some(params.calibration_bright_file),
                projection_number_of_pixels: params.projection_file_number_of_pixels,
                projection_physical_size: params.projection_file_physical_size,
                result_number_of_voxels: params.result_number_of_voxels,
                result_base_file_name: params.reconstruction_base_filename,
                projection_file_endian: params.projection_file_endian,
                projection_file_format: params.projection_file_format,
                projection_data_type: params.projection_file_data_type,
                projection_sorting: params.projection_file_sorting,
                angular_offset: params.angular_offset,
                angular_section: params.angular_section,
                region_of_interest_min: params.roi_min,
                region_of_interest_max: params.roi_max,
                projection_files,
                ..ReconstructionSection::default()
            }],
        },
        ..ProjectDescription::default()
    }
}

/// Convenience constructor for an axis-aligned reconstruction ROI.
pub fn reconstruction_roi(
    min_position: Vector3i,
    max_position: Vector3i,
    custom_name: impl Into<String>,
) -> ReconstructionROISection {
    ReconstructionROISection {
        min_position,
        max_position,
        custom_name: custom_name.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_version_matches_schema() {
        let project = ProjectDescription::default();
        assert_eq!(project.version.version, "3.0.0");
        assert!(project.volumes.volumes.is_empty());
        assert!(project.meshes.meshes.is_empty());
        assert!(project.reconstructions.reconstructions.is_empty());
    }

    #[test]
    fn slice_stack_gets_one_file_section_per_slice() {
        let slices = vec![PathBuf::from("/scan/s0.tif"), PathBuf::from("/scan/s1.tif")];
        let project = volume_project_from_slices(
            Vector2i(512, 512),
            &slices,
            VolumeFileFormat::Tiff,
            Vector3f(0.1, 0.1, 0.2),
            VolumeDataType::UInt16,
            VolumeEndian::Little,
        );
        let volume = &project.volumes.volumes[0];
        assert_eq!(volume.projections.len(), 2);
        assert_eq!(volume.projections[0].size, Vector3i(512, 512, 1));
        assert_eq!(volume.resolution, Vector3f(0.1, 0.1, 0.2));
    }

    #[test]
    fn projection_angles_are_equidistant() {
        let projections: Vec<PathBuf> = (0..4)
            .map(|index| PathBuf::from(format!("/scan/p{index}.raw")))
            .collect();
        let project = reconstruction_project_from_projections(
            ReconstructionProjectParams::default(),
            &projections,
        );
        let reco = &project.reconstructions.reconstructions[0];
        assert_eq!(reco.projection_files.len(), 4);
        let angles: Vec<f64> = reco
            .projection_files
            .iter()
            .map(|projection| projection.angle)
            .collect();
        assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn result_voxel_count_flows_into_the_section() {
        let project = reconstruction_project_from_projections(
            ReconstructionProjectParams {
                result_number_of_voxels: Vector3i(800, 800, 600),
                ..ReconstructionProjectParams::default()
            },
            &[PathBuf::from("/scan/p0.raw")],
        );
        let reco = &project.reconstructions.reconstructions[0];
        assert_eq!(reco.result_number_of_voxels, Vector3i(800, 800, 600));
    }

    #[test]
    fn empty_projection_list_builds_empty_reconstruction() {
        let project = reconstruction_project_from_projections(
            ReconstructionProjectParams::default(),
            &[],
        );
        let reco = &project.reconstructions.reconstructions[0];
        assert!(reco.projection_files.is_empty());
    }
}
