//! Typed project descriptions for CT data imports.
//!
//! This crate models everything a project file can describe: volumes
//! assembled from slice stacks or block files, surface meshes, and
//! CT reconstructions with their full scan geometry. The records here are
//! plain data; writing them out as an XVGI project file is the job of the
//! `vgproj-xvgi` crate.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use vgproj_model::{
//!     Vector2i, Vector3f, VolumeDataType, VolumeEndian, VolumeFileFormat,
//!     volume_project_from_slices,
//! };
//!
//! let slices = vec![
//!     PathBuf::from("/scan/slice0.tif"),
//!     PathBuf::from("/scan/slice1.tif"),
//! ];
//! let project = volume_project_from_slices(
//!     Vector2i(1024, 1024),
//!     &slices,
//!     VolumeFileFormat::Tiff,
//!     Vector3f(0.05, 0.05, 0.05),
//!     VolumeDataType::UInt16,
//!     VolumeEndian::Little,
//! );
//! assert_eq!(project.volumes.volumes[0].projections.len(), 2);
//! ```

pub mod mesh;
pub mod meta;
pub mod project;
pub mod reconstruction;
pub mod types;
pub mod volume;

pub use mesh::{MeshFormat, MeshSection, MeshSectionHolder, MeshUnit};
pub use meta::{
    ComponentInfoSection, ManufacturerInfoSection, MeshMetaInfoContainer, Metadata,
    ScanInfoSection, VolumeMetaInfoContainer,
};
pub use project::{
    ProjectDescription, ReconstructionProjectParams, SCHEMA_VERSION, VersionSection,
    mesh_project, reconstruction_project_from_projections, reconstruction_roi,
    volume_project_from_block, volume_project_from_slices,
};
pub use reconstruction::{
    ReconstructionProjectionDataType, ReconstructionProjectionFileEndian,
    ReconstructionProjectionFileFormat, ReconstructionProjectionFileSection,
    ReconstructionProjectionSorting, ReconstructionROISection, ReconstructionSection,
    ReconstructionSectionHolder,
};
pub use types::{SectionEnum, Vector2f, Vector2i, Vector3f, Vector3i, Vectorf};
pub use volume::{
    VolumeDataType, VolumeEndian, VolumeFileFormat, VolumeFileSection, VolumeSection,
    VolumeSectionHolder,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_section_round_trips_through_json() {
        let volume = VolumeSection {
            object_name_in_scene: "Engine".to_string(),
            projections: vec![VolumeFileSection::new("/scan/block.raw")],
            ..VolumeSection::default()
        };
        let json = serde_json::to_string(&volume).expect("serialize volume");
        let round: VolumeSection = serde_json::from_str(&json).expect("deserialize volume");
        assert_eq!(round, volume);
    }

    #[test]
    fn projection_vocabulary_is_reachable_from_the_crate_root() {
        // These four are what callers configuring a reconstruction from
        // the outside need alongside the section types themselves.
        assert_eq!(
            ReconstructionProjectionDataType::UInt16.member_name(),
            "UInt16"
        );
        assert_eq!(
            ReconstructionProjectionFileEndian::Little.member_name(),
            "Little"
        );
        assert_eq!(ReconstructionProjectionFileFormat::Raw.member_name(), "Raw");
        assert_eq!(
            ReconstructionProjectionSorting::NumbersUp.member_name(),
            "NumbersUp"
        );
    }

    #[test]
    fn reconstruction_defaults_match_host_expectations() {
        let reco = ReconstructionSection::default();
        assert_eq!(reco.horizontal_detector_offset_position, 0.5);
        assert_eq!(reco.projection_read_timeout, 7200.0);
        assert_eq!(reco.projection_completion_timeout, 30.0);
        assert_eq!(reco.art_number_of_iterations, 1);
        assert!(reco.clamp_high_value.is_infinite());
        assert_eq!(reco.region_of_interest_max, Vector3i(-1, -1, -1));
    }
}
