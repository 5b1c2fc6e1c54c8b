//! Reconstruction section serializer.

use vgproj_model::{
    ReconstructionProjectionFileSection, ReconstructionROISection, ReconstructionSection,
    ReconstructionSectionHolder,
};

use crate::section::{self, Field};
use crate::sections::meta::{
    serialize_component_info, serialize_manufacturer_info, serialize_scan_info,
};
use crate::value::FieldValue;

fn reconstruction_fields(reconstruction: &ReconstructionSection) -> Vec<Field<'static>> {
    vec![
        (
            "ObjectNameInScene",
            FieldValue::from(&reconstruction.object_name_in_scene),
        ),
        ("VolumeRotation", FieldValue::from(reconstruction.rotation)),
        (
            "VolumeTranslation",
            FieldValue::from(reconstruction.translation),
        ),
        (
            "ReconstructionGeneralSystemGeometryMode",
            FieldValue::enumeration(&reconstruction.general_system_geometry_mode),
        ),
        (
            "ReconstructionAlgorithmicOptimizationMode",
            FieldValue::enumeration(&reconstruction.algorithmic_optimization_mode),
        ),
        (
            "ReconstructionTableFeed360Deg",
            FieldValue::from(reconstruction.table_feed_360_deg),
        ),
        (
            "ReconstructionLiftingAxisTiltCorrection",
            FieldValue::from(reconstruction.lifting_axis_tilt_correction),
        ),
        (
            "ReconstructionLineZPositionList",
            FieldValue::from(&reconstruction.line_z_position_list),
        ),
        (
            "ReconstructionLaminographyAngle",
            FieldValue::from(reconstruction.laminography_angle),
        ),
        (
            "ReconstructionGeometricSetup",
            FieldValue::enumeration(&reconstruction.geometric_setup),
        ),
        (
            "ReconstructionRotationDirection",
            FieldValue::enumeration(&reconstruction.rotation_direction),
        ),
        (
            "ReconstructionPreprocessingMode",
            FieldValue::enumeration(&reconstruction.preprocessing_mode),
        ),
        (
            "ReconstructionProjectionSorting",
            FieldValue::enumeration(&reconstruction.projection_sorting),
        ),
        (
            "ReconstructionProjectionDataType",
            FieldValue::enumeration(&reconstruction.projection_data_type),
        ),
        (
            "ReconstructionProjectionOrientation",
            FieldValue::enumeration(&reconstruction.projection_orientation),
        ),
        (
            "ReconstructionProjectionFileFormat",
            FieldValue::enumeration(&reconstruction.projection_file_format),
        ),
        (
            "ReconstructionProjectionFileEndian",
            FieldValue::enumeration(&reconstruction.projection_file_endian),
        ),
        (
            "ReconstructionProjectionHeaderSkip",
            FieldValue::from(reconstruction.projection_header_skip),
        ),
        (
            "ReconstructionProjectionMirrorAxisY",
            FieldValue::from(reconstruction.projection_mirror_axis_y),
        ),
        (
            "ReconstructionProjectionMirrorAxisZ",
            FieldValue::from(reconstruction.projection_mirror_axis_z),
        ),
        (
            "ReconstructionProjectionMirrorBrightness",
            FieldValue::from(reconstruction.projection_mirror_brightness),
        ),
        (
            "ReconstructionIgnoreBorderPixels",
            FieldValue::from(reconstruction.ignore_border_pixels),
        ),
        (
            "ReconstructionProjectionSmoothingMode",
            FieldValue::enumeration(&reconstruction.projection_smoothing_mode),
        ),
        (
            "ReconstructionCalibrationMode",
            FieldValue::enumeration(&reconstruction.calibration_mode),
        ),
        (
            "ReconstructionCalibrationBrightFile",
            FieldValue::optional_path(reconstruction.calibration_bright_file.as_ref()),
        ),
        (
            "ReconstructionCalibrationDarkFile",
            FieldValue::optional_path(reconstruction.calibration_dark_file.as_ref()),
        ),
        (
            "ReconstructionCalibrationFilterMode",
            FieldValue::enumeration(&reconstruction.calibration_filter_mode),
        ),
        (
            "ReconstructionResultNumberOfVoxels",
            FieldValue::from(reconstruction.result_number_of_voxels),
        ),
        (
            "ReconstructionProjectionNumberOfPixels",
            FieldValue::from(reconstruction.projection_number_of_pixels),
        ),
        (
            "ReconstructionProjectionPhysicalSize",
            FieldValue::from(reconstruction.projection_physical_size),
        ),
        (
            "ReconstructionDistanceSourceObject",
            FieldValue::from(reconstruction.distance_source_object),
        ),
        (
            "ReconstructionDistanceObjectDetector",
            FieldValue::from(reconstruction.distance_object_detector),
        ),
        (
            "ReconstructionHorizontalDetectorOffsetPosition",
            FieldValue::from(reconstruction.horizontal_detector_offset_position),
        ),
        (
            "ReconstructionMisalignmentCorrectionMode",
            FieldValue::enumeration(&reconstruction.misalignment_correction_mode),
        ),
        (
            "ReconstructionMisalignmentOptimizationMode",
            FieldValue::enumeration(&reconstruction.misalignment_optimization_mode),
        ),
        (
            "ReconstructionMisalignmentSkipMode",
            FieldValue::enumeration(&reconstruction.misalignment_skip_mode),
        ),
        (
            "ReconstructionMisalignmentSkip",
            FieldValue::from(reconstruction.misalignment_skip),
        ),
        (
            "ReconstructionHorizontalDetectorOffset",
            FieldValue::from(reconstruction.horizontal_detector_offset),
        ),
        (
            "ReconstructionHorizontalRotationAxisOffset",
            FieldValue::from(reconstruction.horizontal_rotation_axis_offset),
        ),
        (
            "ReconstructionRotationAxisTiltXZCorrection",
            FieldValue::from(reconstruction.rotation_axis_tilt_xz_correction),
        ),
        (
            "ReconstructionRotationAxisTiltXZCorrectionPosition",
            FieldValue::from(reconstruction.rotation_axis_tilt_xz_correction_position),
        ),
        (
            "ReconstructionVerticalDetectorOffset",
            FieldValue::from(reconstruction.vertical_detector_offset),
        ),
        (
            "ReconstructionAngularOffset",
            FieldValue::from(reconstruction.angular_offset),
        ),
        (
            "ReconstructionAngularSection",
            FieldValue::from(reconstruction.angular_section),
        ),
        (
            "ReconstructionAngularDifferenceCorrection",
            FieldValue::from(reconstruction.angular_difference_correction),
        ),
        (
            "ReconstructionInterpolationMode",
            FieldValue::enumeration(&reconstruction.interpolation_mode),
        ),
        (
            "ReconstructionFilterMode",
            FieldValue::enumeration(&reconstruction.filter_mode),
        ),
        (
            "ReconstructionSpeckleRemovalMode",
            FieldValue::enumeration(&reconstruction.speckle_removal_mode),
        ),
        (
            "ReconstructionCalculationMode",
            FieldValue::enumeration(&reconstruction.calculation_mode),
        ),
        (
            "ReconstructionBeamHardeningCorrectionMode",
            FieldValue::enumeration(&reconstruction.beam_hardening_correction_mode),
        ),
        (
            "ReconstructionBeamHardeningCorrectionPreset",
            FieldValue::from(&reconstruction.beam_hardening_correction_preset),
        ),
        (
            "ReconstructionBeamHardeningCorrectionPresetMode",
            FieldValue::enumeration(&reconstruction.beam_hardening_correction_preset_mode),
        ),
        (
            "ReconstructionBeamHardeningCorrectionPresetValueRange",
            FieldValue::from(reconstruction.beam_hardening_correction_preset_value_range),
        ),
        (
            "ReconstructionProjectionReadTimeout",
            FieldValue::from(reconstruction.projection_read_timeout),
        ),
        (
            "ReconstructionProjectionCompletionTimeout",
            FieldValue::from(reconstruction.projection_completion_timeout),
        ),
        (
            "ReconstructionMultipleROIPositioningMode",
            FieldValue::enumeration(&reconstruction.multiple_roi_positioning_mode),
        ),
        (
            "ReconstructionRegionOfInterestMin",
            FieldValue::from(reconstruction.region_of_interest_min),
        ),
        (
            "ReconstructionRegionOfInterestMax",
            FieldValue::from(reconstruction.region_of_interest_max),
        ),
        (
            "ReconstructionAutoRegionOfInterestMode",
            FieldValue::from(reconstruction.auto_region_of_interest_mode),
        ),
        (
            "ReconstructionProjectionSkip",
            FieldValue::from(reconstruction.projection_skip),
        ),
        (
            "ReconstructionProjectionSkipAngle",
            FieldValue::from(reconstruction.projection_skip_angle),
        ),
        ("ReconstructionSkip", FieldValue::from(reconstruction.voxel_skip)),
        (
            "ReconstructionClampLowMode",
            FieldValue::from(reconstruction.clamp_low_mode),
        ),
        (
            "ReconstructionClampLowType",
            FieldValue::enumeration(&reconstruction.clamp_low_type),
        ),
        (
            "ReconstructionClampLowValue",
            FieldValue::from(reconstruction.clamp_low_value),
        ),
        (
            "ReconstructionClampHighMode",
            FieldValue::from(reconstruction.clamp_high_mode),
        ),
        (
            "ReconstructionClampHighType",
            FieldValue::enumeration(&reconstruction.clamp_high_type),
        ),
        (
            "ReconstructionClampHighValue",
            FieldValue::from(reconstruction.clamp_high_value),
        ),
        (
            "ReconstructionResultDataType",
            FieldValue::enumeration(&reconstruction.result_data_type),
        ),
        (
            "ReconstructionResultBaseFileName",
            FieldValue::from(&reconstruction.result_base_file_name),
        ),
        (
            "ReconstructionResultFileSuffix",
            FieldValue::from(&reconstruction.result_file_suffix),
        ),
        (
            "ReconstructionResultImportMode",
            FieldValue::enumeration(&reconstruction.result_import_mode),
        ),
        (
            "ReconstructionManualResultVolumeSpecificationMode",
            FieldValue::from(reconstruction.manual_result_volume_specification_mode),
        ),
        (
            "ReconstructionResultPhysicalSize",
            FieldValue::from(reconstruction.result_physical_size),
        ),
        (
            "ReconstructionResultOffset",
            FieldValue::from(reconstruction.result_offset),
        ),
        (
            "ReconstructionIntensityCorrectionBias",
            FieldValue::from(reconstruction.intensity_correction_bias),
        ),
        (
            "ReconstructionMetalArtifactReductionMode",
            FieldValue::enumeration(&reconstruction.metal_artifact_reduction_mode),
        ),
        (
            "ReconstructionMetalArtifactReductionThresholdMode",
            FieldValue::enumeration(&reconstruction.metal_artifact_reduction_threshold_mode),
        ),
        (
            "ReconstructionMetalArtifactReductionThreshold",
            FieldValue::from(reconstruction.metal_artifact_reduction_threshold),
        ),
        (
            "ReconstructionMetalArtifactReductionStrength",
            FieldValue::from(reconstruction.metal_artifact_reduction_strength),
        ),
        (
            "ReconstructionAlgorithmMode",
            FieldValue::enumeration(&reconstruction.algorithm_mode),
        ),
        (
            "ReconstructionArtNumberOfIterations",
            FieldValue::from(reconstruction.art_number_of_iterations),
        ),
        (
            "ReconstructionArtRelaxationFactor",
            FieldValue::from(reconstruction.art_relaxation_factor),
        ),
        (
            "ReconstructionRadiationIntensityCompensationMode",
            FieldValue::enumeration(&reconstruction.radiation_intensity_compensation_mode),
        ),
        (
            "ReconstructionRadiationIntensityCompensationFixedValueI0",
            FieldValue::from(reconstruction.radiation_intensity_compensation_fixed_value_i0),
        ),
        (
            "ReconstructionRingArtifactReductionMode",
            FieldValue::enumeration(&reconstruction.ring_artifact_reduction_mode),
        ),
        (
            "ReconstructionFieldOfViewExtensionMode",
            FieldValue::enumeration(&reconstruction.field_of_view_extension_mode),
        ),
        (
            "ReconstructionFieldOfViewExtensionShift",
            FieldValue::from(reconstruction.field_of_view_extension_shift),
        ),
        (
            "ReconstructionEnsureIsotropicVoxelSize",
            FieldValue::from(reconstruction.ensure_isotropic_voxel_size),
        ),
        (
            "ReconstructionAutomaticAdaptiveDetectorBinning",
            FieldValue::from(reconstruction.automatic_adaptive_detector_binning),
        ),
    ]
}

fn roi_fields(roi: &ReconstructionROISection) -> Vec<Field<'static>> {
    vec![
        (
            "ReconstructionRegionOfInterestListMinPosition",
            FieldValue::from(roi.min_position),
        ),
        (
            "ReconstructionRegionOfInterestListMaxPosition",
            FieldValue::from(roi.max_position),
        ),
        (
            "ReconstructionRegionOfInterestListCustomName",
            FieldValue::from(&roi.custom_name),
        ),
    ]
}

fn projection_file_fields(file: &ReconstructionProjectionFileSection) -> Vec<Field<'static>> {
    vec![
        (
            "ReconstructionProjectionInfoFileName",
            FieldValue::from(&file.file_name),
        ),
        (
            "ReconstructionProjectionInfoValue",
            FieldValue::from(file.angle),
        ),
        (
            "ReconstructionProjectionInfoOption",
            FieldValue::from(file.ignored),
        ),
    ]
}

/// Serializes one reconstruction under the given section name: the flat
/// fields, a `<name>_AxisAlignedRoiListSection_<i>` per ROI, a
/// `<name>_ProjectionFilesSection_<i>` per projection image, and the three
/// meta-info sections.
pub fn serialize_reconstruction(name: &str, reconstruction: &ReconstructionSection) -> String {
    let mut out = section::serialize(name, &reconstruction_fields(reconstruction));

    for (index, roi) in reconstruction.axis_aligned_rois.iter().enumerate() {
        let roi_section_name = format!("{name}_AxisAlignedRoiListSection_{index}");
        out.push_str(&section::serialize(&roi_section_name, &roi_fields(roi)));
    }

    for (index, file) in reconstruction.projection_files.iter().enumerate() {
        let projection_section_name = format!("{name}_ProjectionFilesSection_{index}");
        out.push_str(&section::serialize(
            &projection_section_name,
            &projection_file_fields(file),
        ));
    }

    out.push_str(&serialize_manufacturer_info(
        &format!("{name}_ManufacturerInfoSection"),
        &reconstruction.meta_info.manufacturer_info,
    ));
    out.push_str(&serialize_scan_info(
        &format!("{name}_ScanInfoSection"),
        &reconstruction.meta_info.scan_info,
    ));
    out.push_str(&serialize_component_info(
        &format!("{name}_ComponentInfoSection"),
        &reconstruction.meta_info.component_info,
    ));

    out
}

/// Serializes every reconstruction of the holder, naming sections
/// `ReconstructionSection<start_index>`, `ReconstructionSection<start_index + 1>`, ….
pub fn serialize_reconstruction_holder(
    holder: &ReconstructionSectionHolder,
    start_index: usize,
) -> String {
    let mut out = String::new();
    for (offset, reconstruction) in holder.reconstructions.iter().enumerate() {
        let name = format!("ReconstructionSection{}", start_index + offset);
        out.push_str(&serialize_reconstruction(&name, reconstruction));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vgproj_model::Vector3i;

    #[test]
    fn rois_and_projections_become_numbered_child_sections() {
        let reconstruction = ReconstructionSection {
            axis_aligned_rois: vec![
                ReconstructionROISection {
                    min_position: Vector3i(0, 0, 0),
                    max_position: Vector3i(9, 9, 9),
                    custom_name: "core".to_string(),
                },
                ReconstructionROISection::default(),
            ],
            projection_files: vec![
                ReconstructionProjectionFileSection::new("/scan/p0.raw", 0.0),
                ReconstructionProjectionFileSection::new("/scan/p1.raw", 0.9),
            ],
            ..ReconstructionSection::default()
        };
        let serialized = serialize_reconstruction("ReconstructionSection0", &reconstruction);
        let roi0 = serialized
            .find("[ReconstructionSection0\\_AxisAlignedRoiListSection\\_0]")
            .expect("roi 0");
        let roi1 = serialized
            .find("[ReconstructionSection0\\_AxisAlignedRoiListSection\\_1]")
            .expect("roi 1");
        let projection0 = serialized
            .find("[ReconstructionSection0\\_ProjectionFilesSection\\_0]")
            .expect("projection 0");
        let projection1 = serialized
            .find("[ReconstructionSection0\\_ProjectionFilesSection\\_1]")
            .expect("projection 1");
        assert!(roi0 < roi1 && roi1 < projection0 && projection0 < projection1);
        assert!(serialized.contains(
            "\tReconstructionRegionOfInterestListMaxPosition = 9  9  9\n"
        ));
        assert!(serialized.contains("\tReconstructionProjectionInfoFileName = /scan/p1.raw\n"));
        assert!(serialized.contains("\tReconstructionProjectionInfoValue = 0.9\n"));
        assert!(serialized.contains("\tReconstructionProjectionInfoOption = False\n"));
    }

    #[test]
    fn meta_info_sections_come_last() {
        let serialized =
            serialize_reconstruction("ReconstructionSection0", &ReconstructionSection::default());
        let manufacturer = serialized
            .find("[ReconstructionSection0\\_ManufacturerInfoSection]")
            .expect("manufacturer");
        let scan = serialized
            .find("[ReconstructionSection0\\_ScanInfoSection]")
            .expect("scan");
        let component = serialized
            .find("[ReconstructionSection0\\_ComponentInfoSection]")
            .expect("component");
        assert!(manufacturer < scan && scan < component);
    }

    #[test]
    fn missing_calibration_files_render_empty() {
        let serialized =
            serialize_reconstruction("ReconstructionSection0", &ReconstructionSection::default());
        assert!(serialized.contains("\tReconstructionCalibrationBrightFile = \n"));
        assert!(serialized.contains("\tReconstructionCalibrationDarkFile = \n"));
    }

    #[test]
    fn calibration_files_render_in_forward_slash_form() {
        let reconstruction = ReconstructionSection {
            calibration_bright_file: Some(PathBuf::from("C:\\scan\\bright.tif")),
            ..ReconstructionSection::default()
        };
        let serialized = serialize_reconstruction("ReconstructionSection0", &reconstruction);
        assert!(serialized.contains("\tReconstructionCalibrationBrightFile = C:/scan/bright.tif\n"));
    }

    #[test]
    fn defaults_render_expected_values() {
        let serialized =
            serialize_reconstruction("ReconstructionSection0", &ReconstructionSection::default());
        assert!(serialized.contains(
            "\tReconstructionGeneralSystemGeometryMode = ReconstructionGeneralSystemGeometryMode_ConeBeamCT\n"
        ));
        assert!(serialized.contains("\tReconstructionCalibrationMode = ReconstructionCalibrationMode_No\n"));
        assert!(serialized.contains("\tReconstructionHorizontalDetectorOffsetPosition = 0.5\n"));
        assert!(serialized.contains("\tReconstructionProjectionReadTimeout = 7200\n"));
        assert!(serialized.contains("\tReconstructionClampHighValue = inf\n"));
        assert!(serialized.contains(
            "\tReconstructionCalculationMode = ReconstructionCalculationMode_OpenCL\n"
        ));
        assert!(serialized.contains(
            "\tReconstructionMetalArtifactReductionMode = ReconstructionMetalArtifactReductionMode_Off\n"
        ));
    }

    #[test]
    fn nested_containers_never_appear_as_fields() {
        let serialized =
            serialize_reconstruction("ReconstructionSection0", &ReconstructionSection::default());
        assert!(!serialized.contains("\tVolumeMetaInfo"));
        assert!(!serialized.contains("\tAxisAlignedRois"));
        assert!(!serialized.contains("\tProjectionFiles"));
    }

    #[test]
    fn empty_holder_produces_no_output() {
        assert_eq!(
            serialize_reconstruction_holder(&ReconstructionSectionHolder::default(), 0),
            ""
        );
    }
}
