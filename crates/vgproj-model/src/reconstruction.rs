//! Reconstruction descriptors.
//!
//! A [`ReconstructionSection`] completely defines a scan setup and the
//! reconstruction process to be carried out by the host application. The
//! Z-axis is the vertical axis (upwards direction of the ideal rotation
//! axis), the X-axis runs from x-ray source to detector, and the Y-axis is
//! the horizontal detector axis.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::meta::VolumeMetaInfoContainer;
use crate::types::{Vector2f, Vector2i, Vector3f, Vector3i, Vectorf, section_enum};

section_enum! {
    /// Overall geometry of the scan system.
    pub enum ReconstructionGeneralSystemGeometryMode {
        /// Cone beam CT with a flat area detector.
        ConeBeamCT,
        /// Fan beam CT with a line detector.
        FanBeamCT,
        /// Parallel beam CT, e.g. synchrotron.
        ParallelBeamCT,
        /// Planar CT for flat objects.
        PlanarCT,
        /// Helix CT with continuous vertical object movement.
        HelixCT,
    }
}

section_enum! {
    /// Trade-off between reconstruction quality and speed.
    pub enum ReconstructionAlgorithmicOptimizationMode {
        Quality,
        Performance,
    }
}

section_enum! {
    /// Geometric handling of tilted detector setups.
    pub enum ReconstructionGeometricSetup {
        RotateFrustum,
        PerspectiveWarp,
        AdvancedPlanarCT,
    }
}

section_enum! {
    /// Rotation direction of the turntable, seen from above.
    pub enum ReconstructionRotationDirection {
        CounterClockwise,
        Clockwise,
    }
}

section_enum! {
    /// Preprocessing applied to the projection images.
    pub enum ReconstructionPreprocessingMode {
        Off,
        /// Apply the convolution filter only.
        Filter,
        /// Calibrate with bright/dark images and apply the filter.
        CalibrateAndFilter,
    }
}

section_enum! {
    /// Order in which projection files are consumed.
    pub enum ReconstructionProjectionSorting {
        /// Sort by the number embedded in the file name, ascending.
        NumbersUp,
        /// Keep the given order.
        Off,
        AlphabeticUp,
        CanonicUp,
        ReverseUp,
    }
}

section_enum! {
    /// Pixel data type of the projection images.
    pub enum ReconstructionProjectionDataType {
        UInt16,
        Int16,
        UInt32,
        Int32,
        Float,
        Float16,
        Float20,
    }
}

section_enum! {
    /// Orientation of the projection images on the detector.
    pub enum ReconstructionProjectionOrientation {
        YZ,
        ZY,
    }
}

section_enum! {
    /// File format of the projection images.
    pub enum ReconstructionProjectionFileFormat {
        Raw,
        Gzip,
        Tiff,
        Jpeg,
        Bmp,
        Jpeg2,
        Imtec,
    }
}

section_enum! {
    /// Byte order of the projection pixel values.
    pub enum ReconstructionProjectionFileEndian {
        /// Least significant byte first.
        Little,
        /// Most significant byte first.
        Big,
    }
}

section_enum! {
    /// Smoothing applied to the projection images.
    pub enum ReconstructionProjectionSmoothingMode {
        Off,
        Low,
        Medium,
        High,
    }
}

section_enum! {
    /// Bright/dark image calibration of the projections.
    pub enum ReconstructionCalibrationMode {
        /// No calibration. Serialized member name is `No`; the host keys
        /// this off the member name, not a display string.
        No,
        /// Calibrate with both bright and dark images.
        All,
        OnlyBright,
    }
}

section_enum! {
    /// Filtering of the calibration images.
    pub enum ReconstructionCalibrationFilterMode {
        Off,
        Low,
        Medium,
        High,
    }
}

section_enum! {
    /// Automatic detector misalignment correction.
    pub enum ReconstructionMisalignmentCorrectionMode {
        Off,
        HorizontalDetectorOffset,
        RotationAxisTiltXZ,
        All,
    }
}

section_enum! {
    /// Projection range used by the misalignment optimization.
    pub enum ReconstructionMisalignmentOptimizationMode {
        /// Use projections from the full 360 degree scan.
        FullScan,
        /// Use projections from a short scan segment.
        ShortScan,
    }
}

section_enum! {
    /// Projection subsampling during misalignment optimization.
    pub enum ReconstructionMisalignmentSkipMode {
        Auto,
        Off,
        On,
    }
}

section_enum! {
    /// Interpolation used when sampling the projections.
    pub enum ReconstructionInterpolationMode {
        Linear,
        Nearest,
    }
}

section_enum! {
    /// Convolution filter applied before back projection.
    pub enum ReconstructionFilterMode {
        SheppLogan,
        Ramp,
    }
}

section_enum! {
    /// Removal of defective pixel speckles from the projections.
    pub enum ReconstructionSpeckleRemovalMode {
        Off,
        MultiPixel,
        SinglePixel,
    }
}

section_enum! {
    /// Compute device used for the reconstruction.
    pub enum ReconstructionCalculationMode {
        CPU,
        GPU,
        OpenCL,
    }
}

section_enum! {
    /// Beam hardening correction of the projection data.
    pub enum ReconstructionBeamHardeningCorrectionMode {
        Off,
        Preset,
    }
}

section_enum! {
    /// How the beam hardening correction preset is applied.
    pub enum ReconstructionBeamHardeningCorrectionPresetMode {
        Static,
        Dynamic,
        Explicit,
        Automatic,
    }
}

section_enum! {
    /// Placement of result volumes built from multiple ROIs.
    pub enum ReconstructionMultipleROIPositioningMode {
        /// Keep each ROI volume at its position within the scanned object.
        KeepOrientation,
        /// Move each ROI volume to the scene center.
        MoveToCenter,
    }
}

section_enum! {
    /// Interpretation of a grey value clamp boundary.
    pub enum ReconstructionClampType {
        AbsoluteClamping,
        PercentalClamping,
    }
}

section_enum! {
    /// Data type of the reconstructed result volume.
    pub enum ReconstructionResultDataType {
        UInt8,
        UInt12,
        UInt16,
        Float,
    }
}

section_enum! {
    /// Handling of the reconstructed result volume.
    pub enum ReconstructionResultImportMode {
        /// Write the result to disk and import it into the scene.
        WriteToDiskAndImport,
        /// Reference the result files without copying the data.
        DirectReference,
        /// Only write the result to disk.
        WriteToDiskOnly,
    }
}

section_enum! {
    /// Metal artifact reduction applied during reconstruction.
    ///
    /// The `sMARt` member name is spelled exactly as the host expects it.
    #[allow(non_camel_case_types)]
    pub enum ReconstructionMetalArtifactReductionMode {
        Off,
        MAR,
        sMARt,
    }
}

section_enum! {
    /// Interpretation of the metal artifact reduction threshold.
    pub enum ReconstructionMetalArtifactReductionThresholdMode {
        Relative,
        Absolute,
    }
}

section_enum! {
    /// Reconstruction algorithm.
    pub enum ReconstructionAlgorithmMode {
        /// Filtered back projection.
        FBP,
        /// Algebraic reconstruction technique.
        ART,
    }
}

section_enum! {
    /// Compensation of radiation intensity fluctuations between projections.
    pub enum ReconstructionRadiationIntensityCompensationMode {
        Off,
        ProjectionMax,
        ProjectionPeak,
        FixedValueI0,
    }
}

section_enum! {
    /// Ring artifact reduction strength.
    pub enum ReconstructionRingArtifactReductionMode {
        Off,
        Low,
        Medium,
        High,
    }
}

section_enum! {
    /// Field of view extension for objects larger than the detector.
    pub enum ReconstructionFieldOfViewExtensionMode {
        /// No extension. Serialized member name is `No`.
        No,
        Detector,
        Object,
    }
}

/// Extent of an axis-aligned bounding box given as two voxel positions.
///
/// The upper boundary must not be smaller than the lower boundary. The
/// optional custom name is used when naming the resulting volume in the
/// scene.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReconstructionROISection {
    /// Lower boundary of the bounding box.
    pub min_position: Vector3i,
    /// Upper boundary of the bounding box.
    pub max_position: Vector3i,
    /// Name for the region described by the bounding box.
    pub custom_name: String,
}

/// One projection image together with its rotation angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionProjectionFileSection {
    /// Absolute file path of the projection image.
    pub file_name: PathBuf,
    /// Correlated angle of the projection, in radian or degree.
    pub angle: f64,
    /// Whether to ignore this projection.
    pub ignored: bool,
}

impl ReconstructionProjectionFileSection {
    pub fn new(file_name: impl Into<PathBuf>, angle: f64) -> Self {
        Self {
            file_name: file_name.into(),
            angle,
            ignored: false,
        }
    }
}

/// Descriptor to completely define a scan setup and reconstruction process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionSection {
    /// Name of the reconstructed volume in the scene.
    pub object_name_in_scene: String,
    /// Meta information attached to the reconstructed volume.
    pub meta_info: VolumeMetaInfoContainer,
    /// Rotation of the result volume in the scene as euler angles.
    pub rotation: Vector3f,
    /// Translation applied to the result volume origin in the scene.
    pub translation: Vector3f,
    /// Overall geometry of the scan system.
    pub general_system_geometry_mode: ReconstructionGeneralSystemGeometryMode,
    /// Trade-off between reconstruction quality and speed.
    pub algorithmic_optimization_mode: ReconstructionAlgorithmicOptimizationMode,
    /// Table feed (in mm) per 360 degree scan range, for helix CT. May be
    /// positive or negative.
    pub table_feed_360_deg: f64,
    /// Tilt correction (in degrees) of the lifting axis for helix CT.
    pub lifting_axis_tilt_correction: f64,
    /// Vertical detector line positions for fan beam CT.
    pub line_z_position_list: Vectorf,
    /// Laminography angle (in degrees) for planar CT.
    pub laminography_angle: f64,
    /// Geometric handling of tilted detector setups.
    pub geometric_setup: ReconstructionGeometricSetup,
    /// Rotation direction of the turntable.
    pub rotation_direction: ReconstructionRotationDirection,
    /// Preprocessing applied to the projection images.
    pub preprocessing_mode: ReconstructionPreprocessingMode,
    /// Order in which projection files are consumed.
    pub projection_sorting: ReconstructionProjectionSorting,
    /// Pixel data type of the projection images.
    pub projection_data_type: ReconstructionProjectionDataType,
    /// Orientation of the projection images on the detector.
    pub projection_orientation: ReconstructionProjectionOrientation,
    /// File format of the projection images.
    pub projection_file_format: ReconstructionProjectionFileFormat,
    /// Byte order of the projection pixel values.
    pub projection_file_endian: ReconstructionProjectionFileEndian,
    /// Number of header bytes to skip in each projection file.
    pub projection_header_skip: i64,
    /// Mirror the projections along the horizontal detector axis.
    pub projection_mirror_axis_y: bool,
    /// Mirror the projections along the vertical detector axis.
    pub projection_mirror_axis_z: bool,
    /// Invert the projection brightness.
    pub projection_mirror_brightness: bool,
    /// Number of detector border pixels to ignore.
    pub ignore_border_pixels: i64,
    /// Smoothing applied to the projection images.
    pub projection_smoothing_mode: ReconstructionProjectionSmoothingMode,
    /// Bright/dark image calibration of the projections.
    pub calibration_mode: ReconstructionCalibrationMode,
    /// Bright calibration image, required unless calibration is off.
    pub calibration_bright_file: Option<PathBuf>,
    /// Dark calibration image, required for full calibration.
    pub calibration_dark_file: Option<PathBuf>,
    /// Filtering of the calibration images.
    pub calibration_filter_mode: ReconstructionCalibrationFilterMode,
    /// Number of voxels of the result volume per axis.
    pub result_number_of_voxels: Vector3i,
    /// Number of pixels of each projection image.
    pub projection_number_of_pixels: Vector2i,
    /// Physical size (in mm) of the detector area covered by a projection.
    pub projection_physical_size: Vector2f,
    /// Distance (in mm) from x-ray source to the rotation axis.
    pub distance_source_object: f64,
    /// Distance (in mm) from the rotation axis to the detector.
    pub distance_object_detector: f64,
    /// Relative horizontal position of the rotation axis image on the
    /// detector; 0.5 is centered.
    pub horizontal_detector_offset_position: f64,
    /// Automatic detector misalignment correction.
    pub misalignment_correction_mode: ReconstructionMisalignmentCorrectionMode,
    /// Projection range used by the misalignment optimization.
    pub misalignment_optimization_mode: ReconstructionMisalignmentOptimizationMode,
    /// Projection subsampling during misalignment optimization.
    pub misalignment_skip_mode: ReconstructionMisalignmentSkipMode,
    /// Number of projections to skip during misalignment optimization.
    pub misalignment_skip: i64,
    /// Horizontal detector offset (in mm).
    pub horizontal_detector_offset: f64,
    /// Horizontal rotation axis offset (in mm).
    pub horizontal_rotation_axis_offset: f64,
    /// Tilt (in degrees) of the rotation axis within the XZ plane.
    pub rotation_axis_tilt_xz_correction: f64,
    /// Detector position at which the XZ tilt was measured.
    pub rotation_axis_tilt_xz_correction_position: Vector2f,
    /// Vertical detector offset (in mm).
    pub vertical_detector_offset: f64,
    /// Angle (in degrees) of the first projection.
    pub angular_offset: f64,
    /// Angular range (in degrees) covered by the projections.
    pub angular_section: f64,
    /// Correction (in degrees) applied to the angle between projections.
    pub angular_difference_correction: f64,
    /// Interpolation used when sampling the projections.
    pub interpolation_mode: ReconstructionInterpolationMode,
    /// Convolution filter applied before back projection.
    pub filter_mode: ReconstructionFilterMode,
    /// Removal of defective pixel speckles from the projections.
    pub speckle_removal_mode: ReconstructionSpeckleRemovalMode,
    /// Compute device used for the reconstruction.
    pub calculation_mode: ReconstructionCalculationMode,
    /// Beam hardening correction of the projection data.
    pub beam_hardening_correction_mode: ReconstructionBeamHardeningCorrectionMode,
    /// Name of the beam hardening correction preset.
    pub beam_hardening_correction_preset: String,
    /// How the beam hardening correction preset is applied.
    pub beam_hardening_correction_preset_mode: ReconstructionBeamHardeningCorrectionPresetMode,
    /// Grey value range the preset correction refers to.
    pub beam_hardening_correction_preset_value_range: Vector2f,
    /// Seconds to wait for a projection file to become readable.
    pub projection_read_timeout: f64,
    /// Seconds to wait for a projection file to be written completely.
    pub projection_completion_timeout: f64,
    /// Axis-aligned regions of interest; each produces a result volume.
    pub axis_aligned_rois: Vec<ReconstructionROISection>,
    /// Projection images with their rotation angles.
    pub projection_files: Vec<ReconstructionProjectionFileSection>,
    /// Placement of result volumes built from multiple ROIs.
    pub multiple_roi_positioning_mode: ReconstructionMultipleROIPositioningMode,
    /// Lower boundary of the reconstruction region of interest, as voxel
    /// indices into the result volume.
    pub region_of_interest_min: Vector3i,
    /// Upper boundary of the reconstruction region of interest.
    /// `(-1, -1, -1)` together with a min of `(0, 0, 0)` denotes the full
    /// volume.
    pub region_of_interest_max: Vector3i,
    /// Derive the region of interest automatically from the material.
    pub auto_region_of_interest_mode: bool,
    /// Pixels to skip per detector axis when sampling the projections.
    pub projection_skip: Vector2i,
    /// Projections to skip per angular step.
    pub projection_skip_angle: i64,
    /// Voxels to skip per axis in the result volume.
    pub voxel_skip: Vector3i,
    /// Clamp grey values at the lower boundary.
    pub clamp_low_mode: bool,
    /// Interpretation of the lower clamp boundary.
    pub clamp_low_type: ReconstructionClampType,
    /// Lower clamp boundary.
    pub clamp_low_value: f64,
    /// Clamp grey values at the upper boundary.
    pub clamp_high_mode: bool,
    /// Interpretation of the upper clamp boundary.
    pub clamp_high_type: ReconstructionClampType,
    /// Upper clamp boundary.
    pub clamp_high_value: f64,
    /// Data type of the reconstructed result volume.
    pub result_data_type: ReconstructionResultDataType,
    /// Base file name for the result volume files.
    pub result_base_file_name: String,
    /// Suffix appended to the result volume file names.
    pub result_file_suffix: String,
    /// Handling of the reconstructed result volume.
    pub result_import_mode: ReconstructionResultImportMode,
    /// Specify the result volume geometry manually instead of deriving it.
    pub manual_result_volume_specification_mode: bool,
    /// Physical size (in mm) of the result volume.
    pub result_physical_size: Vector3f,
    /// Offset (in mm) of the result volume.
    pub result_offset: Vector3f,
    /// Bias applied by the radiation intensity compensation.
    pub intensity_correction_bias: f64,
    /// Metal artifact reduction applied during reconstruction.
    pub metal_artifact_reduction_mode: ReconstructionMetalArtifactReductionMode,
    /// Interpretation of the metal artifact reduction threshold.
    pub metal_artifact_reduction_threshold_mode: ReconstructionMetalArtifactReductionThresholdMode,
    /// Metal artifact reduction threshold.
    pub metal_artifact_reduction_threshold: f64,
    /// Metal artifact reduction strength.
    pub metal_artifact_reduction_strength: f64,
    /// Reconstruction algorithm.
    pub algorithm_mode: ReconstructionAlgorithmMode,
    /// Number of ART iterations.
    pub art_number_of_iterations: i64,
    /// ART relaxation factor.
    pub art_relaxation_factor: f64,
    /// Compensation of radiation intensity fluctuations.
    pub radiation_intensity_compensation_mode: ReconstructionRadiationIntensityCompensationMode,
    /// Fixed scaling factor (in percent) used by the `FixedValueI0`
    /// compensation mode.
    pub radiation_intensity_compensation_fixed_value_i0: f64,
    /// Ring artifact reduction strength.
    pub ring_artifact_reduction_mode: ReconstructionRingArtifactReductionMode,
    /// Field of view extension for objects larger than the detector.
    pub field_of_view_extension_mode: ReconstructionFieldOfViewExtensionMode,
    /// Detector shift (in mm) used by the field of view extension.
    pub field_of_view_extension_shift: f64,
    /// Force cubic voxels in the result volume.
    pub ensure_isotropic_voxel_size: bool,
    /// Let the host pick a detector binning automatically.
    pub automatic_adaptive_detector_binning: bool,
}

impl Default for ReconstructionSection {
    fn default() -> Self {
        Self {
            object_name_in_scene: String::new(),
            meta_info: VolumeMetaInfoContainer::default(),
            rotation: Vector3f(0.0, 0.0, 0.0),
            translation: Vector3f(0.0, 0.0, 0.0),
            general_system_geometry_mode: ReconstructionGeneralSystemGeometryMode::ConeBeamCT,
            algorithmic_optimization_mode: ReconstructionAlgorithmicOptimizationMode::Quality,
            table_feed_360_deg: 0.0,
            lifting_axis_tilt_correction: 0.0,
            line_z_position_list: Vectorf::default(),
            laminography_angle: 0.0,
            geometric_setup: ReconstructionGeometricSetup::RotateFrustum,
            rotation_direction: ReconstructionRotationDirection::CounterClockwise,
            preprocessing_mode: ReconstructionPreprocessingMode::Filter,
            projection_sorting: ReconstructionProjectionSorting::NumbersUp,
            projection_data_type: ReconstructionProjectionDataType::UInt16,
            projection_orientation: ReconstructionProjectionOrientation::YZ,
            projection_file_format: ReconstructionProjectionFileFormat::Raw,
            projection_file_endian: ReconstructionProjectionFileEndian::Little,
            projection_header_skip: 0,
            projection_mirror_axis_y: false,
            projection_mirror_axis_z: false,
            projection_mirror_brightness: false,
            ignore_border_pixels: 0,
            projection_smoothing_mode: ReconstructionProjectionSmoothingMode::Off,
            calibration_mode: ReconstructionCalibrationMode::No,
            calibration_bright_file: None,
            calibration_dark_file: None,
            calibration_filter_mode: ReconstructionCalibrationFilterMode::Off,
            result_number_of_voxels: Vector3i(0, 0, 0),
            projection_number_of_pixels: Vector2i(0, 0),
            projection_physical_size: Vector2f(0.0, 0.0),
            distance_source_object: 0.0,
            distance_object_detector: 0.0,
            horizontal_detector_offset_position: 0.5,
            misalignment_correction_mode: ReconstructionMisalignmentCorrectionMode::Off,
            misalignment_optimization_mode: ReconstructionMisalignmentOptimizationMode::FullScan,
            misalignment_skip_mode: ReconstructionMisalignmentSkipMode::Auto,
            misalignment_skip: 0,
            horizontal_detector_offset: 0.0,
            horizontal_rotation_axis_offset: 0.0,
            rotation_axis_tilt_xz_correction: 0.0,
            rotation_axis_tilt_xz_correction_position: Vector2f(0.0, 0.0),
            vertical_detector_offset: 0.0,
            angular_offset: 0.0,
            angular_section: 0.0,
            angular_difference_correction: 0.0,
            interpolation_mode: ReconstructionInterpolationMode::Linear,
            filter_mode: ReconstructionFilterMode::SheppLogan,
            speckle_removal_mode: ReconstructionSpeckleRemovalMode::Off,
            calculation_mode: ReconstructionCalculationMode::OpenCL,
            beam_hardening_correction_mode: ReconstructionBeamHardeningCorrectionMode::Off,
            beam_hardening_correction_preset: String::new(),
            beam_hardening_correction_preset_mode:
                ReconstructionBeamHardeningCorrectionPresetMode::Automatic,
            beam_hardening_correction_preset_value_range: Vector2f(0.0, 0.0),
            projection_read_timeout: 7200.0,
            projection_completion_timeout: 30.0,
            axis_aligned_rois: Vec::new(),
            projection_files: Vec::new(),
            multiple_roi_positioning_mode:
                ReconstructionMultipleROIPositioningMode::KeepOrientation,
            region_of_interest_min: Vector3i(0, 0, 0),
            region_of_interest_max: Vector3i(-1, -1, -1),
            auto_region_of_interest_mode: false,
            projection_skip: Vector2i(0, 0),
            projection_skip_angle: 0,
            voxel_skip: Vector3i(0, 0, 0),
            clamp_low_mode: false,
            clamp_low_type: ReconstructionClampType::AbsoluteClamping,
            clamp_low_value: 0.0,
            clamp_high_mode: false,
            clamp_high_type: ReconstructionClampType::AbsoluteClamping,
            clamp_high_value: f64::INFINITY,
            result_data_type: ReconstructionResultDataType::UInt16,
            result_base_file_name: String::new(),
            result_file_suffix: String::new(),
            result_import_mode: ReconstructionResultImportMode::WriteToDiskAndImport,
            manual_result_volume_specification_mode: false,
            result_physical_size: Vector3f(0.0, 0.0, 0.0),
            result_offset: Vector3f(0.0, 0.0, 0.0),
            intensity_correction_bias: 0.0,
            metal_artifact_reduction_mode: ReconstructionMetalArtifactReductionMode::Off,
            metal_artifact_reduction_threshold_mode:
                ReconstructionMetalArtifactReductionThresholdMode::Relative,
            metal_artifact_reduction_threshold: 0.0,
            metal_artifact_reduction_strength: 0.0,
            algorithm_mode: ReconstructionAlgorithmMode::FBP,
            art_number_of_iterations: 1,
            art_relaxation_factor: 0.1,
            radiation_intensity_compensation_mode:
                ReconstructionRadiationIntensityCompensationMode::ProjectionMax,
            radiation_intensity_compensation_fixed_value_i0: 0.0,
            ring_artifact_reduction_mode: ReconstructionRingArtifactReductionMode::Off,
            field_of_view_extension_mode: ReconstructionFieldOfViewExtensionMode::No,
            field_of_view_extension_shift: 0.0,
            ensure_isotropic_voxel_size: false,
            automatic_adaptive_detector_binning: false,
        }
    }
}

/// A container holding [`ReconstructionSection`] object(s).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReconstructionSectionHolder {
    pub reconstructions: Vec<ReconstructionSection>,
}
