//! Volume import descriptors.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::meta::VolumeMetaInfoContainer;
use crate::types::{Vector2f, Vector3f, Vector3i, Vectorf, section_enum};

section_enum! {
    /// Format of the volume data files.
    pub enum VolumeFileFormat {
        /// Signed/unsigned 8/16/32 bit integer, 32 bit float or 32 bit RGBA.
        Raw,
        /// Signed/unsigned 8/16/32 bit integer, 32 bit float or 32 bit RGBA.
        Gzip,
        /// Signed/unsigned 8/16 bit integer, 8/16 bit RGB or 8/16 bit RGBA.
        Tiff,
        /// Color and grayscale images.
        Jpeg,
        /// Color and grayscale images.
        Bmp,
        /// 16 bit grayscale images from Varian/BIR CT systems.
        Bir,
        /// Signed 16 bit images from Toshiba CT systems.
        Toshiba,
        /// Grayscale images from Shimadzu CT systems.
        Shimadzu,
        /// Binary 24 bit color and grayscale images.
        Pnm,
        /// 8/16 bit grayscale images, 8 bit RGB or 8 bit RGBA.
        Jpeg2,
        /// Volumes from Yxlon line detector CT.
        Yxlon,
        /// Signed/unsigned 8/16/32 bit integer or 32 bit float.
        Hdf,
        /// Signed/unsigned 8/16/32 bit integer, typically from medical CT.
        Dicom,
        /// Grayscale images from IMTEC CT systems.
        Imtec,
        /// Grayscale images from Rapiscan CT systems.
        Aracor,
        /// Unsigned 8/16/32 bit integer from Fraunhofer or Werth CT systems.
        Fhg,
        /// Grayscale volume from Shimadzu CT systems.
        ShimadzuVolume,
    }
}

section_enum! {
    /// Data type of the voxel values as stored in the file(s).
    pub enum VolumeDataType {
        /// Unsigned 8 bit coded gray values, 0 to 255.
        UInt8,
        /// Signed 8 bit coded gray values, -128 to 127.
        Int8,
        /// Unsigned 16 bit coded gray values, 0 to 65535.
        UInt16,
        /// Signed 16 bit coded gray values, -32768 to 32767.
        Int16,
        /// Unsigned 32 bit coded gray values, 0 to 1048575.
        UInt32,
        /// Signed 32 bit coded gray values, -524288 to 524287.
        Int32,
        /// 32 bit float (3D rendering as 16 bit).
        Float,
        /// 8 bit per RGB component color images.
        Rgb8,
    }
}

section_enum! {
    /// Mapping of source grey values onto the destination range.
    pub enum VolumeDataMappingMode {
        /// Ramp mapping, lower left to upper right.
        Ramp,
        /// Inverse ramp mapping, lower right to upper left.
        InverseRamp,
        /// Sawtooth mapping, incline to peak from lower left to upper right.
        Sawtooth,
        /// Inverse sawtooth mapping.
        InverseSawtooth,
    }
}

section_enum! {
    /// Non-equidistant slice interpolation mode.
    pub enum VolumeSliceInterpolationMode {
        /// Always interpolate between gaps.
        On,
        /// Never interpolate between gaps.
        Off,
        /// Only interpolate gaps smaller than a given threshold.
        Threshold,
    }
}

section_enum! {
    /// Axis swap applied to the imported volume.
    pub enum VolumeAxesSwapMode {
        /// Axes will not be swapped.
        XYZ,
        XZY,
        YXZ,
        YZX,
        ZXY,
        ZYX,
    }
}

section_enum! {
    /// Byte order of the data type elements of files.
    pub enum VolumeEndian {
        /// Least significant byte first.
        Little,
        /// Most significant byte first.
        Big,
    }
}

/// Descriptor for a single file of a volume data set import.
///
/// Sizes and data types must be given explicitly even when the file format
/// carries them implicitly; files are not accessed while describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeFileSection {
    /// Name of this file, preferably as an absolute path.
    pub file_name: PathBuf,
    /// Format of the file.
    pub file_format: VolumeFileFormat,
    /// Type of the voxel values inside the file data.
    pub data_type: VolumeDataType,
    /// Endianness of the voxel values. Only relevant for Raw or Gzip data
    /// with more than 8 bits per pixel.
    pub endian: VolumeEndian,
    /// Dimensions of the volume or image stored in the file.
    pub size: Vector3i,
    /// Number of bytes to skip at the beginning of the file.
    pub header_skip: i64,
    /// Relative physical positions (in mm) of the file's slices, for
    /// non-equidistant slice stacks. When used, every file of the volume
    /// must specify as many positions as its z-size indicates.
    pub position_list: Vectorf,
}

impl VolumeFileSection {
    /// File descriptor with default import settings.
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            file_format: VolumeFileFormat::Raw,
            data_type: VolumeDataType::UInt16,
            endian: VolumeEndian::Little,
            size: Vector3i(0, 0, 0),
            header_skip: 0,
            position_list: Vectorf::default(),
        }
    }
}

/// Descriptor to completely define a volume data set import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSection {
    /// Name of the volume object in the scene. Empty means the host
    /// application picks one (e.g. "Volume 1").
    pub object_name_in_scene: String,
    /// Meta information of the volume.
    pub meta_info: VolumeMetaInfoContainer,
    /// Rotation of the volume in the scene as euler angles in degrees.
    pub rotation: Vector3f,
    /// Translation applied to the volume origin in the scene.
    pub translation: Vector3f,
    /// Automatic grey value range detection from the data's histogram.
    pub automatic_source_range_detection_mode: bool,
    /// Percentual histogram boundaries for automatic range detection.
    pub automatic_source_range_detection_boundaries: Vector2f,
    /// Usable source grey value range. `(0, -1)` denotes the full range.
    pub source_range: Vector2f,
    /// Data type of the finally imported volume.
    pub destination_data_type: VolumeDataType,
    /// Mapping of source to destination grey values.
    pub data_mapping_mode: VolumeDataMappingMode,
    /// Usable destination grey value range. `(0, -1)` denotes the full range.
    pub destination_range: Vector2f,
    /// Voxel resolution (in mm) of the data set along each axis, before any
    /// voxel skip, resampling or axis swapping.
    pub resolution: Vector3f,
    /// Non-equidistant slice interpolation mode.
    pub slice_interpolation_mode: VolumeSliceInterpolationMode,
    /// Threshold distance (in mm) for slice interpolation. Mandatory when
    /// the interpolation mode is not `Off`.
    pub slice_interpolation_threshold: f64,
    /// Force resampling of the original volume data.
    pub resampling_mode: bool,
    /// Desired final resolution for resampling, referring to the original
    /// axes before any swapping.
    pub resampling_resolution: Vector3f,
    /// Lower boundary of a region of interest on the base volume, as voxel
    /// indices. `(0,0,0)` together with a max of `(-1,-1,-1)` denotes the
    /// full volume.
    pub region_of_interest_min: Vector3i,
    /// Upper boundary of the region of interest.
    pub region_of_interest_max: Vector3i,
    /// Derive the region of interest automatically from the material.
    pub auto_region_of_interest_mode: bool,
    /// Voxels to skip per axis when importing. At skip `n`, only every
    /// `(n + 1)`-th input voxel is considered.
    pub voxel_skip: Vector3i,
    /// Mirror the resulting volume data along the X-axis.
    pub mirror_axis_x: bool,
    /// Mirror the resulting volume data along the Y-axis.
    pub mirror_axis_y: bool,
    /// Mirror the resulting volume data along the Z-axis.
    pub mirror_axis_z: bool,
    /// Axis swap applied to the final volume.
    pub axes_swap_mode: VolumeAxesSwapMode,
    /// Lower boundary of an axis aligned clipping box in final grid
    /// coordinates. Visual only; an invalid box clips nothing.
    pub aligned_clipping_box_min: Vector3f,
    /// Upper boundary of the axis aligned clipping box.
    pub aligned_clipping_box_max: Vector3f,
    /// Set of file(s) the volume consists of. At least one file must be
    /// specified to define a valid volume.
    pub projections: Vec<VolumeFileSection>,
}

impl Default for VolumeSection {
    fn default() -> Self {
        Self {
            object_name_in_scene: String::new(),
            meta_info: VolumeMetaInfoContainer::default(),
            rotation: Vector3f(0.0, 0.0, 0.0),
            translation: Vector3f(0.0, 0.0, 0.0),
            automatic_source_range_detection_mode: false,
            automatic_source_range_detection_boundaries: Vector2f(0.0, 0.0),
            source_range: Vector2f(0.0, -1.0),
            destination_data_type: VolumeDataType::UInt16,
            data_mapping_mode: VolumeDataMappingMode::Ramp,
            destination_range: Vector2f(0.0, -1.0),
            resolution: Vector3f(1.0, 1.0, 1.0),
            slice_interpolation_mode: VolumeSliceInterpolationMode::On,
            slice_interpolation_threshold: 0.0,
            resampling_mode: false,
            resampling_resolution: Vector3f(1.0, 1.0, 1.0),
            region_of_interest_min: Vector3i(0, 0, 0),
            region_of_interest_max: Vector3i(-1, -1, -1),
            auto_region_of_interest_mode: false,
            voxel_skip: Vector3i(0, 0, 0),
            mirror_axis_x: false,
            mirror_axis_y: false,
            mirror_axis_z: false,
            axes_swap_mode: VolumeAxesSwapMode::XYZ,
            aligned_clipping_box_min: Vector3f(0.0, 0.0, 0.0),
            aligned_clipping_box_max: Vector3f(-1.0, -1.0, -1.0),
            projections: Vec::new(),
        }
    }
}

/// A container holding [`VolumeSection`] object(s).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VolumeSectionHolder {
    pub volumes: Vec<VolumeSection>,
}
