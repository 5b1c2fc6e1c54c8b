//! CLI argument definitions for the project file generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use vgproj_model::{
    MeshFormat, MeshUnit, ReconstructionProjectionDataType, ReconstructionProjectionFileEndian,
    ReconstructionProjectionFileFormat, ReconstructionProjectionSorting, VolumeDataType,
    VolumeEndian, VolumeFileFormat,
};

#[derive(Parser)]
#[command(
    name = "vgproj",
    version,
    about = "Generate XVGI project files for CT analysis software",
    long_about = "Generate XVGI project files describing volume, mesh and CT\n\
                  reconstruction imports for volume analysis applications."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Describe a surface mesh import.
    Mesh(MeshArgs),

    /// Describe a volume import from a stack of slice images.
    VolumeStack(VolumeStackArgs),

    /// Describe a volume import from a single block file.
    VolumeBlock(VolumeBlockArgs),

    /// Describe a CT reconstruction from projection images.
    Reconstruction(ReconstructionArgs),
}

#[derive(Parser)]
pub struct MeshArgs {
    /// Path to the mesh file.
    #[arg(value_name = "MESH_FILE")]
    pub mesh_file: PathBuf,

    /// Format of the mesh file.
    #[arg(long = "format", value_enum, default_value = "stl")]
    pub format: MeshFormatArg,

    /// Unit of the lengths within the mesh file.
    #[arg(long = "unit", value_enum, default_value = "millimeter")]
    pub unit: MeshUnitArg,

    /// Translation applied to the mesh origin in the scene, in mm.
    #[arg(long = "translation", value_names = ["X", "Y", "Z"], num_args = 3,
          allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
    pub translation: Vec<f64>,

    /// Rotation of the mesh as euler angles in degrees.
    #[arg(long = "rotation", value_names = ["H", "E", "B"], num_args = 3,
          allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
    pub rotation: Vec<f64>,

    /// Component description shown in the object properties.
    #[arg(long = "description", default_value = "")]
    pub description: String,

    /// Component serial number shown in the object properties.
    #[arg(long = "serial-number", default_value = "")]
    pub serial_number: String,

    /// Output file (stdout when omitted).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct VolumeStackArgs {
    /// Slice image files, bottom to top.
    #[arg(value_name = "SLICE", required = true, num_args = 1..)]
    pub slices: Vec<PathBuf>,

    /// Pixel size of each slice.
    #[arg(long = "slice-size", value_names = ["WIDTH", "HEIGHT"], num_args = 2, required = true)]
    pub slice_size: Vec<i64>,

    /// Format of the slice files.
    #[arg(long = "slice-format", value_enum, default_value = "tiff")]
    pub slice_format: VolumeFileFormatArg,

    /// Voxel resolution in mm per axis.
    #[arg(long = "resolution", value_names = ["X", "Y", "Z"], num_args = 3,
          default_values_t = [1.0, 1.0, 1.0])]
    pub resolution: Vec<f64>,

    /// Data type of the voxel values.
    #[arg(long = "data-type", value_enum, default_value = "uint16")]
    pub data_type: VolumeDataTypeArg,

    /// Byte order of the voxel values.
    #[arg(long = "endian", value_enum, default_value = "little")]
    pub endian: VolumeEndianArg,

    /// Output file (stdout when omitted).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct VolumeBlockArgs {
    /// Volume block file.
    #[arg(value_name = "BLOCK_FILE")]
    pub block: PathBuf,

    /// Voxel dimensions of the block.
    #[arg(long = "size", value_names = ["X", "Y", "Z"], num_args = 3, required = true)]
    pub size: Vec<i64>,

    /// Format of the block file.
    #[arg(long = "format", value_enum, default_value = "raw")]
    pub format: VolumeFileFormatArg,

    /// Voxel resolution in mm per axis.
    #[arg(long = "resolution", value_names = ["X", "Y", "Z"], num_args = 3,
          default_values_t = [1.0, 1.0, 1.0])]
    pub resolution: Vec<f64>,

    /// Data type of the voxel values.
    #[arg(long = "data-type", value_enum, default_value = "uint16")]
    pub data_type: VolumeDataTypeArg,

    /// Byte order of the voxel values.
    #[arg(long = "endian", value_enum, default_value = "little")]
    pub endian: VolumeEndianArg,

    /// Output file (stdout when omitted).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ReconstructionArgs {
    /// Projection image files in acquisition order.
    #[arg(value_name = "PROJECTION", required = true, num_args = 1..)]
    pub projections: Vec<PathBuf>,

    /// Distance from x-ray source to the rotation axis, in mm.
    #[arg(long = "distance-source-object", value_name = "MM", required = true)]
    pub distance_source_object: f64,

    /// Distance from the rotation axis to the detector, in mm.
    #[arg(long = "distance-object-detector", value_name = "MM", required = true)]
    pub distance_object_detector: f64,

    /// Bright calibration image.
    #[arg(long = "bright-file", value_name = "PATH", required = true)]
    pub bright_file: PathBuf,

    /// Pixel size of each projection image.
    #[arg(long = "projection-pixels", value_names = ["WIDTH", "HEIGHT"], num_args = 2,
          required = true)]
    pub projection_pixels: Vec<i64>,

    /// Physical detector size covered by a projection, in mm.
    #[arg(long = "projection-physical-size", value_names = ["WIDTH", "HEIGHT"], num_args = 2,
          required = true)]
    pub projection_physical_size: Vec<f64>,

    /// Number of voxels of the result volume per axis.
    #[arg(long = "result-voxels", value_names = ["X", "Y", "Z"], num_args = 3, required = true)]
    pub result_voxels: Vec<i64>,

    /// Base file name for the result volume files.
    #[arg(long = "base-filename", default_value = "volume")]
    pub base_filename: String,

    /// Name of the reconstructed volume in the scene.
    #[arg(long = "name", default_value = "Reconstructed volume")]
    pub name: String,

    /// Angle of the first projection, in degrees.
    #[arg(long = "angular-offset", value_name = "DEG", default_value_t = 0.0,
          allow_negative_numbers = true)]
    pub angular_offset: f64,

    /// Angular range covered by the projections, in degrees.
    #[arg(long = "angular-section", value_name = "DEG", default_value_t = 360.0)]
    pub angular_section: f64,

    /// File format of the projection images.
    #[arg(long = "projection-format", value_enum, default_value = "raw")]
    pub projection_format: ProjectionFileFormatArg,

    /// Pixel data type of the projection images.
    #[arg(long = "data-type", value_enum, default_value = "uint16")]
    pub data_type: ProjectionDataTypeArg,

    /// Byte order of the projection pixel values.
    #[arg(long = "endian", value_enum, default_value = "little")]
    pub endian: ProjectionEndianArg,

    /// Order in which projection files are consumed.
    #[arg(long = "sorting", value_enum, default_value = "numbers-up")]
    pub sorting: ProjectionSortingArg,

    /// Output file (stdout when omitted).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MeshFormatArg {
    Stl,
    Obj,
    Ply,
}

impl From<MeshFormatArg> for MeshFormat {
    fn from(arg: MeshFormatArg) -> Self {
        match arg {
            MeshFormatArg::Stl => Self::STL,
            MeshFormatArg::Obj => Self::OBJ,
            MeshFormatArg::Ply => Self::PLY,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MeshUnitArg {
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

impl From<MeshUnitArg> for MeshUnit {
    fn from(arg: MeshUnitArg) -> Self {
        match arg {
            MeshUnitArg::Kilometer => Self::Kilometer,
            MeshUnitArg::Meter => Self::Meter,
            MeshUnitArg::Centimeter => Self::Centimeter,
            MeshUnitArg::Millimeter => Self::Millimeter,
            MeshUnitArg::Micrometer => Self::Micrometer,
            MeshUnitArg::Nanometer => Self::Nanometer,
            MeshUnitArg::Inch => Self::Inch,
            MeshUnitArg::Foot => Self::Foot,
            MeshUnitArg::Yard => Self::Yard,
            MeshUnitArg::Mile => Self::Mile,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VolumeFileFormatArg {
    Raw,
    Gzip,
    Tiff,
    Jpeg,
    Bmp,
    Jpeg2,
    Hdf,
    Dicom,
}

impl From<VolumeFileFormatArg> for VolumeFileFormat {
    fn from(arg: VolumeFileFormatArg) -> Self {
        match arg {
            VolumeFileFormatArg::Raw => Self::Raw,
            VolumeFileFormatArg::Gzip => Self::Gzip,
            VolumeFileFormatArg::Tiff => Self::Tiff,
            VolumeFileFormatArg::Jpeg => Self::Jpeg,
            VolumeFileFormatArg::Bmp => Self::Bmp,
            VolumeFileFormatArg::Jpeg2 => Self::Jpeg2,
            VolumeFileFormatArg::Hdf => Self::Hdf,
            VolumeFileFormatArg::Dicom => Self::Dicom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lower")]
pub enum VolumeDataTypeArg {
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt32,
    Int32,
    Float,
}

impl From<VolumeDataTypeArg> for VolumeDataType {
    fn from(arg: VolumeDataTypeArg) -> Self {
        match arg {
            VolumeDataTypeArg::UInt8 => Self::UInt8,
            VolumeDataTypeArg::Int8 => Self::Int8,
            VolumeDataTypeArg::UInt16 => Self::UInt16,
            VolumeDataTypeArg::Int16 => Self::Int16,
            VolumeDataTypeArg::UInt32 => Self::UInt32,
            VolumeDataTypeArg::Int32 => Self::Int32,
            VolumeDataTypeArg::Float => Self::Float,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VolumeEndianArg {
    Little,
    Big,
}

impl From<VolumeEndianArg> for VolumeEndian {
    fn from(arg: VolumeEndianArg) -> Self {
        match arg {
            VolumeEndianArg::Little => Self::Little,
            VolumeEndianArg::Big => Self::Big,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectionFileFormatArg {
    Raw,
    Gzip,
    Tiff,
    Jpeg,
    Bmp,
    Jpeg2,
}

impl From<ProjectionFileFormatArg> for ReconstructionProjectionFileFormat {
    fn from(arg: ProjectionFileFormatArg) -> Self {
        match arg {
            ProjectionFileFormatArg::Raw => Self::Raw,
            ProjectionFileFormatArg::Gzip => Self::Gzip,
            ProjectionFileFormatArg::Tiff => Self::Tiff,
            ProjectionFileFormatArg::Jpeg => Self::Jpeg,
            ProjectionFileFormatArg::Bmp => Self::Bmp,
            ProjectionFileFormatArg::Jpeg2 => Self::Jpeg2,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lower")]
pub enum ProjectionDataTypeArg {
    UInt16,
    Int16,
    UInt32,
    Int32,
    Float,
}

impl From<ProjectionDataTypeArg> for ReconstructionProjectionDataType {
    fn from(arg: ProjectionDataTypeArg) -> Self {
        match arg {
            ProjectionDataTypeArg::UInt16 => Self::UInt16,
            ProjectionDataTypeArg::Int16 => Self::Int16,
            ProjectionDataTypeArg::UInt32 => Self::UInt32,
            ProjectionDataTypeArg::Int32 => Self::Int32,
            ProjectionDataTypeArg::Float => Self::Float,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectionEndianArg {
    Little,
    Big,
}

impl From<ProjectionEndianArg> for ReconstructionProjectionFileEndian {
    fn from(arg: ProjectionEndianArg) -> Self {
        match arg {
            ProjectionEndianArg::Little => Self::Little,
            ProjectionEndianArg::Big => Self::Big,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectionSortingArg {
    NumbersUp,
    Off,
    AlphabeticUp,
    CanonicUp,
    ReverseUp,
}

impl From<ProjectionSortingArg> for ReconstructionProjectionSorting {
    fn from(arg: ProjectionSortingArg) -> Self {
        match arg {
            ProjectionSortingArg::NumbersUp => Self::NumbersUp,
            ProjectionSortingArg::Off => Self::Off,
            ProjectionSortingArg::AlphabeticUp => Self::AlphabeticUp,
            ProjectionSortingArg::CanonicUp => Self::CanonicUp,
            ProjectionSortingArg::ReverseUp => Self::ReverseUp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mesh_subcommand_parses_with_defaults() {
        let cli = Cli::try_parse_from(["vgproj", "mesh", "/parts/a.stl"]).expect("parse");
        let Command::Mesh(args) = cli.command else {
            panic!("expected mesh subcommand");
        };
        assert_eq!(args.mesh_file, PathBuf::from("/parts/a.stl"));
        assert!(matches!(args.format, MeshFormatArg::Stl));
        assert_eq!(args.translation, vec![0.0, 0.0, 0.0]);
        assert!(args.output.is_none());
    }

    #[test]
    fn volume_stack_requires_slice_size() {
        let result = Cli::try_parse_from(["vgproj", "volume-stack", "/scan/s0.tif"]);
        assert!(result.is_err());
    }

    #[test]
    fn reconstruction_parses_geometry_arguments() {
        let cli = Cli::try_parse_from([
            "vgproj",
            "reconstruction",
            "/scan/p0.raw",
            "/scan/p1.raw",
            "--distance-source-object",
            "100",
            "--distance-object-detector",
            "400",
            "--bright-file",
            "/scan/bright.raw",
            "--projection-pixels",
            "2048",
            "2048",
            "--projection-physical-size",
            "400",
            "400",
            "--result-voxels",
            "800",
            "800",
            "600",
        ])
        .expect("parse");
        let Command::Reconstruction(args) = cli.command else {
            panic!("expected reconstruction subcommand");
        };
        assert_eq!(args.projections.len(), 2);
        assert_eq!(args.distance_source_object, 100.0);
        assert_eq!(args.result_voxels, vec![800, 800, 600]);
        assert_eq!(args.angular_section, 360.0);
    }

    #[test]
    fn reconstruction_requires_result_voxels() {
        let result = Cli::try_parse_from([
            "vgproj",
            "reconstruction",
            "/scan/p0.raw",
            "--distance-source-object",
            "100",
            "--distance-object-detector",
            "400",
            "--bright-file",
            "/scan/bright.raw",
            "--projection-pixels",
            "2048",
            "2048",
            "--projection-physical-size",
            "400",
            "400",
        ]);
        assert!(result.is_err());
    }
}
