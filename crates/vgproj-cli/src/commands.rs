//! Subcommand implementations.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use vgproj_model::{
    ComponentInfoSection, ProjectDescription, ReconstructionProjectParams, Vector2f, Vector2i,
    Vector3f, Vector3i, mesh_project, reconstruction_project_from_projections,
    volume_project_from_block, volume_project_from_slices,
};
use vgproj_xvgi::XvgiWriter;

use crate::cli::{MeshArgs, ReconstructionArgs, VolumeBlockArgs, VolumeStackArgs};

pub fn run_mesh(args: &MeshArgs) -> Result<()> {
    let project = mesh_project(
        &args.mesh_file,
        args.format.into(),
        args.unit.into(),
        ComponentInfoSection {
            description: args.description.clone(),
            serial_number: args.serial_number.clone(),
            ..ComponentInfoSection::default()
        },
        vector3f(&args.translation),
        vector3f(&args.rotation),
    );
    info!(mesh = %args.mesh_file.display(), "describing mesh import");
    write_output(&project, args.output.as_deref())
}

pub fn run_volume_stack(args: &VolumeStackArgs) -> Result<()> {
    let project = volume_project_from_slices(
        vector2i(&args.slice_size),
        &args.slices,
        args.slice_format.into(),
        vector3f(&args.resolution),
        args.data_type.into(),
        args.endian.into(),
    );
    info!(slices = args.slices.len(), "describing slice stack import");
    write_output(&project, args.output.as_deref())
}

pub fn run_volume_block(args: &VolumeBlockArgs) -> Result<()> {
    let project = volume_project_from_block(
        vector3i(&args.size),
        &args.block,
        args.format.into(),
        vector3f(&args.resolution),
        args.data_type.into(),
        args.endian.into(),
    );
    info!(block = %args.block.display(), "describing block import");
    write_output(&project, args.output.as_deref())
}

pub fn run_reconstruction(args: &ReconstructionArgs) -> Result<()> {
    let params = ReconstructionProjectParams {
        distance_source_object: args.distance_source_object,
        distance_object_detector: args.distance_object_detector,
        calibration_bright_file: args.bright_file.clone(),
        projection_file_number_of_pixels: vector2i(&args.projection_pixels),
        projection_file_physical_size: vector2f(&args.projection_physical_size),
        result_number_of_voxels: vector3i(&args.result_voxels),
        reconstruction_base_filename: args.base_filename.clone(),
        volume_name: args.name.clone(),
        projection_file_endian: args.endian.into(),
        projection_file_format: args.projection_format.into(),
        projection_file_data_type: args.data_type.into(),
        projection_file_sorting: args.sorting.into(),
        angular_offset: args.angular_offset,
        angular_section: args.angular_section,
        ..ReconstructionProjectParams::default()
    };
    let project = reconstruction_project_from_projections(params, &args.projections);
    info!(
        projections = args.projections.len(),
        "describing reconstruction"
    );
    write_output(&project, args.output.as_deref())
}

fn write_output(project: &ProjectDescription, output: Option<&Path>) -> Result<()> {
    let writer = XvgiWriter::new();
    match output {
        Some(path) => {
            writer
                .dump_file(project, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "project file written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writer
                .dump(project, &mut stdout)
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

// clap enforces the component counts, so indexing is safe here.
fn vector2i(values: &[i64]) -> Vector2i {
    Vector2i(values[0], values[1])
}

fn vector3i(values: &[i64]) -> Vector3i {
    Vector3i(values[0], values[1], values[2])
}

fn vector2f(values: &[f64]) -> Vector2f {
    Vector2f(values[0], values[1])
}

fn vector3f(values: &[f64]) -> Vector3f {
    Vector3f(values[0], values[1], values[2])
}
