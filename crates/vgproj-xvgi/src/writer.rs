//! Project description writer.
//!
//! Renders a [`ProjectDescription`] into the complete project file text:
//! the version section first, then every volume, mesh and reconstruction
//! with its child sections.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use vgproj_model::{ProjectDescription, VersionSection};

use crate::error::Result;
use crate::section;
use crate::sections::{
    serialize_mesh_holder, serialize_reconstruction_holder, serialize_volume_holder,
};
use crate::value::FieldValue;

/// Project file writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct XvgiWriter;

impl XvgiWriter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the project description as project file text.
    pub fn dumps(&self, project: &ProjectDescription) -> String {
        let mut out = serialize_version(&project.version);
        out.push_str(&serialize_volume_holder(&project.volumes, 0));
        out.push_str(&serialize_mesh_holder(&project.meshes, 0));
        out.push_str(&serialize_reconstruction_holder(&project.reconstructions, 0));
        out
    }

    /// Writes the rendered project description to the given writer.
    pub fn dump<W: Write>(&self, project: &ProjectDescription, writer: &mut W) -> Result<()> {
        writer.write_all(self.dumps(project).as_bytes())?;
        Ok(())
    }

    /// Writes the rendered project description to a file, creating or
    /// truncating it.
    pub fn dump_file(&self, project: &ProjectDescription, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.dump(project, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn serialize_version(version: &VersionSection) -> String {
    let fields = [("Version", FieldValue::from(&version.version))];
    section::serialize("VersionSection", &fields)
}

/// Renders a project description as project file text.
pub fn to_string(project: &ProjectDescription) -> String {
    XvgiWriter::new().dumps(project)
}

/// Writes a project description to a file.
pub fn write_file(path: &Path, project: &ProjectDescription) -> Result<()> {
    XvgiWriter::new().dump_file(project, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgproj_model::{MeshSection, VolumeSection};

    #[test]
    fn version_section_comes_first() {
        let serialized = to_string(&ProjectDescription::default());
        assert!(serialized.starts_with("[VersionSection]\n\tVersion = 3.0.0\n\n"));
    }

    #[test]
    fn empty_project_is_only_the_version_section() {
        let serialized = to_string(&ProjectDescription::default());
        assert_eq!(serialized, "[VersionSection]\n\tVersion = 3.0.0\n\n");
    }

    #[test]
    fn holders_are_emitted_volumes_then_meshes_then_reconstructions() {
        let mut project = ProjectDescription::default();
        project.volumes.volumes.push(VolumeSection::default());
        project.meshes.meshes.push(MeshSection::new("/foo/part.stl"));
        project
            .reconstructions
            .reconstructions
            .push(Default::default());

        let serialized = to_string(&project);
        let volume = serialized.find("[VolumeSection0]").expect("volume");
        let mesh = serialized.find("[MeshSection0]").expect("mesh");
        let reconstruction = serialized
            .find("[ReconstructionSection0]")
            .expect("reconstruction");
        assert!(volume < mesh && mesh < reconstruction);
    }

    #[test]
    fn every_section_ends_with_a_blank_line() {
        let mut project = ProjectDescription::default();
        project.meshes.meshes.push(MeshSection::new("/foo/a.stl"));
        let serialized = to_string(&project);
        for part in serialized.split_inclusive("\n\n") {
            assert!(part.ends_with("\n\n"));
            assert!(part.starts_with('['));
        }
    }
}
