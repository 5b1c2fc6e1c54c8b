//! Mesh section serializer.

use vgproj_model::{MeshSection, MeshSectionHolder};

use crate::section;
use crate::sections::meta::serialize_component_info;
use crate::value::FieldValue;

/// Serializes one mesh under the given section name. A present meta-info
/// container becomes a sibling `<name>_ComponentInfoSection`.
pub fn serialize_mesh(name: &str, mesh: &MeshSection) -> String {
    let fields = [
        ("FileName", FieldValue::from(&mesh.file_name)),
        ("MeshFormat", FieldValue::enumeration(&mesh.mesh_format)),
        ("MeshRotation", FieldValue::from(mesh.mesh_rotation)),
        ("MeshTranslation", FieldValue::from(mesh.mesh_translation)),
        ("MeshUnit", FieldValue::enumeration(&mesh.mesh_unit)),
        (
            "ObjectNameInScene",
            FieldValue::from(&mesh.object_name_in_scene),
        ),
    ];
    let mut out = section::serialize(name, &fields);

    if let Some(meta_info) = &mesh.meta_info {
        out.push_str(&serialize_component_info(
            &format!("{name}_ComponentInfoSection"),
            &meta_info.component_info,
        ));
    }

    out
}

/// Serializes every mesh of the holder, naming sections
/// `MeshSection<start_index>`, `MeshSection<start_index + 1>`, ….
/// Callers that serialize several holders into one document carry the
/// running index forward themselves.
pub fn serialize_mesh_holder(holder: &MeshSectionHolder, start_index: usize) -> String {
    let mut out = String::new();
    for (offset, mesh) in holder.meshes.iter().enumerate() {
        let name = format!("MeshSection{}", start_index + offset);
        out.push_str(&serialize_mesh(&name, mesh));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgproj_model::{ComponentInfoSection, MeshMetaInfoContainer};

    #[test]
    fn mesh_without_meta_info_is_a_single_section() {
        let mesh = MeshSection::new("/foo/part.stl");
        let serialized = serialize_mesh("MeshSection0", &mesh);
        assert!(serialized.starts_with("[MeshSection0]\n"));
        assert!(serialized.contains("\tFileName = /foo/part.stl\n"));
        assert!(serialized.contains("\tMeshFormat = MeshFormat_STL\n"));
        assert!(serialized.contains("\tMeshUnit = MeshUnit_Millimeter\n"));
        assert!(!serialized.contains("ComponentInfoSection"));
    }

    #[test]
    fn meta_info_becomes_sibling_component_section() {
        let mesh = MeshSection {
            meta_info: Some(MeshMetaInfoContainer {
                component_info: ComponentInfoSection {
                    serial_number: "77".to_string(),
                    ..ComponentInfoSection::default()
                },
            }),
            ..MeshSection::new("/foo/part.stl")
        };
        let serialized = serialize_mesh("MeshSection0", &mesh);
        assert!(serialized.contains("[MeshSection0\\_ComponentInfoSection]\n"));
        assert!(serialized.contains("\tSerial\\ number = 77\n"));
    }

    #[test]
    fn holder_numbers_sections_from_start_index() {
        let holder = MeshSectionHolder {
            meshes: vec![
                MeshSection::new("/foo/a.stl"),
                MeshSection::new("/foo/b.stl"),
            ],
        };
        let serialized = serialize_mesh_holder(&holder, 3);
        assert!(serialized.contains("[MeshSection3]\n"));
        assert!(serialized.contains("[MeshSection4]\n"));
        assert!(!serialized.contains("[MeshSection0]\n"));
    }

    #[test]
    fn empty_holder_produces_no_output() {
        assert_eq!(serialize_mesh_holder(&MeshSectionHolder::default(), 0), "");
    }
}
