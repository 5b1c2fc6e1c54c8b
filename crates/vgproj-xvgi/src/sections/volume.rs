//! Volume section serializer.

use vgproj_model::{VolumeFileSection, VolumeSection, VolumeSectionHolder};

use crate::section::{self, Field};
use crate::sections::meta::{
    serialize_component_info, serialize_manufacturer_info, serialize_scan_info,
};
use crate::value::FieldValue;

fn volume_fields(volume: &VolumeSection) -> Vec<Field<'static>> {
    vec![
        (
            "ObjectNameInScene",
            FieldValue::from(&volume.object_name_in_scene),
        ),
        ("VolumeRotation", FieldValue::from(volume.rotation)),
        ("VolumeTranslation", FieldValue::from(volume.translation)),
        (
            "VolumeAutomaticSourceRangeDetectionMode",
            FieldValue::from(volume.automatic_source_range_detection_mode),
        ),
        (
            "VolumeAutomaticSourceRangeDetectionBoundaries",
            FieldValue::from(volume.automatic_source_range_detection_boundaries),
        ),
        ("VolumeSourceRange", FieldValue::from(volume.source_range)),
        (
            "VolumeDestinationDataType",
            FieldValue::enumeration(&volume.destination_data_type),
        ),
        (
            "VolumeDataMappingMode",
            FieldValue::enumeration(&volume.data_mapping_mode),
        ),
        (
            "VolumeDestinationRange",
            FieldValue::from(volume.destination_range),
        ),
        ("VolumeResolution", FieldValue::from(volume.resolution)),
        (
            "VolumeSliceInterpolationMode",
            FieldValue::enumeration(&volume.slice_interpolation_mode),
        ),
        (
            "VolumeSliceInterpolationThreshold",
            FieldValue::from(volume.slice_interpolation_threshold),
        ),
        (
            "VolumeResamplingMode",
            FieldValue::from(volume.resampling_mode),
        ),
        (
            "VolumeResamplingResolution",
            FieldValue::from(volume.resampling_resolution),
        ),
        (
            "VolumeRegionOfInterestMin",
            FieldValue::from(volume.region_of_interest_min),
        ),
        (
            "VolumeRegionOfInterestMax",
            FieldValue::from(volume.region_of_interest_max),
        ),
        (
            "VolumeAutoRegionOfInterestMode",
            FieldValue::from(volume.auto_region_of_interest_mode),
        ),
        ("VolumeVoxelSkip", FieldValue::from(volume.voxel_skip)),
        ("VolumeMirrorAxisX", FieldValue::from(volume.mirror_axis_x)),
        ("VolumeMirrorAxisY", FieldValue::from(volume.mirror_axis_y)),
        ("VolumeMirrorAxisZ", FieldValue::from(volume.mirror_axis_z)),
        (
            "VolumeAxesSwapMode",
            FieldValue::enumeration(&volume.axes_swap_mode),
        ),
        (
            "VolumeAlignedClippingBoxMin",
            FieldValue::from(volume.aligned_clipping_box_min),
        ),
        (
            "VolumeAlignedClippingBoxMax",
            FieldValue::from(volume.aligned_clipping_box_max),
        ),
    ]
}

fn volume_file_fields(file: &VolumeFileSection) -> Vec<Field<'static>> {
    vec![
        ("FileName", FieldValue::from(&file.file_name)),
        ("FileFileFormat", FieldValue::enumeration(&file.file_format)),
        ("FileDataType", FieldValue::enumeration(&file.data_type)),
        ("FileEndian", FieldValue::enumeration(&file.endian)),
        ("FileSize", FieldValue::from(file.size)),
        ("FileHeaderSkip", FieldValue::from(file.header_skip)),
        ("FilePositionList", FieldValue::from(&file.position_list)),
    ]
}

/// Serializes one volume under the given section name: the flat fields,
/// a `<name>_FileSection<i>` per input file, and the three meta-info
/// sections.
pub fn serialize_volume(name: &str, volume: &VolumeSection) -> String {
    let mut out = section::serialize(name, &volume_fields(volume));

    for (index, file) in volume.projections.iter().enumerate() {
        let file_section_name = format!("{name}_FileSection{index}");
        out.push_str(&section::serialize(
            &file_section_name,
            &volume_file_fields(file),
        ));
    }

    out.push_str(&serialize_manufacturer_info(
        &format!("{name}_ManufacturerInfoSection"),
        &volume.meta_info.manufacturer_info,
    ));
    out.push_str(&serialize_scan_info(
        &format!("{name}_ScanInfoSection"),
        &volume.meta_info.scan_info,
    ));
    out.push_str(&serialize_component_info(
        &format!("{name}_ComponentInfoSection"),
        &volume.meta_info.component_info,
    ));

    out
}

/// Serializes every volume of the holder, naming sections
/// `VolumeSection<start_index>`, `VolumeSection<start_index + 1>`, ….
pub fn serialize_volume_holder(holder: &VolumeSectionHolder, start_index: usize) -> String {
    let mut out = String::new();
    for (offset, volume) in holder.volumes.iter().enumerate() {
        let name = format!("VolumeSection{}", start_index + offset);
        out.push_str(&serialize_volume(&name, volume));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgproj_model::Vectorf;

    #[test]
    fn volume_emits_file_sections_in_input_order() {
        let volume = VolumeSection {
            projections: vec![
                VolumeFileSection {
                    position_list: Vectorf(vec![1.0, 2.0, 3.0]),
                    ..VolumeFileSection::new("/foo/projection0.tif")
                },
                VolumeFileSection::new("/foo/projection1.tif"),
            ],
            ..VolumeSection::default()
        };
        let serialized = serialize_volume("VolumeSection0", &volume);
        let first = serialized
            .find("[VolumeSection0\\_FileSection0]")
            .expect("file section 0");
        let second = serialized
            .find("[VolumeSection0\\_FileSection1]")
            .expect("file section 1");
        assert!(first < second);
        assert!(serialized.contains("\tFilePositionList = 1.0000000  2.0000000  3.0000000\n"));
    }

    #[test]
    fn meta_info_sections_follow_file_sections() {
        let volume = VolumeSection::default();
        let serialized = serialize_volume("VolumeSection0", &volume);
        let manufacturer = serialized
            .find("[VolumeSection0\\_ManufacturerInfoSection]")
            .expect("manufacturer");
        let scan = serialized
            .find("[VolumeSection0\\_ScanInfoSection]")
            .expect("scan");
        let component = serialized
            .find("[VolumeSection0\\_ComponentInfoSection]")
            .expect("component");
        assert!(manufacturer < scan && scan < component);
    }

    #[test]
    fn nested_containers_never_appear_as_fields() {
        let serialized = serialize_volume("VolumeSection0", &VolumeSection::default());
        assert!(!serialized.contains("\tVolumeMetaInfo"));
        assert!(!serialized.contains("\tVolumeProjections"));
    }

    #[test]
    fn defaults_render_expected_values() {
        let serialized = serialize_volume("VolumeSection0", &VolumeSection::default());
        assert!(serialized.contains("\tVolumeSourceRange = 0.0000000  -1.0000000\n"));
        assert!(serialized.contains("\tVolumeRegionOfInterestMax = -1  -1  -1\n"));
        assert!(serialized.contains("\tVolumeResamplingMode = False\n"));
        assert!(
            serialized.contains("\tVolumeDestinationDataType = VolumeDataType_UInt16\n")
        );
    }

    #[test]
    fn empty_holder_produces_no_output() {
        assert_eq!(
            serialize_volume_holder(&VolumeSectionHolder::default(), 0),
            ""
        );
    }
}
