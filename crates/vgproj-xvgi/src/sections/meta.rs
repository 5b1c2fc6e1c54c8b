//! Serializers for the meta-info sections.
//!
//! Each pops nothing structural; they serialize the flat string fields
//! with a fixed human-readable renaming table and append the custom
//! metadata pairs as raw lines.

use vgproj_model::{ComponentInfoSection, ManufacturerInfoSection, ScanInfoSection};

use crate::section;
use crate::value::FieldValue;

const COMPONENT_INFO_RENAMING: &[(&str, &str)] = &[
    ("LotNumber", "Lot number"),
    ("ProductionDateTime", "Production date time"),
    ("CavityNumber", "Cavity number"),
    ("SerialNumber", "Serial number"),
];

const MANUFACTURER_INFO_RENAMING: &[(&str, &str)] = &[
    ("DeviceName", "Device name"),
    ("AcquisitionSoftware", "Acquisition software"),
];

const SCAN_INFO_RENAMING: &[(&str, &str)] = &[
    ("TubeVoltage", "Tube voltage"),
    ("TubeCurrent", "Tube current"),
    ("ScanTime", "Scan time"),
    ("ReconstructionTime", "Reconstruction time"),
    ("TotalProcessTime", "Total process time"),
    ("ScanMethod", "Scan method"),
    ("IntegrationTime", "Integration time"),
    ("NumberOfProjections", "Number of projections"),
    ("DateTime", "Date time"),
];

pub fn serialize_component_info(name: &str, info: &ComponentInfoSection) -> String {
    let fields = [
        ("Description", FieldValue::from(&info.description)),
        ("LotNumber", FieldValue::from(&info.lot_number)),
        (
            "ProductionDateTime",
            FieldValue::from(&info.production_date_time),
        ),
        ("CavityNumber", FieldValue::from(&info.cavity_number)),
        ("SerialNumber", FieldValue::from(&info.serial_number)),
    ];
    section::serialize_with_renaming(name, &fields, COMPONENT_INFO_RENAMING, &info.metadata)
}

pub fn serialize_manufacturer_info(name: &str, info: &ManufacturerInfoSection) -> String {
    let fields = [
        ("Name", FieldValue::from(&info.name)),
        ("Address", FieldValue::from(&info.address)),
        ("Homepage", FieldValue::from(&info.homepage)),
        ("DeviceName", FieldValue::from(&info.device_name)),
        (
            "AcquisitionSoftware",
            FieldValue::from(&info.acquisition_software),
        ),
    ];
    section::serialize_with_renaming(name, &fields, MANUFACTURER_INFO_RENAMING, &info.metadata)
}

pub fn serialize_scan_info(name: &str, info: &ScanInfoSection) -> String {
    let fields = [
        ("TubeVoltage", FieldValue::from(&info.tube_voltage)),
        ("TubeCurrent", FieldValue::from(&info.tube_current)),
        ("ScanTime", FieldValue::from(&info.scan_time)),
        (
            "ReconstructionTime",
            FieldValue::from(&info.reconstruction_time),
        ),
        (
            "TotalProcessTime",
            FieldValue::from(&info.total_process_time),
        ),
        (
            "ReconstructionAlgorithm",
            FieldValue::from(&info.reconstruction_algorithm),
        ),
        ("ScanMethod", FieldValue::from(&info.scan_method)),
        ("Geometry", FieldValue::from(&info.geometry)),
        ("IntegrationTime", FieldValue::from(&info.integration_time)),
        ("Filter", FieldValue::from(&info.filter)),
        (
            "NumberOfProjections",
            FieldValue::from(&info.number_of_projections),
        ),
        ("DateTime", FieldValue::from(&info.date_time)),
        ("User", FieldValue::from(&info.user)),
    ];
    section::serialize_with_renaming(name, &fields, SCAN_INFO_RENAMING, &info.metadata)
}
