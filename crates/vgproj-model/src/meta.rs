//! Meta information attached to volume, mesh and reconstruction objects.
//!
//! The host application shows these records in object properties and uses
//! them in reports. All fields are free-form strings; the `metadata` list
//! carries custom tag/description pairs in insertion order.

use serde::{Deserialize, Serialize};

/// Custom tag/description pairs. Order is preserved end-to-end so the
/// emitted file is deterministic.
pub type Metadata = Vec<(String, String)>;

/// Information about the scanned component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentInfoSection {
    /// Description of the scanned object.
    pub description: String,
    /// Lot number of the scanned component.
    pub lot_number: String,
    /// Production date and time, e.g. `06.12.2018 20:01:02`.
    pub production_date_time: String,
    /// Cavity number of the scanned component.
    pub cavity_number: String,
    /// Serial number of the scanned component.
    pub serial_number: String,
    /// Custom component information.
    pub metadata: Metadata,
}

/// Information about the CT scanner manufacturer and the scanner itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ManufacturerInfoSection {
    /// Manufacturer of the CT scanner.
    pub name: String,
    /// Manufacturer address.
    pub address: String,
    /// Homepage of the scanner manufacturer.
    pub homepage: String,
    /// Designation of the CT scanner.
    pub device_name: String,
    /// Software name and version used with the CT scanner.
    pub acquisition_software: String,
    /// Custom manufacturer information.
    pub metadata: Metadata,
}

/// Information about the scan process.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanInfoSection {
    /// Acceleration voltage of the x-ray tube during the scan.
    pub tube_voltage: String,
    /// Current of the x-ray tube during the scan.
    pub tube_current: String,
    /// Time used for scanning the object.
    pub scan_time: String,
    /// Time used for the reconstruction.
    pub reconstruction_time: String,
    /// Time used for the whole process, from scan to project file.
    pub total_process_time: String,
    /// Algorithm used for the reconstruction, e.g. Feldkamp.
    pub reconstruction_algorithm: String,
    /// Method used for scanning, e.g. stop-and-go or continuous rotation.
    pub scan_method: String,
    /// Geometrical arrangement of source/object/detector during the scan.
    pub geometry: String,
    /// Integration time of the pixels.
    pub integration_time: String,
    /// Source side filter used to reduce beam-hardening artifacts.
    pub filter: String,
    /// Number of projections created while scanning the object.
    pub number_of_projections: String,
    /// Date and time at which the scan was performed.
    pub date_time: String,
    /// User who performed the scan.
    pub user: String,
    /// Custom scan information.
    pub metadata: Metadata,
}

/// Meta info attached to a volume or reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeMetaInfoContainer {
    pub component_info: ComponentInfoSection,
    pub manufacturer_info: ManufacturerInfoSection,
    pub scan_info: ScanInfoSection,
}

/// Meta info attached to a mesh. Meshes only carry component information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeshMetaInfoContainer {
    pub component_info: ComponentInfoSection,
}
