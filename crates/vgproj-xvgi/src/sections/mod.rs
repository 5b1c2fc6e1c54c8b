//! Per-entity section serializers.

pub mod mesh;
pub mod meta;
pub mod reconstruction;
pub mod volume;

pub use mesh::{serialize_mesh, serialize_mesh_holder};
pub use meta::{serialize_component_info, serialize_manufacturer_info, serialize_scan_info};
pub use reconstruction::{serialize_reconstruction, serialize_reconstruction_holder};
pub use volume::{serialize_volume, serialize_volume_holder};
