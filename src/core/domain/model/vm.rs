//! Domain models for virtual machine creation.
//!
//! The workflow creates every VM from the same hardware template: the only
//! inputs are the VM name, the disk to clone and the target container.

use serde::Serialize;
use serde_json::{Map, Value};

/// Memory of every VM created by this workflow, in MB.
pub const VM_MEMORY_MB: u32 = 2048;
/// Virtual CPUs of every VM created by this workflow.
pub const VM_NUM_VCPUS: u32 = 2;
/// Cores per virtual CPU.
pub const VM_NUM_CORES_PER_VCPU: u32 = 1;

/// Device the VM boots from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BootDeviceType {
    Cdrom,
}

/// Bus a virtual disk is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceBus {
    Ide,
}

/// Position of a disk on a bus, optionally tied to an existing vmdisk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_bus: Option<DeviceBus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vmdisk_uuid: Option<String>,
}

/// Boot configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BootConfig {
    pub boot_device_type: BootDeviceType,
    pub disk_address: DiskAddress,
}

/// Source disk of a cloned virtual disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VmDiskClone {
    pub disk_address: DiskAddress,
}

/// A virtual disk attached at creation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VmDisk {
    pub disk_address: DiskAddress,
    pub is_cdrom: bool,
    pub is_empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_disk_clone: Option<VmDiskClone>,
}

/// Body of `POST /vms/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateVmRequest {
    pub boot: BootConfig,
    pub memory_mb: u32,
    pub name: String,
    pub num_cores_per_vcpu: u32,
    pub num_vcpus: u32,
    pub storage_container_uuid: String,
    pub vm_features: Map<String, Value>,
    pub vm_disks: Vec<VmDisk>,
}

impl CreateVmRequest {
    /// The fixed template: boots from a CD-ROM on IDE 0 that clones `vmdisk_uuid`.
    pub fn cdrom_boot(
        name: impl Into<String>,
        vmdisk_uuid: impl Into<String>,
        container_id: impl Into<String>,
    ) -> Self {
        let vmdisk_uuid = vmdisk_uuid.into();
        let ide0 = |vmdisk_uuid: Option<String>| DiskAddress {
            device_bus: Some(DeviceBus::Ide),
            device_index: Some(0),
            vmdisk_uuid,
        };

        Self {
            boot: BootConfig {
                boot_device_type: BootDeviceType::Cdrom,
                disk_address: ide0(Some(vmdisk_uuid.clone())),
            },
            memory_mb: VM_MEMORY_MB,
            name: name.into(),
            num_cores_per_vcpu: VM_NUM_CORES_PER_VCPU,
            num_vcpus: VM_NUM_VCPUS,
            storage_container_uuid: container_id.into(),
            vm_features: Map::new(),
            vm_disks: vec![VmDisk {
                disk_address: ide0(None),
                is_cdrom: true,
                is_empty: false,
                vm_disk_clone: Some(VmDiskClone {
                    disk_address: DiskAddress {
                        device_bus: None,
                        device_index: None,
                        vmdisk_uuid: Some(vmdisk_uuid),
                    },
                }),
            }],
        }
    }
}
