use clap::Parser;
use prism_vm_provision::{DEFAULT_PRISM_PORT, ImageType};

/// Import a disk/ISO image into a Prism storage container and boot a VM from it.
///
/// Any value not passed as a flag is asked for interactively. The password
/// is always prompted for.
#[derive(Debug, Parser)]
#[command(name = "prism-vm-provision", version, about)]
pub struct Args {
    /// Prism Element cluster address
    #[arg(long)]
    pub host: Option<String>,

    /// Prism gateway port
    #[arg(long, default_value_t = DEFAULT_PRISM_PORT)]
    pub port: u16,

    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Search string of the storage container receiving the image
    #[arg(long)]
    pub container: Option<String>,

    #[arg(long)]
    pub image_name: Option<String>,

    /// 1 for DISK_IMAGE, anything else for ISO_IMAGE
    #[arg(long, allow_negative_numbers = true, value_parser = parse_image_type)]
    pub image_type: Option<ImageType>,

    /// URL the cluster downloads the image from
    #[arg(long)]
    pub image_url: Option<String>,

    #[arg(long)]
    pub vm_name: Option<String>,

    /// Seconds between two task polls
    #[arg(long, default_value_t = 2)]
    pub poll_interval_secs: u64,

    /// Give up on a task after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Validate the cluster's TLS certificate
    #[arg(long)]
    pub verify_tls: bool,

    /// Log requests and polls to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub(crate) fn parse_image_type(value: &str) -> Result<ImageType, String> {
    ImageType::parse_selection(value).ok_or_else(|| format!("'{}' is not an integer", value))
}
