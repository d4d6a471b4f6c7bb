use std::path::Path;

use chrono::{DateTime, Local};
use clap::Parser;

use mediacaps::filter::{FilterState, HwFilter, TypeFilter};
use mediacaps::report::build_codec_blocks;
use mediacaps::snapshot::{CapsSnapshot, DeviceInfo, load_snapshot};

#[derive(Parser)]
#[command(
    name = "caps-info",
    about = "Display and filter a device codec capability report"
)]
struct Args {
    /// Input snapshot file (.json or .json.gz)
    #[arg(short = 'f', long = "file")]
    file: Option<String>,

    /// Input snapshot file (positional)
    #[arg(conflicts_with = "file", required_unless_present_any = ["file", "schema", "version"])]
    input: Option<String>,

    /// Show only blocks containing this text (case-insensitive)
    #[arg(short = 'q', long = "query", default_value = "")]
    query: String,

    /// Hardware/software filter
    #[arg(long = "hw", default_value = "all", value_parser = parse_hw_filter)]
    hw: HwFilter,

    /// Audio/video filter
    #[arg(long = "type", default_value = "all", value_parser = parse_type_filter)]
    ty: TypeFilter,

    /// Output the report blocks as JSON
    #[arg(long)]
    json: bool,

    /// Print JSON schema for the snapshot format and exit
    #[arg(long)]
    schema: bool,

    /// Prepend a device/timestamp header to the report
    #[arg(long)]
    export: bool,

    /// Display version and quit
    #[arg(long)]
    version: bool,
}

fn parse_hw_filter(s: &str) -> Result<HwFilter, String> {
    match s.to_ascii_lowercase().as_str() {
        "all" => Ok(HwFilter::All),
        "hw" => Ok(HwFilter::Hw),
        "sw" => Ok(HwFilter::Sw),
        other => Err(format!("unknown filter '{other}' (expected all, hw or sw)")),
    }
}

fn parse_type_filter(s: &str) -> Result<TypeFilter, String> {
    match s.to_ascii_lowercase().as_str() {
        "all" => Ok(TypeFilter::All),
        "video" => Ok(TypeFilter::Video),
        "audio" => Ok(TypeFilter::Audio),
        other => Err(format!(
            "unknown filter '{other}' (expected all, video or audio)"
        )),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    // Reset SIGPIPE to default so piped output (e.g. head/tail) exits cleanly
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.version {
        mediacaps::version::print_cli_version_banner(
            "Codec Capability Report Tool",
            env!("CARGO_PKG_VERSION"),
            env!("RELEASE_VERSION"),
            env!("GIT_COMMIT"),
        );
        return Ok(());
    }

    if args.schema {
        let schema = schemars::schema_for!(CapsSnapshot);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let file = args
        .file
        .as_deref()
        .or(args.input.as_deref())
        .ok_or("snapshot file argument required")?;
    let snapshot = load_snapshot(Path::new(file))?;

    let blocks = build_codec_blocks(&snapshot);
    log::debug!("built {} report blocks from {}", blocks.len(), file);

    if args.json {
        println!("{}", serde_json::to_string(&blocks)?);
        return Ok(());
    }

    let state = FilterState {
        hw: args.hw,
        ty: args.ty,
        query: args.query.clone(),
    };
    let report = mediacaps::filter::render(&blocks, &state);

    if args.export {
        print!("{}", export_header(&snapshot.device, Local::now()));
    }
    print!("{report}");

    Ok(())
}

/// Header prepended to exported reports: device identity plus timestamp.
fn export_header(device: &DeviceInfo, at: DateTime<Local>) -> String {
    format!(
        "Device: {} {}\nDate: {}\n\n",
        device.manufacturer,
        device.model,
        at.format("%Y-%m-%d %H:%M:%S"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_hw_filter_accepts_known_states() {
        assert_eq!(parse_hw_filter("all").unwrap(), HwFilter::All);
        assert_eq!(parse_hw_filter("HW").unwrap(), HwFilter::Hw);
        assert_eq!(parse_hw_filter("sw").unwrap(), HwFilter::Sw);
        assert!(parse_hw_filter("hardware").is_err());
    }

    #[test]
    fn parse_type_filter_accepts_known_states() {
        assert_eq!(parse_type_filter("all").unwrap(), TypeFilter::All);
        assert_eq!(parse_type_filter("VIDEO").unwrap(), TypeFilter::Video);
        assert_eq!(parse_type_filter("audio").unwrap(), TypeFilter::Audio);
        assert!(parse_type_filter("both").is_err());
    }

    #[test]
    fn export_header_formats_device_and_timestamp() {
        let device = DeviceInfo {
            manufacturer: "Google".to_string(),
            model: "Pixel 8".to_string(),
            android_version: None,
        };
        let at = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        assert_eq!(
            export_header(&device, at),
            "Device: Google Pixel 8\nDate: 2026-01-02 03:04:05\n\n"
        );
    }

    #[test]
    fn export_header_degrades_to_empty_fields() {
        let at = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let header = export_header(&DeviceInfo::default(), at);
        assert!(header.starts_with("Device:  \n"));
    }
}
