use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use rflink_frame::{DataFrame, RadioFrame};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameOutput {
    dest_address: u8,
    src_address: u8,
    payload_size: usize,
    payload_hex: String,
    payload_text: Option<String>,
    rssi: u8,
    lqi: u8,
}

impl FrameOutput {
    fn from_frame(frame: &RadioFrame) -> Self {
        Self {
            dest_address: frame.dest_address,
            src_address: frame.src_address,
            payload_size: frame.payload.len(),
            payload_hex: hex_string(frame.payload.as_ref()),
            payload_text: std::str::from_utf8(frame.payload.as_ref())
                .ok()
                .map(str::to_string),
            rssi: frame.rssi,
            lqi: frame.lqi,
        }
    }
}

pub fn print_frame(frame: &RadioFrame, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = FrameOutput::from_frame(frame);
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["DEST", "SRC", "SIZE", "RSSI", "LQI", "PAYLOAD"])
                .add_row(vec![
                    format!("0x{:02X}", frame.dest_address),
                    format!("0x{:02X}", frame.src_address),
                    frame.payload.len().to_string(),
                    frame.rssi.to_string(),
                    frame.lqi.to_string(),
                    payload_preview(frame.payload.as_ref()),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            // The codec's own annotated rendering.
            let mut annotated = frame.clone();
            annotated.output_format = rflink_frame::OutputFormat::Annotated;
            let mut out = std::io::stdout();
            let _ = annotated.serialize(&mut out);
            let _ = out.flush();
        }
        OutputFormat::Raw => {
            let mut raw = frame.clone();
            raw.output_format = rflink_frame::OutputFormat::Raw;
            let mut out = std::io::stdout();
            let _ = raw.serialize(&mut out);
            let _ = out.flush();
        }
    }
}

pub fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join("")
}

fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<binary {} bytes>", payload.len()),
    }
}
