use std::io::Read;

use rflink_channel::MemoryChannel;
use rflink_frame::{DataFrame, RadioFrame};

use crate::cmd::{parse_hex, DecodeArgs};
use crate::exit::{frame_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let hex = match args.hex {
        Some(hex) => hex,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| crate::exit::io_error("failed reading stdin", err))?;
            buf
        }
    };
    let wire = parse_hex(&hex)?;
    if wire.is_empty() {
        return Err(CliError::new(USAGE, "no wire bytes to decode"));
    }

    // Run the captured bytes through the same decode path a live channel
    // uses, quality bytes included.
    let mut channel = MemoryChannel::new();
    channel.stage_bytes(&wire);

    let mut frame = RadioFrame::new(rflink_frame::OutputFormat::Raw);
    frame
        .receive(&mut channel)
        .map_err(|err| frame_error("decode failed", err))?;

    print_frame(&frame, format);
    Ok(SUCCESS)
}
