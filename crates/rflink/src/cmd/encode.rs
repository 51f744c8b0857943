use std::fs;
use std::io::{IsTerminal, Write};

use bytes::BytesMut;
use rflink_frame::codec::encode_frame;

use crate::cmd::{parse_hex, EncodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::hex_string;

pub fn run(args: EncodeArgs) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;

    let mut wire = BytesMut::new();
    encode_frame(args.dest, args.src, &payload, &mut wire)
        .map_err(|err| frame_error("encode failed", err))?;

    // Hex to a terminal, raw bytes into a pipe. Quality bytes only exist
    // on received frames, so none are emitted here.
    let mut out = std::io::stdout();
    if out.is_terminal() {
        println!("{}", hex_string(&wire));
    } else {
        out.write_all(&wire)
            .and_then(|()| out.flush())
            .map_err(|err| crate::exit::io_error("write failed", err))?;
    }

    Ok(SUCCESS)
}

fn resolve_payload(args: &EncodeArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(path) = &args.file {
        return fs::read(path).map_err(|err| {
            crate::exit::io_error(&format!("failed reading {}", path.display()), err)
        });
    }
    Ok(Vec::new())
}
