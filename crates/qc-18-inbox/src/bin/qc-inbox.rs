//! qc-inbox: offline payload encoder for the cross-layer inbox.
//!
//! Reconstructs the exact payload and fingerprint the inbox hands to the
//! sequencer, without touching a live node.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;

use qc_18_inbox::domain::decode_prefixed_hex;
use qc_18_inbox::{
    fingerprint, init_logging, Hash, InboxConfig, InboxRequest, LoggingConfig, MessageKind, U256,
};

/// qc-inbox: encode and fingerprint inbox requests
#[derive(Parser, Debug)]
#[command(name = "qc-inbox")]
#[command(about = "Offline payload encoder for the cross-layer inbox")]
#[command(version)]
struct Args {
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a request described as JSON
    Encode {
        /// Request JSON, or `@path` to read it from a file
        #[arg(short, long)]
        request: String,

        /// Attached value, decimal or 0x-prefixed hex
        #[arg(short, long, default_value = "0")]
        value: String,
    },
    /// Fingerprint an already packed payload
    Fingerprint {
        /// Payload bytes as hex
        payload: String,
    },
    /// List message kinds and their tags
    Kinds,
}

#[derive(Serialize)]
struct EncodeOutput {
    kind: String,
    tag: u8,
    payable: bool,
    echoed: bool,
    length: usize,
    payload: String,
    fingerprint: Hash,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&LoggingConfig::from_env())?;

    match args.command {
        Command::Encode { request, value } => encode(&request, &value, args.json),
        Command::Fingerprint { payload } => {
            let bytes = decode_prefixed_hex(&payload).context("payload is not valid hex")?;
            let digest = fingerprint(&bytes);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&digest)?);
            } else {
                println!("{digest:?}");
            }
            Ok(())
        }
        Command::Kinds => {
            for kind in MessageKind::ALL {
                println!("{:>3}  {kind}", kind.tag());
            }
            Ok(())
        }
    }
}

fn encode(request: &str, value: &str, json: bool) -> Result<()> {
    let raw = match request.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}"))?,
        None => request.to_string(),
    };
    let request: InboxRequest = serde_json::from_str(&raw).context("invalid request JSON")?;
    let value = parse_value(value)?;
    let output = encode_request(&request, value)?;

    let max = InboxConfig::from_env().max_data_size;
    if output.length > max {
        tracing::warn!(
            len = output.length,
            max,
            "[qc-18] Payload exceeds inbox ceiling"
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("kind:        {}", output.kind);
        println!("tag:         {}", output.tag);
        println!("length:      {}", output.length);
        println!("payload:     {}", output.payload);
        println!("fingerprint: {:?}", output.fingerprint);
    }
    Ok(())
}

fn encode_request(request: &InboxRequest, value: U256) -> Result<EncodeOutput> {
    if !request.is_payable() && !value.is_zero() {
        return Err(anyhow!("{} does not accept attached value", request.kind()));
    }

    let payload = request.encode(value);
    let kind = request.kind();
    Ok(EncodeOutput {
        kind: kind.to_string(),
        tag: kind.tag(),
        payable: request.is_payable(),
        echoed: request.echoes_payload(),
        length: payload.len(),
        payload: format!("0x{}", hex::encode(&payload)),
        fingerprint: fingerprint(&payload),
    })
}

fn parse_value(raw: &str) -> Result<U256> {
    match raw.strip_prefix("0x") {
        Some(digits) => U256::from_str_radix(digits, 16)
            .map_err(|e| anyhow!("invalid hex value {raw}: {e:?}")),
        None => U256::from_dec_str(raw).map_err(|e| anyhow!("invalid value {raw}: {e:?}")),
    }
}
