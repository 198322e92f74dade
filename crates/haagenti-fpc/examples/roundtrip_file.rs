//! Round-trip a file of raw floating-point values through FPC.
//!
//! Reads the file, compresses it, decompresses the result and reports the
//! ratio, timings and the first differing byte if the round trip fails.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p haagenti-fpc --example roundtrip_file --release -- data.f64
//! cargo run -p haagenti-fpc --example roundtrip_file --release -- data.f32 config.json
//! ```
//!
//! `config.json` holds an [`FpcConfig`], e.g.
//! `{"float_width": 4, "level": 16, "byte_order": "little"}`.
//! Set `RUST_LOG=haagenti_fpc=trace` for per-chunk logging.

use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use haagenti_core::{CompressionRatio, Decompressor};
use haagenti_fpc::{FpcCodec, FpcConfig};
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<String>) -> Result<FpcConfig, String> {
    let Some(path) = path else {
        return Ok(FpcConfig::default());
    };
    let text = fs::read_to_string(&path).map_err(|e| format!("{}: {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| format!("{}: invalid config: {}", path, e))
}

fn run() -> Result<bool, String> {
    let mut args = env::args().skip(1);
    let input_path = args
        .next()
        .ok_or_else(|| "usage: roundtrip_file <input> [config.json]".to_string())?;
    let config = load_config(args.next())?;

    let data = fs::read(&input_path).map_err(|e| format!("{}: {}", input_path, e))?;
    let codec = FpcCodec::from_config(config).map_err(|e| e.to_string())?;

    println!("Input:  {} ({} bytes)", input_path, data.len());
    println!(
        "Config: width={} level={} byte_order={:?}",
        config.float_width.bytes(),
        config.level,
        config.byte_order
    );

    let (compressed, stats) = codec
        .compress_with_stats(&data)
        .map_err(|e| e.to_string())?;

    let start = Instant::now();
    let restored = codec
        .decompress(&compressed, data.len())
        .map_err(|e| e.to_string())?;
    let decompress_time = start.elapsed();

    let ratio = CompressionRatio::new(data.len(), compressed.len());
    println!();
    println!(
        "Compressed:   {} bytes ({:.3}x, {:.1}% saved)",
        compressed.len(),
        ratio.ratio(),
        ratio.savings_percent()
    );
    println!(
        "Compress:     {} us ({:.1} MB/s)",
        stats.time_us,
        stats.throughput_mbs()
    );
    println!("Decompress:   {:?}", decompress_time);

    match data.iter().zip(&restored).position(|(a, b)| a != b) {
        Some(offset) => {
            println!(
                "MISMATCH at byte {} (element {})",
                offset,
                offset / config.float_width.bytes()
            );
            Ok(false)
        }
        None => {
            println!("Round trip: OK");
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
