// Offline utility: run one schedule request without starting the HTTP server.
//
// Usage:
//   cargo run --bin generate_schedule -- <request.json | -> [--seed N]
//
// Reads the same JSON body as POST /api/generate-shift and prints the response.
// Exit code is 0 on success, 1 on validation failure.

use anyhow::{bail, Context};
use shift_optimizer::config::ConfigManager;
use shift_optimizer::{i18n, logging, GenerateShiftRequest, ShiftApi};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let source = args
        .next()
        .context("usage: generate_schedule <request.json | -> [--seed N]")?;

    let mut seed = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let raw = args.next().context("--seed requires a value")?;
                seed = Some(raw.parse::<u64>().with_context(|| format!("invalid seed: {}", raw))?);
            }
            other => bail!("unknown argument: {}", other),
        }
    }

    let body = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(&source).with_context(|| format!("failed to read {}", source))?
    };

    let mut request: GenerateShiftRequest =
        serde_json::from_str(&body).context("malformed request JSON")?;
    if seed.is_some() {
        request.seed = seed;
    }

    let config = ConfigManager::load()?.into_config();
    i18n::set_locale(&config.locale);

    let response = ShiftApi::from_config(&config).respond(&request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.success {
        std::process::exit(1);
    }
    Ok(())
}
