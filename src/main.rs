use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use trail_ribbon::cli::{Cli, OutputFormat};
use trail_ribbon::export::{write_json, write_obj};
use trail_ribbon::frame::FixedStepFrames;
use trail_ribbon::simulation::simulate;
use trail_ribbon::{TrailConfig, TrailEmitter};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TrailConfig::load(path)
            .with_context(|| format!("Failed to load trail config: {:?}", path))?,
        None => TrailConfig::default(),
    };
    log::info!(
        "Trail config: duration={} interval={} width={}",
        config.duration,
        config.snapshot_interval,
        config.width
    );

    let mut emitter = TrailEmitter::new(config);
    if !emitter.is_emitting() {
        anyhow::bail!("Trail emitter is not emitting; check the config");
    }

    let path = cli.motion_path();
    let mut frames = FixedStepFrames::new(cli.delta);
    if let Some(every) = cli.stall_every {
        frames = frames.with_stalls(every, cli.stall_delta);
    }

    let report = simulate(&mut emitter, path.as_ref(), frames.take(cli.frames));

    let mesh = emitter
        .mesh()
        .context("Trail mesh missing after simulation")?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(output) => {
            let file = File::create(output)
                .with_context(|| format!("Failed to create output file: {:?}", output))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Summary => report.write_summary(&mut out)?,
        OutputFormat::Obj => write_obj(mesh, &mut out)?,
        OutputFormat::Json => write_json(mesh, &mut out)?,
    }
    out.flush().context("Failed to flush output")?;

    if let Some(output) = &cli.output {
        log::info!("Wrote {:?} output to {:?}", cli.format, output);
    }

    Ok(())
}
