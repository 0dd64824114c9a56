//! Generate a tone in a fresh project, shape it, and export it
//!
//! This example shows how to:
//! 1. Check that Audacity's pipes are there
//! 2. Select a region and generate into it
//! 3. Apply effects with default and custom arguments
//! 4. Query project info as JSON
//!
//! # Prerequisites
//!
//! Audacity running with mod-script-pipe enabled (Preferences > Modules).
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=turboaudacity=debug cargo run --example tone_and_fade --features trace
//! ```

use anyhow::{Context, bail};
use tracing_subscriber::EnvFilter;
use turboaudacity::types::{Export, Normalize, SelectTime, Tone};
use turboaudacity::{Client, InfoType, Waveform};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = Client::new();
    if !client.is_connected().await {
        bail!("mod-script-pipe not found; is Audacity running with the module enabled?");
    }

    client.file().new_project().await?;
    client.tracks().new_mono_track().await?;
    client
        .scripting()
        .select_time(SelectTime::new(0.0, 3.0))
        .await?;

    let tone = Tone::builder()
        .frequency(330.0)
        .amplitude(0.6)
        .waveform(Waveform::Sawtooth)
        .build()?;
    client.generate().tone(tone).await?;

    client.effect().normalize(Normalize::default()).await?;
    client
        .scripting()
        .select_time(SelectTime::new(2.0, 3.0))
        .await?;
    client.effect().fade_out().await?;

    let tracks: Vec<serde_json::Value> = client
        .scripting()
        .get_info_json(InfoType::Tracks)
        .await
        .context("reading track list")?;
    println!("Project has {} track(s)", tracks.len());

    let target = std::env::temp_dir().join("turboaudacity_tone.wav");
    client.select().select_all().await?;
    client
        .file()
        .export(Export::new(&target, 1))
        .await
        .with_context(|| format!("exporting to {}", target.display()))?;
    println!("Exported {}", target.display());

    Ok(())
}
