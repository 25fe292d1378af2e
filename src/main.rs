//! Chimp Punch entry point
//!
//! Runs a scripted session against the headless display so the whole loop
//! can be exercised from a terminal. A windowed build supplies its own
//! `DisplaySurface` and `InputSource`.

use std::fs;
use std::path::Path;

use anyhow::Context;
use glam::IVec2;

use chimp_punch::assets::{ManifestAssets, asset_path};
use chimp_punch::audio::AudioManager;
use chimp_punch::consts::*;
use chimp_punch::platform::{HeadlessDisplay, ScriptedInput, SystemClock};
use chimp_punch::{Demo, Settings, Tuning};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("{WINDOW_TITLE} (headless) starting...");

    let settings = Settings::load();
    let data_dir = Path::new("data");
    let tuning = load_tuning(data_dir)?;

    let mut assets = ManifestAssets::new(data_dir)
        .with_asset(CHIMP_ASSET, IVec2::new(64, 60))
        .with_asset(FIST_ASSET, IVec2::new(88, 96));
    let audio = AudioManager::new(None, &settings).context("loading sound cues")?;

    // Ten seconds of sweeping along the chimp's row, swinging every 20 ticks
    let input = ScriptedInput::sweep(10 * TARGET_FPS, 20, 290);

    let mut demo = Demo::new(
        &mut assets,
        audio,
        HeadlessDisplay::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        input,
        SystemClock::new(),
        settings,
        &tuning,
    )
    .context("starting demo")?;

    let stats = demo.run().context("running frame loop")?;
    println!(
        "{} ticks, {} hits, {} misses",
        stats.ticks, stats.hits, stats.misses
    );
    Ok(())
}

/// Optional `tuning.json` in the data directory overrides the gameplay numbers
fn load_tuning(data_dir: &Path) -> anyhow::Result<Tuning> {
    let path = asset_path(data_dir, TUNING_FILE);
    if !path.exists() {
        return Ok(Tuning::default());
    }
    let json = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let tuning =
        Tuning::from_json(&json).with_context(|| format!("parsing {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}
