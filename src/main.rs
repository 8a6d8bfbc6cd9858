use glint::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--headless") => {
            let ticks = args.next().and_then(|s| s.parse().ok()).unwrap_or(240);
            headless(ticks)
        }
        _ => Ok(glint::run(EngineConfig::default())?),
    }
}

/// Render a scripted pointer sweep into a pixmap and save it as a PNG.
fn headless(ticks: u64) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (640u32, 360u32);
    let mut engine = Engine::with_seed(EngineConfig::default(), 0xC0FFEE);
    let mut pixmap = Pixmap::new(width, height);

    let ran = TickLoop::new().run_with(&mut engine, &mut pixmap, Some(ticks), |engine, tick| {
        // Sweep the pointer along a sine path, as a hand might.
        let t = tick as f32 / 60.0;
        engine.pointer_moved(Vec2::new(
            (0.1 + 0.8 * (t * 0.25).fract()) * width as f32,
            (0.5 + 0.3 * (t * std::f32::consts::TAU).sin()) * height as f32,
        ));
    });

    pixmap.save_png("glint.png")?;
    log::info!(
        "ran {} ticks, {} particles live, wrote glint.png",
        ran,
        engine.particle_count()
    );
    Ok(())
}
