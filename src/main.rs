//! Reel simulator CLI - Run a scripted spin from a JSON scenario.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use reel_engine::{
    engine::{Reel, ReelEnv, ReelPhase, ReelStats, SymbolRng},
    schema::{DEFAULT_SPIN_SOUND, Scenario},
    services::{AudioService, SilentBackend, SoundBank, TextureAtlas},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <scenario.json>", args[0]);
        eprintln!();
        eprintln!("Spin a reel at cruise speed, release it and run until it settles.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  scenario.json  Path to scenario file");
        eprintln!();
        eprintln!("An example scenario is printed with the --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_scenario();
        return;
    }

    let scenario_path = PathBuf::from(&args[1]);
    let scenario = Scenario::load(&scenario_path).unwrap_or_else(|e| {
        eprintln!("Error loading scenario: {}", e);
        std::process::exit(1);
    });

    let textures = TextureAtlas::from_names(scenario.reel.symbols.iter().cloned());
    let audio = Arc::new(SoundBank::<SilentBackend>::default());
    audio.add(
        &scenario.reel.spin_sound,
        &format!("assets/sounds/{}.webm", scenario.reel.spin_sound),
    );
    let rng = scenario.seed.map_or_else(SymbolRng::random, SymbolRng::new);

    let env = ReelEnv::new(Arc::new(textures), audio.clone(), rng);
    let mut reel = Reel::new(scenario.reel.clone(), env).unwrap_or_else(|e| {
        eprintln!("Error creating reel: {}", e);
        std::process::exit(1);
    });

    println!("Reel Simulation");
    println!("===============");
    println!(
        "Strip: {} symbols x {} units",
        reel.symbol_count(),
        reel.symbol_size()
    );
    println!("Cruise speed: {} units/s", reel.config().cruise_speed);
    println!("Spin frames: {}", scenario.spin_frames);
    println!("Max frames: {}", scenario.max_frames);
    println!();

    let initial = ReelStats::from_reel(&reel);
    println!("Initial strip: {:?}", initial.symbols);
    println!();

    println!("Running simulation...");
    let start = Instant::now();

    audio.play(&scenario.reel.spin_sound);
    reel.start_spin();

    let mut frames = 0;
    let mut stop_frame = None;
    while frames < scenario.max_frames {
        if frames == scenario.spin_frames {
            reel.stop_spin();
            stop_frame = Some(frames);
        }

        reel.update(scenario.delta_at(frames));
        frames += 1;

        if frames % 30 == 0 {
            let stats = ReelStats::from_reel(&reel);
            println!(
                "  Frame {}: phase={:?}, speed={:.1}, offset={:.1}",
                frames,
                stats.phase,
                stats.speed,
                stats.offset()
            );
        }

        if stop_frame.is_some() && reel.phase() == ReelPhase::Resting {
            break;
        }
    }

    let elapsed = start.elapsed();
    let final_stats = ReelStats::from_reel(&reel);

    println!();
    println!("Final state:");
    println!("  Phase: {:?}", final_stats.phase);
    println!("  Speed: {:.3}", final_stats.speed);
    println!("  Grid aligned: {}", final_stats.grid_aligned);
    println!("  Strip: {:?}", final_stats.symbols);
    if let Some(stop) = stop_frame {
        println!("  Settled {} frames after release", frames - stop);
    }
    println!();
    println!(
        "Time: {:.2}ms ({} frames)",
        elapsed.as_secs_f64() * 1000.0,
        frames
    );
}

fn print_example_scenario() {
    let scenario = Scenario::default();

    println!("Example scenario (scenario.json):");
    match serde_json::to_string_pretty(&scenario) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing scenario: {}", e),
    }
    println!();
    println!("The spin sound alias defaults to {:?}.", DEFAULT_SPIN_SOUND);
}
