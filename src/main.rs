use std::collections::BTreeMap;

use clap::Parser;
use hecs::World;
use reef::components::{ContactKind, Motion};
use reef::config::PhysicsConfig;
use reef::scene::demo_scene::load_demo_scene;
use reef::systems::{LineRecorder, PhysicsSystem};

#[derive(Parser)]
#[command(name = "reef", about = "Headless run of the reef physics core")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Milliseconds elapsed per frame
    #[arg(long, default_value_t = 16.0)]
    elapsed_ms: f32,

    /// View width in pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f32,

    /// View height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Collect debug overlay lines every frame
    #[arg(long)]
    debug: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut world = World::new();
    let (meshes, agent) = load_demo_scene(&mut world, args.width, args.height);

    let mut physics = PhysicsSystem::new(PhysicsConfig::default().with_debug(args.debug));
    let mut overlay = LineRecorder::default();
    let mut contacts: BTreeMap<&'static str, usize> = BTreeMap::new();

    for frame in 0..args.frames {
        overlay.lines.clear();
        physics.step(
            &mut world,
            &meshes,
            args.elapsed_ms,
            args.width,
            args.height,
            &mut overlay,
        );

        for event in physics.drain_collisions() {
            let label = match event.classify(&world) {
                ContactKind::AgentHazard => "agent/hazard",
                ContactKind::AgentConsumable => "agent/consumable",
                ContactKind::AgentHazardZone => "agent/zone",
                ContactKind::ZoneSwallow { .. } => "zone/other",
                ContactKind::Bodies => "bodies",
            };
            *contacts.entry(label).or_default() += 1;
        }

        if frame % 60 == 0 {
            if let Ok(motion) = world.get::<&Motion>(agent) {
                tracing::info!(
                    frame,
                    x = motion.position.x,
                    y = motion.position.y,
                    debug_lines = overlay.lines.len(),
                    "agent"
                );
            }
        }
    }

    println!("simulated {} frames of {} ms", args.frames, args.elapsed_ms);
    for (label, count) in &contacts {
        println!("  {label:<18} {count}");
    }
}
