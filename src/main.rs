//! Poker Dice entry point
//!
//! The real game runs inside an AR host. Natively this plays a scripted
//! session against the headless host and prints what happened.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Poker Dice (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => poker_dice::Settings::load_or_default(path),
        None => poker_dice::Settings::default(),
    };

    run_demo(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly; there is no wasm entry point
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(settings: &poker_dice::Settings) {
    use glam::{Vec2, Vec3};
    use poker_dice::platform::HeadlessHost;
    use poker_dice::sim::{AnchorId, DiceGame, GameEvent, begin, tick};

    let mut game = DiceGame::new(settings);
    let mut host = HeadlessHost::with_camera_at(Vec3::new(0.0, 0.3, 0.0));

    let report = |step: &str, game: &DiceGame| {
        println!(
            "{:<22} state={:?} hand={} table={} status={:?}",
            step,
            game.state(),
            game.inventory().count(),
            game.dice_in_play(),
            game.status_text()
        );
    };

    begin(&mut game, &mut host);
    report("session started", &game);

    // Scan the table
    game.post(GameEvent::SurfaceAdded {
        anchor: AnchorId(1),
        center: Vec3::ZERO,
        extent: Vec3::new(1.2, 0.0, 0.8),
    });
    tick(&mut game, &mut host);
    report("surface detected", &game);

    game.post(GameEvent::Start);
    tick(&mut game, &mut host);
    report("start pressed", &game);

    // Aim at the table
    host.set_surface_hits(&[Vec3::new(0.0, -0.4, -0.9)]);
    tick(&mut game, &mut host);
    report("surface in focus", &game);

    game.post(GameEvent::CycleStyle);
    game.post(GameEvent::SwipeUp);
    tick(&mut game, &mut host);
    report("swiped up", &game);

    // One die rolls off the table, the player picks up another
    let ids: Vec<_> = game.live_dice().map(|(id, _)| id).collect();
    if let [first, second, ..] = ids.as_slice() {
        host.set_die_position(*first, Vec3::new(0.2, -2.5, -1.0));
        host.set_die_screen_point(*second, Vec2::new(180.0, 420.0));
        game.post(GameEvent::Tap(Vec2::new(182.0, 418.0)));
    }
    tick(&mut game, &mut host);
    report("fell + tapped", &game);

    game.post(GameEvent::Reset);
    tick(&mut game, &mut host);
    report("reset", &game);

    println!(
        "\n✓ {} dice spawned, {} removed, {} session runs",
        host.spawned.len(),
        host.removed.len(),
        host.runs.len()
    );
}
