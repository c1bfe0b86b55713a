//! Harbor Guard headless runner
//!
//! Plays a session with the autopilot at the controls and logs what a
//! renderer would show. Pass a settings JSON path to override defaults.

use harbor_guard::Settings;
use harbor_guard::autopilot::Autopilot;
use harbor_guard::sim::{Game, GamePhase, RenderSink, RenderSnapshot};

/// Frames simulated before the session is stopped
const SESSION_FRAMES: u64 = 36_000;
/// Rounds played before the session is stopped
const SESSION_ROUNDS: u32 = 3;

/// Render sink that logs phase changes and score updates
#[derive(Default)]
struct LogSink {
    last_phase: Option<GamePhase>,
    last_score: u64,
}

impl RenderSink for LogSink {
    fn present(&mut self, snapshot: &RenderSnapshot) {
        if self.last_phase != Some(snapshot.phase) {
            for line in snapshot.phase.banner() {
                log::info!("{line}");
            }
            self.last_phase = Some(snapshot.phase);
            self.last_score = snapshot.score;
        }
        if snapshot.score != self.last_score {
            log::info!("{}", snapshot.score_label());
            self.last_score = snapshot.score;
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Harbor Guard (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let (tuning, field) = settings.validate()?;

    let mut game = Game::new(tuning, field, settings.seed)?;
    let mut pilot = Autopilot::default();
    let mut sink = LogSink::default();
    let mut scores = Vec::new();

    sink.present(&game.snapshot());
    for _ in 0..SESSION_FRAMES {
        let phase = game.phase();
        if phase == GamePhase::GameOver && game.rounds_started() >= SESSION_ROUNDS {
            break;
        }

        let input = pilot.next_input(&game.snapshot(), &field);
        game.input(&input);
        if game.quit_requested() {
            break;
        }

        let snapshot = game.tick(&field);
        if phase == GamePhase::Playing && snapshot.phase == GamePhase::GameOver {
            scores.push(snapshot.score);
        }
        sink.present(&snapshot);
    }

    log::info!("Rounds: {}, scores: {:?}", game.rounds_started(), scores);
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}
