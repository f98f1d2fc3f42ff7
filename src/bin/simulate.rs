use chrono::{SecondsFormat, Utc};
use clap::{Parser, ValueEnum};
use packman_chase::constants::MAX_MOVE_COUNT;
use packman_chase::engine::Board;
use packman_chase::error::SetupError;
use packman_chase::input::{read_game, ParseOptions};
use packman_chase::report::{build_report, render_json, render_text, Report};
use packman_chase::types::{BoardEvent, EndReason, GameSetup};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Game description file; stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long)]
    max_moves: Option<usize>,
    #[arg(long)]
    summary_out: Option<PathBuf>,
    #[arg(long)]
    run_id: Option<String>,
    /// Suppress the JSON log lines on stderr.
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, Serialize)]
struct RunSummary {
    #[serde(rename = "runId")]
    run_id: String,
    #[serde(rename = "startedAtMs")]
    started_at_ms: u64,
    #[serde(rename = "finishedAt")]
    finished_at: String,
    #[serde(rename = "boardSize")]
    board_size: i32,
    #[serde(rename = "ghostCount")]
    ghost_count: usize,
    #[serde(rename = "moveCount")]
    move_count: usize,
    #[serde(rename = "ticksPlayed")]
    ticks_played: u64,
    reason: EndReason,
    #[serde(rename = "collisionTick")]
    collision_tick: Option<u64>,
    report: Report,
}

#[derive(Clone, Debug, Serialize)]
struct StructuredLogLine {
    #[serde(rename = "timestampMs")]
    timestamp_ms: u64,
    level: String,
    event: String,
    #[serde(rename = "runId")]
    run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tick: Option<u64>,
    details: Value,
}

struct Logger {
    run_id: String,
    enabled: bool,
}

impl Logger {
    fn emit(&self, level: &str, event: &str, tick: Option<u64>, details: Value) {
        if !self.enabled {
            return;
        }
        let line = log_line(level, event, &self.run_id, tick, details);
        eprintln!(
            "{}",
            serde_json::to_string(&line).expect("structured log should serialize")
        );
    }
}

fn main() {
    let cli = Cli::parse();
    let started_at_ms = now_ms();
    let logger = Logger {
        run_id: cli
            .run_id
            .clone()
            .unwrap_or_else(|| default_run_id(started_at_ms)),
        enabled: !cli.quiet,
    };
    let options = ParseOptions {
        max_moves: cli.max_moves.unwrap_or(MAX_MOVE_COUNT),
        ..ParseOptions::default()
    };

    let setup = match load_setup(cli.input.as_deref(), &options) {
        Ok(setup) => setup,
        Err(error) => {
            logger.emit(
                "error",
                "setup_failed",
                None,
                json!({
                    "error": error.to_string(),
                }),
            );
            println!("{error}");
            std::process::exit(2);
        }
    };

    logger.emit(
        "info",
        "simulation_started",
        None,
        json!({
            "boardSize": setup.board_size,
            "ghostCount": setup.ghosts.len(),
            "moveCount": setup.moves.len(),
        }),
    );

    let mut board = Board::from_setup(setup);
    let reason = run_board(&mut board, &logger);
    let report = build_report(&board);

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!(
            "{}",
            render_json(&report).expect("report should serialize")
        ),
    }

    logger.emit(
        "info",
        "simulation_finished",
        Some(board.tick()),
        json!({
            "reason": reason,
            "ticksPlayed": board.tick(),
            "moveCount": board.move_count(),
        }),
    );

    if let Some(path) = cli.summary_out.as_ref() {
        let summary = build_run_summary(
            logger.run_id.clone(),
            started_at_ms,
            &board,
            reason,
            report,
        );
        if let Err(error) = write_summary(path, &summary) {
            logger.emit(
                "error",
                "summary_write_failed",
                None,
                json!({
                    "path": path.to_string_lossy(),
                    "error": error.to_string(),
                }),
            );
            std::process::exit(2);
        }
    }
}

fn load_setup(path: Option<&Path>, options: &ParseOptions) -> Result<GameSetup, SetupError> {
    match path {
        Some(path) => read_game(BufReader::new(File::open(path)?), options),
        None => read_game(io::stdin().lock(), options),
    }
}

fn run_board(board: &mut Board, logger: &Logger) -> EndReason {
    loop {
        let running = board.step();
        for event in board.drain_events() {
            log_board_event(logger, &event);
        }
        if !running {
            break;
        }
    }
    board.end_reason().unwrap_or(EndReason::MovesExhausted)
}

fn log_board_event(logger: &Logger, event: &BoardEvent) {
    match event {
        BoardEvent::PathExhausted { tick } => {
            logger.emit("info", "path_exhausted", Some(*tick), json!({}));
        }
        BoardEvent::Collision { tick, x, y, colors } => {
            logger.emit(
                "info",
                "collision_detected",
                Some(*tick),
                json!({
                    "x": x,
                    "y": y,
                    "colors": colors,
                }),
            );
        }
    }
}

fn log_line(
    level: &str,
    event: &str,
    run_id: &str,
    tick: Option<u64>,
    details: Value,
) -> StructuredLogLine {
    StructuredLogLine {
        timestamp_ms: now_ms(),
        level: level.to_string(),
        event: event.to_string(),
        run_id: run_id.to_string(),
        tick,
        details,
    }
}

fn build_run_summary(
    run_id: String,
    started_at_ms: u64,
    board: &Board,
    reason: EndReason,
    report: Report,
) -> RunSummary {
    let collision_tick = match reason {
        EndReason::Collision { tick } => Some(tick),
        EndReason::MovesExhausted => None,
    };
    RunSummary {
        run_id,
        started_at_ms,
        finished_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        board_size: board.board_size(),
        ghost_count: board.ghosts().len(),
        move_count: board.move_count(),
        ticks_played: board.tick(),
        reason,
        collision_tick,
        report,
    }
}

fn default_run_id(timestamp_ms: u64) -> String {
    format!("chase-{timestamp_ms}")
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn write_summary(path: &Path, summary: &RunSummary) -> io::Result<()> {
    let summary_text = serde_json::to_string_pretty(summary).expect("run summary should serialize");
    std::fs::write(path, summary_text)
}
