mod config;
mod types;
mod stats;

mod engine;
mod ui;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::engine::solver::Solver;
use crate::stats::Stats;
use crate::ui::session::{Reply, Session, HELP};

fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

async fn prompt(out: &mut tokio::io::Stdout) -> Result<()> {
    out.write_all(b"> ").await?;
    out.flush().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let s = Settings::from_env()?;
    let stats = Stats::new(now_ms());

    let solver = Solver {
        ratio_places: s.ratio_places,
        consistency_tolerance: s.tolerance()?,
        stats: stats.clone(),
    };
    tracing::debug!(
        ratio_places = solver.ratio_places,
        consistency_check = solver.consistency_tolerance.is_some(),
        "solver ready"
    );

    let mut session = Session::new(solver, s.show_board);
    let mut out = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n\n{}", HELP, session.board());
    prompt(&mut out).await?;

    while let Some(line) = lines.next_line().await.context("read stdin failed")? {
        match session.handle_line(&line) {
            Some(Reply::Quit) => break,
            Some(Reply::Board(b)) | Some(Reply::Text(b)) => println!("{}", b),
            None => {}
        }
        prompt(&mut out).await?;
    }

    if s.stats_on_exit {
        let ss = stats.snapshot(now_ms());
        let line = serde_json::to_string(&ss).unwrap_or_default();
        tracing::info!(
            up_sec = ss.up_sec,
            commands = ss.commands,
            solves = ss.solves,
            skips = ss.skips,
            clears = ss.clears,
            keystrokes = ss.keystrokes,
            json = %line,
            "stats"
        );
    }

    Ok(())
}
