//! One-shot engine query for a board given on the command line.

use anyhow::{Context, Result, bail};
use tracing::{info, instrument, warn};
use unbeatable_tictactoe::{Board, Player, Position, SearchReport, analyze, evaluate_outcome};

/// Parses `text`, runs the search and returns the report.
#[instrument]
pub fn suggest(text: &str) -> Result<(Board, SearchReport)> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board {text:?}"))?;

    let outcome = evaluate_outcome(&board);
    if outcome.is_over() {
        bail!("Board {board} is already decided: {outcome}");
    }

    let (x, o) = (board.count(Player::X), board.count(Player::O));
    if x != o + 1 {
        warn!(x, o, "Board is not O's turn under normal play; searching anyway");
    }

    let report = analyze(&board);
    info!(best = report.best, score = report.score, nodes = report.nodes, "Suggested move");
    Ok((board, report))
}

/// Human-readable report.
pub fn render(board: &Board, report: &SearchReport) -> String {
    let label = Position::from_index(report.best)
        .map(|p| p.label())
        .unwrap_or("?");
    let scores = report
        .candidates
        .iter()
        .map(|c| format!("{}:{}", c.index, c.score))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{}\n\nBest move: {} ({}), score {}\nScores: {}\nPositions searched: {}",
        board.display(),
        report.best,
        label,
        report.score,
        scores,
        report.nodes
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_blocks() {
        let (board, report) = suggest("XX.O.....").unwrap();
        assert_eq!(report.best, 2);
        let text = render(&board, &report);
        assert!(text.starts_with("X|X|3\n-+-+-\nO|5|6"));
        assert!(text.contains("Best move: 2 (Top-right), score -7"));
        assert!(text.contains("Scores: 2:-7 4:-9 5:-9 6:-9 7:-9 8:-9"));
        assert!(text.contains("Positions searched: 1018"));
    }

    #[test]
    fn test_suggest_rejects_decided_board() {
        let err = suggest("XXXOO....").unwrap_err();
        assert!(err.to_string().contains("already decided"));
    }

    #[test]
    fn test_suggest_rejects_garbage() {
        let err = suggest("XX").unwrap_err();
        assert!(err.to_string().contains("Invalid board"));
    }

    #[test]
    fn test_report_serializes() {
        let (_, report) = suggest("XOX.O.OXX").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best"], 5);
        assert_eq!(json["candidates"][0]["index"], 3);
        assert_eq!(json["candidates"][0]["score"], -9);
    }
}
