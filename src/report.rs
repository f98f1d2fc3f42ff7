use std::fmt::Write as _;

use serde::Serialize;

use crate::engine::{Board, Ghost, Movable};
use crate::types::{GhostColor, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GhostLine {
    pub color: GhostColor,
    pub x: i32,
    pub y: i32,
}

/// Final positions: PackMan first, then ghosts in report order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub packman: Vec2,
    pub ghosts: Vec<GhostLine>,
}

/// Report order for ghosts: ascending x, then ascending y, blue before red on a
/// shared cell.
pub fn ghost_order_key(line: &GhostLine) -> (i32, i32, GhostColor) {
    (line.x, line.y, line.color)
}

pub fn build_report(board: &Board) -> Report {
    let mut ghosts: Vec<GhostLine> = board.ghosts().iter().map(ghost_line).collect();
    ghosts.sort_by_key(ghost_order_key);
    Report {
        packman: board.packman().position(),
        ghosts,
    }
}

fn ghost_line(ghost: &Ghost) -> GhostLine {
    let Vec2 { x, y } = ghost.position();
    GhostLine {
        color: ghost.color(),
        x,
        y,
    }
}

/// One line per entity: `"x y"` for PackMan, `"C x y"` for each ghost.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", report.packman.x, report.packman.y);
    for ghost in &report.ghosts {
        let _ = writeln!(out, "{} {} {}", ghost.color.letter(), ghost.x, ghost.y);
    }
    out
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PackMan;
    use crate::types::Direction::{Right, Up};

    fn line(color: GhostColor, x: i32, y: i32) -> GhostLine {
        GhostLine { color, x, y }
    }

    #[test]
    fn ghosts_sort_by_x_then_y_then_color() {
        let mut lines = vec![
            line(GhostColor::Red, 3, 5),
            line(GhostColor::Blue, 2, 9),
            line(GhostColor::Red, 2, 9),
            line(GhostColor::Blue, 2, 1),
        ];
        lines.sort_by_key(ghost_order_key);
        assert_eq!(
            lines,
            vec![
                line(GhostColor::Blue, 2, 1),
                line(GhostColor::Blue, 2, 9),
                line(GhostColor::Red, 2, 9),
                line(GhostColor::Red, 3, 5),
            ]
        );
    }

    #[test]
    fn color_breaks_ties_regardless_of_input_order() {
        let mut lines = vec![line(GhostColor::Red, 1, 1), line(GhostColor::Blue, 1, 1)];
        lines.sort_by_key(ghost_order_key);
        assert_eq!(lines[0].color, GhostColor::Blue);
        assert_eq!(lines[1].color, GhostColor::Red);
    }

    #[test]
    fn report_for_sample_game() {
        let mut board = Board::new(
            5,
            PackMan::new(Vec2::new(3, 3), vec![Up, Up, Right, Right]),
            vec![
                Ghost::new(GhostColor::Red, Vec2::new(1, 1)),
                Ghost::new(GhostColor::Blue, Vec2::new(5, 5)),
            ],
            4,
        );
        board.play();
        let report = build_report(&board);
        assert_eq!(render_text(&report), "5 5\nB 5 1\nR 5 1\n");
    }

    #[test]
    fn report_without_ghosts_is_a_single_line() {
        let board = Board::new(4, PackMan::new(Vec2::new(2, 3), Vec::new()), Vec::new(), 0);
        assert_eq!(render_text(&build_report(&board)), "2 3\n");
    }

    #[test]
    fn json_report_uses_color_letters() {
        let report = Report {
            packman: Vec2::new(1, 2),
            ghosts: vec![line(GhostColor::Blue, 3, 4), line(GhostColor::Red, 5, 6)],
        };
        let json = render_json(&report).expect("report should serialize");
        assert_eq!(
            json,
            r#"{"packman":{"x":1,"y":2},"ghosts":[{"color":"B","x":3,"y":4},{"color":"R","x":5,"y":6}]}"#
        );
    }
}
