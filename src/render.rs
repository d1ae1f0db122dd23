//! Plain-terminal rendering of grid snapshots.
//!
//! Produces the `ROUND n:` view shown between rounds: a bordered grid with
//! one ANSI color per team and a census footer. The interactive viewer has
//! its own ratatui rendering; this module covers the scrolling output of
//! the `run` command and anything else that wants a string.

use crossterm::style::{Color, Stylize};

use crate::sim::{Census, Grid, Team};

/// Color rotation for teams, assigned in census (symbol) order.
const PALETTE: [Color; 8] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::DarkRed,
    Color::DarkBlue,
];

/// The ANSI color for the team at `index` in census order.
#[must_use]
pub fn team_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Render one round as text.
///
/// With `color` set, team symbols and the census footer are wrapped in ANSI
/// color codes; otherwise the output is plain ASCII.
#[must_use]
pub fn render_round(grid: &Grid, census: &Census, round: u32, color: bool) -> String {
    let teams: Vec<Team> = census.iter().map(|(team, _)| team).collect();
    let mut out = format!("ROUND {round}:\n");

    let border = format!("+{}+\n", "-".repeat(usize::from(grid.width())));
    out.push_str(&border);
    for y in 0..grid.height() {
        out.push('|');
        for cell in grid.row(y) {
            match cell.team() {
                Some(team) if color => {
                    let index = teams.iter().position(|&t| t == team).unwrap_or(0);
                    out.push_str(
                        &cell.symbol().to_string().with(team_color(index)).to_string(),
                    );
                }
                _ => out.push(cell.symbol()),
            }
        }
        out.push_str("|\n");
    }
    out.push_str(&border);

    if census.teams_alive() == 0 {
        out.push_str("no cells alive\n");
    } else {
        let mut first = true;
        for (index, (team, count)) in census.iter().enumerate() {
            if !first {
                out.push_str("  ");
            }
            first = false;
            if color {
                out.push_str(&team.symbol().to_string().with(team_color(index)).to_string());
            } else {
                out.push(team.symbol());
            }
            out.push_str(&format!(": {count}"));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_map;

    #[test]
    fn test_render_plain() {
        let grid = parse_map(".A...\n.....\n...B.\n.....\n.....\n").unwrap();
        let census = Census::of(&grid);
        let text = render_round(&grid, &census, 3, false);

        assert_eq!(
            text,
            "ROUND 3:\n\
             +-----+\n\
             |.A...|\n\
             |.....|\n\
             |...B.|\n\
             |.....|\n\
             |.....|\n\
             +-----+\n\
             A: 1  B: 1\n"
        );
    }

    #[test]
    fn test_render_empty_grid_footer() {
        let grid = Grid::new(5, 5).unwrap();
        let census = Census::of(&grid);
        let text = render_round(&grid, &census, 0, false);
        assert!(text.ends_with("no cells alive\n"));
    }

    #[test]
    fn test_render_color_contains_ansi() {
        let grid = parse_map(".A...\n.....\n.....\n.....\n.....\n").unwrap();
        let census = Census::of(&grid);
        let text = render_round(&grid, &census, 0, true);
        assert!(text.contains("\u{1b}["));
    }
}
