//! Terminal rendering of grid graphs and paths.
//!
//! Every cell falls in one of four categories (open, blocked, endpoint,
//! path) and is drawn with the matching glyph from [`Glyphs`]. The grid is
//! framed and printed with the highest row first, so `y` grows upwards.
//! [`render`] produces plain text; [`write_styled`] additionally colors each
//! category through crossterm.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use gridstar_core::{GridGraph, NodeId};

/// Category of a rendered cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Open,
    Blocked,
    Start,
    Goal,
    Path,
}

impl CellKind {
    fn color(self) -> Color {
        match self {
            Self::Open => Color::DarkGrey,
            Self::Blocked => Color::Grey,
            Self::Start => Color::Green,
            Self::Goal => Color::Red,
            Self::Path => Color::Cyan,
        }
    }
}

/// Characters used for each [`CellKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub open: char,
    pub blocked: char,
    pub start: char,
    pub goal: char,
    pub path: char,
}

impl Glyphs {
    /// `· ■ Α Ω ʘ`.
    pub const UNICODE: Self = Self {
        open: '\u{00B7}',
        blocked: '\u{25A0}',
        start: '\u{0391}',
        goal: '\u{03A9}',
        path: '\u{0298}',
    };

    /// `. # S G *`, for terminals without good Unicode fonts.
    pub const ASCII: Self = Self {
        open: '.',
        blocked: '#',
        start: 'S',
        goal: 'G',
        path: '*',
    };

    pub fn glyph(&self, kind: CellKind) -> char {
        match kind {
            CellKind::Open => self.open,
            CellKind::Blocked => self.blocked,
            CellKind::Start => self.start,
            CellKind::Goal => self.goal,
            CellKind::Path => self.path,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// What to overlay on the graph: optional endpoints and a path.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    start: Option<NodeId>,
    goal: Option<NodeId>,
    path: HashSet<NodeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: NodeId) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_goal(mut self, goal: NodeId) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn with_path(mut self, nodes: &[NodeId]) -> Self {
        self.path = nodes.iter().copied().collect();
        self
    }

    /// Category of `id`. Blocked wins over the endpoints, which win over
    /// path membership.
    pub fn classify(&self, graph: &GridGraph, id: NodeId) -> CellKind {
        if !graph.is_enabled(id) {
            CellKind::Blocked
        } else if self.start == Some(id) {
            CellKind::Start
        } else if self.goal == Some(id) {
            CellKind::Goal
        } else if self.path.contains(&id) {
            CellKind::Path
        } else {
            CellKind::Open
        }
    }

    /// Cell categories row by row, top (highest `y`) row first.
    pub fn rows(&self, graph: &GridGraph) -> Vec<Vec<CellKind>> {
        let w = graph.width() as usize;
        let kinds: Vec<CellKind> = graph.iter().map(|(id, _)| self.classify(graph, id)).collect();
        kinds.chunks(w).rev().map(<[CellKind]>::to_vec).collect()
    }
}

fn separator(width: i32) -> String {
    let inner = (4 * width - 3).max(0) as usize;
    format!("|--{}--|", "-".repeat(inner))
}

/// Draw the graph and scene as plain text, one line per row plus frame
/// lines.
pub fn render(graph: &GridGraph, scene: &Scene, glyphs: &Glyphs) -> String {
    let sep = separator(graph.width());
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    for row in scene.rows(graph) {
        let cells: Vec<String> = row.iter().map(|&k| glyphs.glyph(k).to_string()).collect();
        out.push_str("|  ");
        out.push_str(&cells.join("   "));
        out.push_str("  |\n");
        out.push_str(&sep);
        out.push('\n');
    }
    out
}

/// Like [`render`], but writes to `w` with a foreground color per
/// category.
pub fn write_styled<W: Write>(
    w: &mut W,
    graph: &GridGraph,
    scene: &Scene,
    glyphs: &Glyphs,
) -> io::Result<()> {
    let sep = separator(graph.width());
    queue!(w, Print(&sep), Print('\n'))?;
    for row in scene.rows(graph) {
        queue!(w, Print("|  "))?;
        for (i, &kind) in row.iter().enumerate() {
            if i > 0 {
                queue!(w, Print("   "))?;
            }
            queue!(
                w,
                SetForegroundColor(kind.color()),
                Print(glyphs.glyph(kind)),
                ResetColor
            )?;
        }
        queue!(w, Print("  |\n"), Print(&sep), Print('\n'))?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_blocked() -> GridGraph {
        let mut g = GridGraph::new(3).unwrap();
        g.disable(1, 1).unwrap();
        g
    }

    #[test]
    fn separator_matches_row_width() {
        let g = GridGraph::new(3).unwrap();
        let text = render(&g, &Scene::new(), &Glyphs::ASCII);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("|--{}--|", "-".repeat(9)));
        assert_eq!(lines[1], "|  .   .   .  |");
        assert_eq!(lines[0].chars().count(), 4 * 3 + 3);
        assert_eq!(lines[1].chars().count(), 4 * 3 + 3);
        assert_eq!(lines.len(), 1 + 2 * 3);
    }

    #[test]
    fn top_row_is_highest_y() {
        let g = center_blocked();
        let start = g.node_at(0, 0).unwrap();
        let goal = g.node_at(2, 2).unwrap();
        let path = [
            start,
            g.node_at(1, 0).unwrap(),
            g.node_at(2, 1).unwrap(),
            goal,
        ];
        let scene = Scene::new().with_start(start).with_goal(goal).with_path(&path);
        let text = render(&g, &scene, &Glyphs::ASCII);
        let rows: Vec<&str> = text.lines().skip(1).step_by(2).collect();
        assert_eq!(rows, vec!["|  .   .   G  |", "|  .   #   *  |", "|  S   *   .  |"]);
    }

    #[test]
    fn blocked_wins_over_endpoints() {
        let g = center_blocked();
        let center = g.node_at(1, 1).unwrap();
        let scene = Scene::new().with_start(center).with_path(&[center]);
        assert_eq!(scene.classify(&g, center), CellKind::Blocked);
    }

    #[test]
    fn start_wins_over_goal_and_path() {
        let g = GridGraph::new(2).unwrap();
        let id = g.node_at(0, 0).unwrap();
        let scene = Scene::new().with_start(id).with_goal(id).with_path(&[id]);
        assert_eq!(scene.classify(&g, id), CellKind::Start);
        let scene = Scene::new().with_goal(id).with_path(&[id]);
        assert_eq!(scene.classify(&g, id), CellKind::Goal);
    }

    #[test]
    fn unicode_glyphs_by_default() {
        let g = center_blocked();
        let text = render(&g, &Scene::new(), &Glyphs::default());
        assert!(text.contains('\u{25A0}'));
        assert!(text.contains('\u{00B7}'));
    }

    #[test]
    fn styled_output_keeps_glyphs_in_order() {
        let g = center_blocked();
        let start = g.node_at(0, 0).unwrap();
        let scene = Scene::new().with_start(start);
        let mut buf = Vec::new();
        write_styled(&mut buf, &g, &scene, &Glyphs::ASCII).unwrap();
        let out = String::from_utf8(buf).unwrap();
        // Escape sequences surround each glyph; the glyph order is unchanged.
        let glyphs: String = out.chars().filter(|c| ".#S".contains(*c)).collect();
        assert_eq!(glyphs, "....#.S..");
        assert!(out.contains('\u{1b}'));
    }
}
