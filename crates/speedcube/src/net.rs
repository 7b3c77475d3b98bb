//! Terminal rendering of the cube net.

use std::io::IsTerminal;

use owo_colors::OwoColorize;
use speedcube_core::{Color, CubeState, Face, GRID_SIZE};

/// When to draw facelets with terminal colors.
#[derive(clap::ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ColorChoice {
    /// Use colors if stdout is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Print color letters instead.
    Never,
}

/// How to draw a cube net.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum NetStyle {
    /// Color letters, as in [`CubeState`]'s `Display` impl.
    Letters,
    /// Colored blocks.
    Blocks,
}
impl NetStyle {
    pub fn new(choice: ColorChoice) -> Self {
        let colored = match choice {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        if colored { Self::Blocks } else { Self::Letters }
    }

    /// Renders the net with U on top, then L F R B, then D.
    pub fn render(self, state: &CubeState) -> String {
        match self {
            Self::Letters => state.to_string(),
            Self::Blocks => render_blocks(state),
        }
    }
}

fn block(color: Color) -> String {
    let [r, g, b] = color.rgb();
    "  ".on_truecolor(r, g, b).to_string()
}

fn render_blocks(state: &CubeState) -> String {
    let row = |face: Face, row: usize| -> String {
        state[face][row].iter().map(|&c| block(c)).collect()
    };
    let pad = "  ".repeat(GRID_SIZE);

    let mut lines = vec![];
    for r in 0..GRID_SIZE {
        lines.push(format!("{pad}{}", row(Face::U, r)));
    }
    for r in 0..GRID_SIZE {
        lines.push(
            [Face::L, Face::F, Face::R, Face::B]
                .into_iter()
                .map(|face| row(face, r))
                .collect(),
        );
    }
    for r in 0..GRID_SIZE {
        lines.push(format!("{pad}{}", row(Face::D, r)));
    }
    lines.join("\n")
}
