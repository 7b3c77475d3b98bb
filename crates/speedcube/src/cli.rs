use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use eyre::{Context, Result};
use owo_colors::OwoColorize;
use speedcube_core::{CubeState, ScrambleParams, Timestamp, Twist};
use speedcube_prefs::Preferences;
use speedcube_view::CubeSimulation;
use web_time::{Duration, Instant};

use crate::net::{ColorChoice, NetStyle};

/// 3x3x3 twisty puzzle simulator
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the default one.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,
    /// When to draw the cube with terminal colors.
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves to a solved cube and print the result.
    Apply {
        /// Moves such as `R` or `U'`.
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Scramble a solved cube and print the scramble and the result.
    Scramble {
        /// Number of twists. Defaults to the length in the preferences.
        #[arg(short, long)]
        length: Option<u32>,
        /// Random seed. Defaults to a seed from the operating system.
        #[arg(short, long)]
        seed: Option<String>,
        /// Timestamp that is mixed into the seed, in RFC 3339 format.
        #[arg(short, long, requires = "seed")]
        time: Option<Timestamp>,
    },
    /// Animate moves in real time, printing each twist as it completes.
    ///
    /// Besides moves, the words `reset` and `scramble` are accepted.
    Play {
        /// Frames per second.
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,
        /// Start from a solved cube even if the preferences say to scramble on
        /// startup.
        #[arg(long)]
        solved: bool,
        /// File to read moves from if none are given, use '-' for stdin.
        #[arg(short, long, value_parser, default_value = "-")]
        input: clio::Input,
        /// Moves to play.
        #[arg(allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Print the preferences in use as YAML.
    Prefs {
        /// Write the preferences to the preferences file.
        #[arg(long)]
        save: bool,
    },
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &Preferences, style: NetStyle) -> Result<()> {
    match subcommand {
        Subcommand::Apply { moves } => {
            let mut state = CubeState::new();
            state
                .apply_moves(&moves.join(" "))
                .context("error parsing moves")?;
            println!("{}", style.render(&state));
            print_solved(style, &state);
            Ok(())
        }

        Subcommand::Scramble { length, seed, time } => {
            let length = length.unwrap_or(prefs.scramble.length);
            let params = match seed {
                Some(seed) => {
                    let time = time.unwrap_or_else(Timestamp::now);
                    ScrambleParams::with_seed(length, time, seed)
                }
                None => ScrambleParams::new(length)?,
            };
            let scrambled = params.generate()?;
            println!("time: {}", scrambled.params.time);
            println!("seed: {}", scrambled.params.seed);
            println!("scramble: {}", speedcube_core::format_twists(&scrambled.twists));
            println!("{}", style.render(&scrambled.state));
            Ok(())
        }

        Subcommand::Play {
            fps,
            solved,
            input,
            moves,
        } => {
            let mut player = Player::new(prefs, style, fps);
            if prefs.scramble.on_startup && !solved {
                player.scramble()?;
            }
            println!("{}", style.render(player.sim.state()));

            if moves.is_empty() {
                for line in BufReader::new(input).lines() {
                    let line = line.context("error reading input")?;
                    for token in line.split_whitespace() {
                        player.play_token(token)?;
                    }
                }
            } else {
                for token in &moves {
                    player.play_token(token)?;
                }
            }

            println!("{}", style.render(player.sim.state()));
            print_solved(style, player.sim.state());
            Ok(())
        }

        Subcommand::Prefs { save } => {
            if save {
                prefs.save(None)?;
            }
            print!(
                "{}",
                serde_norway::to_string(prefs).context("error serializing preferences")?
            );
            Ok(())
        }
    }
}

fn print_solved(style: NetStyle, state: &CubeState) {
    match (state.is_solved(), style) {
        (true, NetStyle::Blocks) => println!("{}", "solved".green()),
        (false, NetStyle::Blocks) => println!("{}", "not solved".yellow()),
        (true, NetStyle::Letters) => println!("solved"),
        (false, NetStyle::Letters) => println!("not solved"),
    }
}

/// Drives a [`CubeSimulation`] at a fixed frame rate, waiting for each twist
/// to finish before requesting the next.
struct Player<'a> {
    sim: CubeSimulation,
    prefs: &'a Preferences,
    style: NetStyle,
    frame: Duration,
}
impl<'a> Player<'a> {
    fn new(prefs: &'a Preferences, style: NetStyle, fps: u32) -> Self {
        Self {
            sim: CubeSimulation::new(prefs.animation.clone()),
            prefs,
            style,
            frame: Duration::from_secs(1) / fps,
        }
    }

    fn scramble(&mut self) -> Result<()> {
        let params = ScrambleParams::new(self.prefs.scramble.length)?;
        if self.sim.scramble(params)?
            && let Some(record) = self.sim.scramble_record()
        {
            println!("scramble: {}", record.notation());
        }
        Ok(())
    }

    fn play_token(&mut self, token: &str) -> Result<()> {
        match token {
            "reset" => {
                if self.sim.reset() {
                    println!("reset");
                    println!("{}", self.style.render(self.sim.state()));
                }
            }
            "scramble" => {
                self.scramble()?;
                println!("{}", self.style.render(self.sim.state()));
            }
            _ => match token.parse::<Twist>() {
                Ok(twist) => self.play_twist(twist),
                Err(e) => eprintln!("skipping {token:?}: {e}"),
            },
        }
        Ok(())
    }

    fn play_twist(&mut self, twist: Twist) {
        if !self.sim.request_twist(twist) {
            log::warn!("dropped twist {twist} requested during animation");
            return;
        }

        let mut last_frame = Instant::now();
        while self.sim.is_animating() {
            std::thread::sleep(self.frame);
            let now = Instant::now();
            self.sim.step(now - last_frame);
            last_frame = now;
            log::trace!("{twist} at {:.1} degrees", self.sim.visual_angle());
        }

        println!("{:>4}. {twist}", self.sim.twist_count());
        if self.sim.take_solved_event() {
            let msg = format!("solved in {} twists!", self.sim.twist_count());
            match self.style {
                NetStyle::Blocks => println!("{}", msg.green()),
                NetStyle::Letters => println!("{msg}"),
            }
        }
    }
}
