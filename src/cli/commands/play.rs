//! Play command - Run games between humans, search bots and random bots

use std::{fs::File, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::to_writer_pretty;

use crate::{
    AdversarialSearchProblem, Player,
    cli::{
        config::{GameKind, PlayConfig, PlayExport, PlayerKind},
        output::{
            create_series_progress, print_kv, print_section, print_summary, score_line, tally,
        },
    },
    games::{ConnectFour, TicTacToe},
    runner::{
        GameUi, MatchSummary, RandomAgent, SearchAgent, Seat, Session, TerminalUi, TextGame,
        run_game,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play games between humans and search bots")]
pub struct PlayArgs {
    /// Game to play
    #[arg(long, value_enum, default_value_t = GameKind::Ttt)]
    pub game: GameKind,

    /// Board side (tic-tac-toe at least 3, connect four at least 4)
    #[arg(long)]
    pub dimension: Option<usize>,

    /// Controller of player one
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub player1: PlayerKind,

    /// Controller of player two
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub player2: PlayerKind,

    /// Search depth in plies for ab-cutoff players
    #[arg(long)]
    pub cutoff: Option<usize>,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Random seed for random players
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after every rendered move, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Export the series summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl PlayArgs {
    pub fn config(&self) -> PlayConfig {
        PlayConfig {
            game: self.game,
            dimension: self.dimension,
            player1: self.player1,
            player2: self.player2,
            cutoff: self.cutoff,
            games: self.games,
            seed: self.seed,
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.config();
    config.validate()?;
    let delay = Duration::from_millis(args.delay_ms);

    print_section(&format!("Playing {}", config.game));
    println!(
        "PLAYERS: {} (P1) vs. {} (P2)",
        config.player1.label(),
        config.player2.label()
    );
    if let Some(cutoff) = config.cutoff {
        print_kv("Cutoff", &format!("{cutoff} plies"));
    }

    let summary = match config.game {
        GameKind::Ttt => {
            let game = match config.dimension {
                Some(dim) => TicTacToe::new(dim)?,
                None => TicTacToe::default(),
            };
            play_series(&game, &config, delay)?
        }
        GameKind::Connect4 => {
            let game = match config.dimension {
                Some(side) => ConnectFour::new(side, side)?,
                None => ConnectFour::default(),
            };
            play_series(&game, &config, delay)?
        }
    };

    if config.games > 1 {
        print_section("Summary");
        print_summary(&summary);
    }

    if let Some(path) = args.export {
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        to_writer_pretty(file, &PlayExport { config, summary })?;
        println!("\nResults exported to {}", path.display());
    }

    Ok(())
}

/// Play `config.games` games of `problem` and tally the results.
///
/// Boards are rendered when a human plays or for a single game; bot-only
/// series show a progress bar instead.
pub fn play_series<P>(problem: &P, config: &PlayConfig, delay: Duration) -> Result<MatchSummary>
where
    P: TextGame + Clone,
{
    let interactive = config.has_human() || config.games == 1;
    let mut ui = interactive.then(|| TerminalUi::stdio(delay));
    let progress = (!interactive).then(|| create_series_progress(config.games as u64));

    let mut summary = MatchSummary::default();
    for game in 0..config.games {
        let mut seats = [
            seat_for(config, Player::One, game)?,
            seat_for(config, Player::Two, game)?,
        ];
        let mut session = Session::new(problem.clone());
        let game_ui = ui.as_mut().map(|ui| ui as &mut dyn GameUi<P>);
        let outcome = run_game(&mut session, &mut seats, game_ui)?;
        summary.record(outcome);

        match &progress {
            Some(pb) => {
                pb.println(format!("Game {}: {}", game + 1, score_line(&outcome)));
                pb.inc(1);
                pb.set_message(tally(&summary));
            }
            None => println!("{}", score_line(&outcome)),
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message(tally(&summary));
    }
    Ok(summary)
}

/// Seat for `player` in game number `game`; random bots get a distinct seed
/// per game and seat
fn seat_for<P: AdversarialSearchProblem>(
    config: &PlayConfig,
    player: Player,
    game: usize,
) -> Result<Seat<P>> {
    let kind = config.player(player);
    if let Some(algorithm) = kind.algorithm(config.cutoff)? {
        return Ok(Seat::bot(SearchAgent::new(algorithm, player)));
    }
    Ok(match kind {
        PlayerKind::Human => Seat::Human,
        _ => {
            let name = format!("random ({player})");
            match config.seed {
                Some(seed) => {
                    let offset = (2 * game + player.index()) as u64;
                    Seat::bot(RandomAgent::with_seed(name, seed.wrapping_add(offset)))
                }
                None => Seat::bot(RandomAgent::new(name)),
            }
        }
    })
}
