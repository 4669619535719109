use anyhow::{bail, Context, Result};
use bloxorz::{Brick, Direction, RowCol};
use clap::Parser;

/// Stand a brick on a cell, roll it, and print where it ends up.
#[derive(Parser, Debug)]
#[command(name = "rolling-brick")]
struct Args {
    /// Row of the cell the brick starts standing on
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    row: i32,

    /// Column of the cell the brick starts standing on
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    col: i32,

    /// Only print the final position
    #[arg(long)]
    quiet: bool,

    /// Moves as letters U, D, L, R (either case; spaces and commas ignored)
    moves: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let moves = parse_moves(&args.moves).context("could not read the list of moves")?;
    let start = Brick::standing(RowCol::new(args.row, args.col));

    if args.quiet {
        println!("{}", start.roll_all(moves));
        return Ok(());
    }

    let path = start.path(moves.iter().copied());
    for (step, brick) in path.iter().enumerate() {
        let taken = match step {
            0 => ' ',
            _ => moves[step - 1].into(),
        };
        let cells = brick.to_string();
        println!("{:>4} {} {:<16} {}", step, taken, cells, brick.stance().name());
    }

    Ok(())
}

fn parse_moves(s: &str) -> Result<Vec<Direction>> {
    let mut moves = Vec::new();

    for (i, c) in s.chars().enumerate() {
        if c.is_whitespace() || c == ',' {
            continue;
        }
        match Direction::try_from(c) {
            Ok(d) => moves.push(d),
            Err(()) => bail!("unknown move {:?} at position {}", c, i + 1),
        }
    }

    Ok(moves)
}
