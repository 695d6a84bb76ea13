//! Text front end: prompts, board printing and the replay loop.
//!
//! Generic over the reader and writer so it can be driven by stdin/stdout
//! or by scripted input in tests. Running out of input ends the session
//! quietly.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::GameError;
use crate::game::{Controller, GameConfig, GameInstance};
use crate::types::{Piece, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleOptions {
    pub config: GameConfig,
    /// Mark legal cells for the side to move when printing the board.
    pub show_moves: bool,
}

struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::ErrorKind::UnexpectedEof.into());
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn yes_or_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let answer = self.next_token(prompt)?;
            match answer.as_str() {
                "Y" | "y" => return Ok(true),
                "N" | "n" => return Ok(false),
                _ => writeln!(self.output, "\nPlease answer 'Y' or 'N'")?,
            }
        }
    }

    fn read_coords(&mut self) -> io::Result<(usize, usize)> {
        loop {
            let row = self.next_token("Input row > ")?.parse::<usize>();
            let col = self.next_token("Input col > ")?.parse::<usize>();
            match (row, col) {
                (Ok(row), Ok(col)) if row < 8 && col < 8 => {
                    writeln!(self.output)?;
                    return Ok((row, col));
                }
                _ => writeln!(
                    self.output,
                    "Something was wrong with your input, please input a valid number"
                )?,
            }
        }
    }
}

/// Runs games until the player declines a replay or input runs out.
pub fn play<R: BufRead, W: Write>(input: R, output: W, options: ConsoleOptions) -> io::Result<()> {
    let mut prompter = Prompter::new(input, output);
    let mut game = GameInstance::new(options.config);

    match run_session(&mut prompter, &mut game, options.show_moves) {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        other => other,
    }
}

fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    game: &mut GameInstance,
    show_moves: bool,
) -> io::Result<()> {
    loop {
        writeln!(prompter.output, "Starting new game")?;
        game.reset();
        play_game(prompter, game, show_moves)?;
        show_winner(&mut prompter.output, game)?;

        if !prompter.yes_or_no("Would you like to play again? (Y/N) > ")? {
            return Ok(());
        }
    }
}

fn play_game<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    game: &mut GameInstance,
    show_moves: bool,
) -> io::Result<()> {
    while !game.is_game_over() {
        let piece = game.current_player();
        let hints = show_moves.then_some(piece);
        write!(prompter.output, "{}", game.board().render(hints))?;

        match game.current_controller() {
            Controller::Computer(strategy) => {
                writeln!(prompter.output, "It's the computer's turn ({piece}, {strategy})")?;
                match game.computer_move() {
                    Ok(Some(mv)) => writeln!(prompter.output, "Found a spot! {mv}")?,
                    Ok(None) => writeln!(
                        prompter.output,
                        "I couldn't find a piece. I'll just skip my turn."
                    )?,
                    Err(err) => writeln!(prompter.output, "{err}")?,
                }
            }
            Controller::Human => {
                if !game.has_legal_moves_for_current() {
                    writeln!(prompter.output, "{piece} has no legal move and passes.")?;
                    if let Err(err) = game.pass() {
                        writeln!(prompter.output, "{err}")?;
                    }
                    continue;
                }

                writeln!(prompter.output, "{piece}, it's your turn")?;
                let (row, col) = prompter.read_coords()?;
                match game.place(row, col) {
                    Ok(()) => {}
                    Err(GameError::Board(_)) => writeln!(
                        prompter.output,
                        "Sorry, {piece}. That can't be played there."
                    )?,
                    Err(err) => writeln!(prompter.output, "{err}")?,
                }
            }
        }
    }

    Ok(())
}

fn show_winner<W: Write>(output: &mut W, game: &GameInstance) -> io::Result<()> {
    let result = game.to_game_result();

    write!(output, "{}", game.board())?;
    writeln!(output, "{}, you had {} pieces.", Piece::Black, result.black_count)?;
    writeln!(output, "{}, you had {} pieces.", Piece::White, result.white_count)?;
    match result.winner {
        Winner::Tie => writeln!(output, "It's a tie!"),
        Winner::Black => writeln!(output, "Black wins"),
        Winner::White => writeln!(output, "White wins"),
    }
}
