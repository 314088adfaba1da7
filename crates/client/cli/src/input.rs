//! Terminal move input: the human player's moves, and the bot's moves in
//! debug battles.

use std::io::{self, BufRead, Write};

use duel_core::Move;
use duel_runtime::{
    AiProfile, MoveContext, MoveProvider, Result, RuntimeError, Side, choose_move_with,
};
use rand::Rng;

/// Debug-battle answer that hands the bot's choice to the AI.
pub const AI_CHOICE: &str = "4";

/// Source of answer lines.
///
/// Any `BufRead` works; [`Terminal`] reads stdin without holding its lock,
/// so both sides of a debug battle can prompt on the same terminal.
pub trait LineInput {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<T: BufRead> LineInput for T {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl LineInput for Terminal {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// Reads one answer line; end of input is an error for `side`.
fn next_line(input: &mut impl LineInput, side: Side) -> Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|source| RuntimeError::Input { side, source })?;
    if read == 0 {
        return Err(RuntimeError::InputClosed { side });
    }
    Ok(line)
}

/// Asks for a move on `output` and reads the answer from `input`.
///
/// Accepts `1`/`2`/`3` or a move name; re-prompts on anything else.
pub struct PromptMoveProvider<R, W> {
    input: R,
    output: W,
}

impl PromptMoveProvider<Terminal, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(Terminal, io::stdout())
    }
}

impl<R: LineInput, W: Write> PromptMoveProvider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, ctx: &MoveContext<'_>) -> io::Result<()> {
        writeln!(
            self.output,
            "{}: {}/{} HP | {}: {}/{} HP",
            ctx.me.name(),
            ctx.me.current_hp(),
            ctx.me.max_hp(),
            ctx.opponent.name(),
            ctx.opponent.current_hp(),
            ctx.opponent.max_hp()
        )?;
        for m in Move::ALL {
            writeln!(self.output, "  {}) {}", m.id(), ctx.me.move_description(m))?;
        }
        write!(self.output, "Choose your move: ")?;
        self.output.flush()
    }
}

impl<R: LineInput, W: Write> MoveProvider for PromptMoveProvider<R, W> {
    fn provide_move(&mut self, ctx: &MoveContext<'_>) -> Result<Move> {
        let side = ctx.side;
        let io_error = |source| RuntimeError::Input { side, source };

        loop {
            self.prompt(ctx).map_err(io_error)?;
            let line = next_line(&mut self.input, side)?;
            if let Some(m) = parse_move(&line) {
                return Ok(m);
            }
            writeln!(self.output, "Please enter 1, 2 or 3.").map_err(io_error)?;
        }
    }
}

/// Debug battles: the operator types the bot's move each round, or `4` to
/// let the AI pick with `profile`.
pub struct DebugMoveProvider<R, W, G> {
    input: R,
    output: W,
    profile: AiProfile,
    rng: G,
}

impl<G: Rng> DebugMoveProvider<Terminal, io::Stdout, G> {
    pub fn stdio(profile: AiProfile, rng: G) -> Self {
        Self::new(Terminal, io::stdout(), profile, rng)
    }
}

impl<R: LineInput, W: Write, G: Rng> DebugMoveProvider<R, W, G> {
    pub fn new(input: R, output: W, profile: AiProfile, rng: G) -> Self {
        Self {
            input,
            output,
            profile,
            rng,
        }
    }

    fn prompt(&mut self, ctx: &MoveContext<'_>) -> io::Result<()> {
        writeln!(
            self.output,
            "DEBUG: choose {}'s move (or {} for AI):",
            ctx.me.name(),
            AI_CHOICE
        )?;
        for m in Move::ALL {
            writeln!(self.output, "  {}) {}", m.id(), ctx.me.move_description(m))?;
        }
        writeln!(
            self.output,
            "  {}) Let the {} AI choose",
            AI_CHOICE,
            self.profile.difficulty
        )?;
        write!(self.output, "Bot's move: ")?;
        self.output.flush()
    }
}

impl<R: LineInput, W: Write, G: Rng> MoveProvider for DebugMoveProvider<R, W, G> {
    fn provide_move(&mut self, ctx: &MoveContext<'_>) -> Result<Move> {
        let side = ctx.side;
        let io_error = |source| RuntimeError::Input { side, source };

        loop {
            self.prompt(ctx).map_err(io_error)?;
            let line = next_line(&mut self.input, side)?;

            if line.trim() == AI_CHOICE {
                let chosen = choose_move_with(
                    &self.profile,
                    ctx.me,
                    ctx.opponent,
                    ctx.my_last_move,
                    ctx.opponent_last_move,
                    &mut self.rng,
                );
                writeln!(self.output, "AI for {} chose: {chosen}", ctx.me.name())
                    .map_err(io_error)?;
                return Ok(chosen);
            }
            if let Some(m) = parse_move(&line) {
                return Ok(m);
            }
            writeln!(self.output, "Please enter 1, 2, 3 or 4.").map_err(io_error)?;
        }
    }
}

/// `1`/`2`/`3` or a case-insensitive move name.
pub fn parse_move(text: &str) -> Option<Move> {
    let text = text.trim();
    match text.parse::<u8>() {
        Ok(id) => Move::from_id(id),
        Err(_) => text.parse().ok(),
    }
}
