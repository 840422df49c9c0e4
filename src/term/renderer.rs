//! TerminalRenderer: raw-mode session handling and full-frame drawing.
//!
//! Each frame clears the screen and redraws the board, the falling piece
//! and the info panel. Frames arrive at most once per input event or drop
//! tick, so full redraws are cheap enough here.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::Game;
use crate::persist::BestResult;
use crate::types::{BlockColor, GamePhase};

/// Terminal columns per board cell (compensates glyph aspect ratio).
const CELL_W: u16 = 2;

fn style_of(color: BlockColor) -> Color {
    match color {
        BlockColor::Blue => Color::Blue,
        BlockColor::Orange => Color::DarkYellow,
        BlockColor::Cyan => Color::Cyan,
        BlockColor::Red => Color::Red,
        BlockColor::Green => Color::Green,
        BlockColor::Yellow => Color::Yellow,
        BlockColor::Magenta => Color::Magenta,
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole frame from core state.
    pub fn draw(&mut self, game: &Game, best: &BestResult, new_champion: bool) -> Result<()> {
        let board = game.board();
        let w = board.width() as u16;
        let h = board.height() as u16;

        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_frame(w, h)?;
        for block in board.blocks() {
            self.draw_cell(block.x as u16, block.y as u16, block.color)?;
        }
        for block in game.current().blocks() {
            self.draw_cell(block.x as u16, block.y as u16, block.color)?;
        }

        self.draw_panel(game, best, new_champion, w)?;

        match game.phase() {
            GamePhase::Paused => self.draw_banner(w, h, "PAUSE")?,
            GamePhase::GameOver => self.draw_banner(w, h, "GAME OVER")?,
            GamePhase::Running => {}
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_cell(&mut self, x: u16, y: u16, color: BlockColor) -> Result<()> {
        // +1 offsets skip the border.
        self.stdout.queue(cursor::MoveTo(1 + x * CELL_W, 1 + y))?;
        self.stdout.queue(SetBackgroundColor(style_of(color)))?;
        self.stdout.queue(Print("  "))?;
        self.stdout.queue(ResetColor)?;
        Ok(())
    }

    fn draw_frame(&mut self, w: u16, h: u16) -> Result<()> {
        let inner = (w * CELL_W) as usize;
        self.stdout.queue(SetForegroundColor(Color::Grey))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Print(format!("+{}+", "-".repeat(inner))))?;
        for y in 0..h {
            self.stdout.queue(cursor::MoveTo(0, 1 + y))?;
            self.stdout.queue(Print("|"))?;
            self.stdout.queue(cursor::MoveTo(1 + w * CELL_W, 1 + y))?;
            self.stdout.queue(Print("|"))?;
        }
        self.stdout.queue(cursor::MoveTo(0, 1 + h))?;
        self.stdout.queue(Print(format!("+{}+", "-".repeat(inner))))?;
        Ok(())
    }

    fn draw_panel(
        &mut self,
        game: &Game,
        best: &BestResult,
        new_champion: bool,
        board_w: u16,
    ) -> Result<()> {
        let x = board_w * CELL_W + 4;
        let mut y = 1;
        let mut line = |stdout: &mut io::Stdout, text: String| -> Result<()> {
            stdout.queue(cursor::MoveTo(x, y))?;
            stdout.queue(Print(text))?;
            y += 1;
            Ok(())
        };

        line(&mut self.stdout, format!("SCORE : {}", game.board().score()))?;
        line(
            &mut self.stdout,
            format!("DROP DOWN DELAY ms : {}", game.drop_delay_ms()),
        )?;
        line(&mut self.stdout, String::new())?;
        line(&mut self.stdout, "INSTRUCTIONS :".into())?;
        line(&mut self.stdout, "  <- | -> arrows to move".into())?;
        line(&mut self.stdout, "  \"up\" arrow to rotate".into())?;
        line(&mut self.stdout, "  \"down\" arrow to move down".into())?;
        line(&mut self.stdout, "  \"space\" to drop".into())?;
        line(&mut self.stdout, "  \"p\" to pause".into())?;
        line(&mut self.stdout, "  \"s\" to resume".into())?;
        line(&mut self.stdout, "  \"d\" to show debug info".into())?;
        line(&mut self.stdout, "  \"q\" to quit".into())?;
        line(&mut self.stdout, String::new())?;
        line(&mut self.stdout, "SCORING :".into())?;
        line(&mut self.stdout, "   1 point  - 1 row".into())?;
        line(&mut self.stdout, "   4 points - 2 rows".into())?;
        line(&mut self.stdout, "   9 points - 3 rows".into())?;
        line(&mut self.stdout, "  16 points - 4 rows".into())?;

        if new_champion {
            line(&mut self.stdout, String::new())?;
            line(&mut self.stdout, "CONGRATULATIONS".into())?;
            line(&mut self.stdout, "YOU ARE THE NEW CHAMPION".into())?;
            line(
                &mut self.stdout,
                format!("previous best: score = {}", best.score),
            )?;
            line(
                &mut self.stdout,
                format!("               delay = {}", best.delay_ms),
            )?;
        }
        Ok(())
    }

    fn draw_banner(&mut self, w: u16, h: u16, text: &str) -> Result<()> {
        let x = (w * CELL_W + 2).saturating_sub(text.len() as u16) / 2;
        self.stdout.queue(cursor::MoveTo(x, h / 2))?;
        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(Print(text))?;
        self.stdout.queue(ResetColor)?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
