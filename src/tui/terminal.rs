//! Raw-mode terminal ownership.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, including when the loop exits
/// through an error or a panic unwinds past it.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Enables raw mode, switches to the alternate screen and hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the terminal cannot be configured (e.g. stdout
    /// is not a TTY). Raw mode is rolled back if a later step fails.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { stdout })
    }

    /// Current terminal size as `(width, height)`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the size cannot be queried.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Clears the screen and writes one frame.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if writing to the terminal fails.
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0), Print(frame))?;
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl std::fmt::Debug for TerminalGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalGuard").finish_non_exhaustive()
    }
}
