//! Terminal setup and the half-block surface.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor, execute,
    event::{
        DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};

use crate::frontend::surface::Surface;
use crate::game::canvas::PixelCanvas;
use crate::game::types::Viewport;

/// Raw mode, alternate screen and focus reporting for as long as it lives.
pub struct TerminalGuard {
    releases: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, dropping the guard restores the terminal.
        let mut guard = Self { releases: false };
        let releases = terminal::supports_keyboard_enhancement().unwrap_or(false);

        let mut out = stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap, EnableFocusChange)?;
        if releases {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            guard.releases = true;
        }
        info!("[Terminal] Entered alternate screen (key releases reported: {})", releases);

        Ok(guard)
    }

    /// Whether the terminal reports key releases, which held-key tracking needs.
    pub fn reports_key_releases(&self) -> bool {
        self.releases
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.releases {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let restored = execute!(
            out,
            DisableFocusChange,
            LeaveAlternateScreen,
            cursor::Show,
            EnableLineWrap
        )
        .and_then(|_| terminal::disable_raw_mode());
        if let Err(e) = restored {
            warn!("[Terminal] Failed to restore terminal: {}", e);
        }
    }
}

pub fn viewport() -> io::Result<Viewport> {
    let (cols, rows) = terminal::size()?;
    Ok(Viewport::new(cols, rows))
}

pub struct TerminalSurface {
    out: Stdout,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Surface for TerminalSurface {
    fn present(&mut self, canvas: &PixelCanvas) -> io::Result<()> {
        let mut out = self.out.lock();
        canvas.write_half_blocks(&mut out)?;
        out.flush()
    }
}
