//! Audible cues over the terminal bell.
//!
//! Terminals expose exactly one sound: BEL. Whether it beeps, flashes or
//! stays silent is the user's terminal configuration, which is the right
//! place for that choice anyway.

use std::io::{self, Write};

use anyhow::Result;

/// Which game events ring the bell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cues {
    pub click: bool,
    pub win: bool,
}

impl Default for Cues {
    fn default() -> Self {
        // A bell on every rotation gets noisy fast; wins are rare.
        Self {
            click: false,
            win: true,
        }
    }
}

impl Cues {
    /// A tile was rotated.
    pub fn click(&self) -> Result<()> {
        if self.click {
            ring()?;
        }
        Ok(())
    }

    /// The level was just completed.
    pub fn win(&self) -> Result<()> {
        if self.win {
            ring()?;
        }
        Ok(())
    }
}

fn ring() -> Result<()> {
    let mut out = io::stdout();
    out.write_all(b"\x07")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_cues_are_silent_and_ok() {
        let cues = Cues {
            click: false,
            win: false,
        };
        assert!(cues.click().is_ok());
        assert!(cues.win().is_ok());
    }

    #[test]
    fn test_default_rings_only_on_win() {
        let cues = Cues::default();
        assert!(!cues.click);
        assert!(cues.win);
    }
}
