//! Display settings for one `reflect` invocation.

use std::io::IsTerminal;

use crate::helpers::OutputFormat;

use super::mode::OutputMode;

const FALLBACK_WIDTH: usize = 80;

/// What the renderers may use: colour for category labels, emoji for moods,
/// the column budget for entry tables, and the output mode.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    /// Mood emoji and the `★` favorite marker; `--ascii` turns them off.
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
}

/// Snapshot of the process environment the UI depends on.
#[derive(Debug, Clone, Copy)]
struct Terminal {
    stdout_tty: bool,
    dumb: bool,
    no_color: bool,
    width: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            width: terminal_width(),
        }
    }
}

impl UiContext {
    /// Build the context from the global `--no-color` / `--ascii` flags and a
    /// command's `--json` / `--format` choices.
    pub fn from_env(
        json_flag: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self::for_terminal(
            Terminal::detect(),
            json_flag,
            format,
            no_color_flag,
            ascii_flag,
        )
    }

    fn for_terminal(
        term: Terminal,
        json_flag: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self {
            color: term.stdout_tty && !term.dumb && !term.no_color && !no_color_flag,
            unicode: !ascii_flag,
            width: term.width.unwrap_or(FALLBACK_WIDTH),
            mode: OutputMode::resolve(json_flag, format, term.stdout_tty, term.dumb),
        }
    }
}

/// Columns available for entry tables: `COLUMNS`, else the TTY size.
fn terminal_width() -> Option<usize> {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0);
    if from_env.is_some() {
        return from_env;
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ fills the winsize struct on success
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            dumb: false,
            no_color: false,
            width: Some(120),
        }
    }

    #[test]
    fn test_interactive_terminal_is_pretty_and_colored() {
        let ctx = UiContext::for_terminal(tty(), false, None, false, false);
        assert!(ctx.color);
        assert!(ctx.unicode);
        assert_eq!(ctx.width, 120);
        assert_eq!(ctx.mode, OutputMode::Pretty);
    }

    #[test]
    fn test_no_color_env_keeps_pretty_tables() {
        let term = Terminal {
            no_color: true,
            ..tty()
        };
        let ctx = UiContext::for_terminal(term, false, None, false, false);
        assert!(!ctx.color);
        assert_eq!(ctx.mode, OutputMode::Pretty);
    }

    #[test]
    fn test_pipe_without_size_falls_back() {
        let term = Terminal {
            stdout_tty: false,
            width: None,
            ..tty()
        };
        let ctx = UiContext::for_terminal(term, false, None, false, true);
        assert!(!ctx.color);
        assert!(!ctx.unicode);
        assert_eq!(ctx.width, FALLBACK_WIDTH);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_json_flag_selects_json() {
        let ctx = UiContext::from_env(true, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }
}
