use std::io::{self, Write};
use std::sync::Once;

/// ANSI escape codes for terminal control
const CURSOR_SHOW: &str = "\x1B[?25h";
const ATTR_RESET: &str = "\x1B[0m";

static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Put the terminal back into cooked mode with a visible cursor.
///
/// Best effort: errors are ignored since this runs on the way out.
pub fn restore_terminal() {
    let _ = crossterm::terminal::disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = stdout.write_all(format!("{CURSOR_SHOW}{ATTR_RESET}").as_bytes());
    let _ = stdout.flush();
}

/// Install a panic hook that restores terminal state before panicking.
///
/// Safe to call multiple times - only installs once.
pub fn install_terminal_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            default_hook(panic_info);
        }));
    });
}
