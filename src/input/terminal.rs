use std::io;
use std::sync::OnceLock;

use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};

use crate::error::ShellError;

// Read-only copy of the saved attributes for the signal path; Drop cannot
// run inside a signal handler.
static SAVED: OnceLock<libc::termios> = OnceLock::new();

pub struct RawMode {
    saved: libc::termios,
    fd: i32,
}

impl RawMode {
    // Clears ICANON and ECHO only: keystrokes arrive one byte at a time
    // with no automatic echo, while ISIG and the CR/NL translations keep
    // their defaults.
    pub fn enable(fd: i32) -> Result<Self, ShellError> {
        let mut saved: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(fd, &mut saved) } != 0 {
            return Err(ShellError::Io(io::Error::last_os_error()));
        }

        let mut raw = saved;
        raw.c_lflag &= !(libc::ICANON | libc::ECHO);
        if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw) } != 0 {
            return Err(ShellError::Io(io::Error::last_os_error()));
        }

        let _ = SAVED.set(saved);
        register_restore_handlers(fd)?;

        Ok(RawMode { saved, fd })
    }

    pub fn restore(&self) {
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSANOW, &self.saved);
        }
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        self.restore();
    }
}

// A fatal signal must put the terminal back before the process dies.
fn register_restore_handlers(fd: i32) -> Result<(), ShellError> {
    for sig in [SIGINT, SIGTERM, SIGHUP] {
        unsafe { signal_hook::low_level::register(sig, move || restore_and_exit(fd, sig)) }
            .map_err(ShellError::Io)?;
    }
    Ok(())
}

// Runs in signal-handler context: tcsetattr and _exit are both
// async-signal-safe, nothing else is allowed here.
fn restore_and_exit(fd: i32, sig: i32) -> ! {
    if let Some(saved) = SAVED.get() {
        unsafe {
            libc::tcsetattr(fd, libc::TCSANOW, saved);
        }
    }
    unsafe { libc::_exit(128 + sig) }
}
