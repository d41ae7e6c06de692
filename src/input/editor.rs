use crate::input::history::History;

pub const INPUT_CAPACITY: usize = 50;

// No terminal-width query: navigation redraws blank a fixed span wide
// enough for any full input line.
const ERASE_WIDTH: usize = 64;

#[derive(Debug, PartialEq, Eq)]
enum Key {
    Char(char),
    Enter,
    Up,
    Down,
    Unknown,
}

// What the read loop should write after a key is applied.
#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Ignored,
    Echo(char),
    Redraw(String),
    Submit(String),
}

pub struct LineEditor {
    buf: String,
    history: History,
    navigating: bool,
    up_presses: u32,
    fd: i32,
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEditor {
    pub fn new() -> Self {
        LineEditor {
            buf: String::new(),
            history: History::new(),
            navigating: false,
            up_presses: 0,
            fd: libc::STDIN_FILENO,
        }
    }

    pub fn add_history(&mut self, line: &str) {
        self.history.record(line);
    }

    // Reads keys until a line is submitted. Returns None once the input
    // fd reaches end of file.
    pub fn read_line(&mut self) -> Option<String> {
        loop {
            let key = read_key(self.fd)?;
            match self.handle_key(key) {
                KeyAction::Ignored => {}
                KeyAction::Echo(ch) => write_all(&[ch as u8]),
                KeyAction::Redraw(entry) => redraw(&entry),
                KeyAction::Submit(line) => {
                    write_all(b"\n");
                    return Some(line);
                }
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> KeyAction {
        match key {
            Key::Char(ch) => self.insert(ch),
            Key::Enter => self.submit(),
            Key::Up => self.navigate(true),
            Key::Down => self.navigate(false),
            Key::Unknown => KeyAction::Ignored,
        }
    }

    // Characters only land in the buffer while typing a fresh line; past
    // capacity they are dropped without echo.
    fn insert(&mut self, ch: char) -> KeyAction {
        if self.navigating || self.buf.len() >= INPUT_CAPACITY {
            return KeyAction::Ignored;
        }
        self.buf.push(ch);
        KeyAction::Echo(ch)
    }

    fn navigate(&mut self, up: bool) -> KeyAction {
        let entry = if up {
            let first_press = self.up_presses == 0;
            self.up_presses += 1;
            self.history.navigate_up(first_press)
        } else {
            self.history.navigate_down()
        };
        match entry {
            Some(entry) => {
                let entry = entry.to_string();
                self.navigating = true;
                KeyAction::Redraw(entry)
            }
            // An empty store has nothing to browse.
            None => KeyAction::Ignored,
        }
    }

    // While navigating, the entry under the cursor is submitted and any
    // half-typed input is discarded.
    fn submit(&mut self) -> KeyAction {
        let line = if self.navigating {
            self.history.current().map(str::to_string).unwrap_or_default()
        } else {
            std::mem::take(&mut self.buf)
        };
        self.buf.clear();
        self.navigating = false;
        self.up_presses = 0;
        KeyAction::Submit(line)
    }
}

fn read_byte(fd: i32) -> Option<u8> {
    let mut buf = [0u8; 1];
    let n = unsafe { libc::read(fd, buf.as_mut_ptr() as *mut libc::c_void, 1) };
    if n == 1 {
        Some(buf[0])
    } else {
        None
    }
}

// Only a true ESC [ A / ESC [ B pair counts as an arrow key. A lone ESC
// (nothing readable within the timeout) and unrecognized sequences are
// discarded.
fn read_escape_seq(fd: i32) -> Key {
    let mut pfd = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let ready = unsafe { libc::poll(&mut pfd, 1, 50) };
    if ready <= 0 {
        return Key::Unknown;
    }

    if read_byte(fd) != Some(b'[') {
        return Key::Unknown;
    }

    match read_byte(fd) {
        Some(b'A') => Key::Up,
        Some(b'B') => Key::Down,
        _ => Key::Unknown,
    }
}

fn read_key(fd: i32) -> Option<Key> {
    let byte = read_byte(fd)?;
    let key = match byte {
        b'\r' | b'\n' => Key::Enter,
        0x1b => read_escape_seq(fd),
        b if (32..=127).contains(&b) => Key::Char(b as char),
        _ => Key::Unknown,
    };
    Some(key)
}

// Blank the line with a carriage return and spaces, then print the entry.
fn redraw(entry: &str) {
    let mut out = String::with_capacity(ERASE_WIDTH + entry.len() + 2);
    out.push('\r');
    out.push_str(&" ".repeat(ERASE_WIDTH));
    out.push('\r');
    out.push_str(entry);
    write_all(out.as_bytes());
}

// Unbuffered write; with echo disabled the editor owns every byte shown.
fn write_all(bytes: &[u8]) {
    let mut written = 0;
    while written < bytes.len() {
        let n = unsafe {
            libc::write(
                libc::STDOUT_FILENO,
                bytes[written..].as_ptr() as *const libc::c_void,
                bytes.len() - written,
            )
        };
        if n <= 0 {
            break;
        }
        written += n as usize;
    }
}
