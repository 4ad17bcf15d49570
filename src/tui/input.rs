use std::io::{self, BufRead, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Where the interactive session gets its lines from.
///
/// `Ok(None)` means the user cancelled or input ended.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Raw-mode line editor on the controlling terminal.
pub struct TerminalInput;

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        get_editable_input(prompt, "")
    }
}

/// Plain line reader, for piped stdin and for tests.
pub struct BufferedInput<R, W> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> BufferedInput<R, W> {
    pub fn new(reader: R, echo: W) -> Self {
        Self { reader, echo }
    }
}

impl<R: BufRead, W: Write> LineSource for BufferedInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.echo, "{prompt}: ")?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Edit a single line in raw mode.
///
/// Esc and Ctrl+Q cancel, Ctrl+U clears, Ctrl+C leaves the program. Falls
/// back to a cooked read when raw mode is unavailable.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> io::Result<Option<String>> {
    let mut input: Vec<char> = initial_value.chars().collect();
    let mut cursor = input.len();
    let mut last_len = input.len();

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => {
            let stdin = io::stdin();
            return BufferedInput::new(stdin.lock(), io::stdout()).read_line(prompt);
        }
    };

    print!("{prompt}: {}", input.iter().collect::<String>());
    flush();

    let accepted = loop {
        let key = match read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => key,
            _ => continue,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                drop(guard);
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Char('q') if ctrl => break false,
            KeyCode::Esc => break false,
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => break true,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        // Redraw, blanking whatever the previous draw left behind
        let text: String = input.iter().collect();
        print!("\r{prompt}: {}", " ".repeat(last_len + 1));
        print!("\r{prompt}: {text}");
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        last_len = input.len();
    };

    drop(guard);
    println!();

    Ok(accepted.then(|| input.into_iter().collect()))
}
