use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue, terminal,
};
use std::io::{self, Write};
use yagol::{Grid, Pos2};

#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Exit,
    TogglePause,
    Step,
    ClearAll,
    Randomize,
    Resize { cols: u16, rows: u16 },
    /// Set (`alive`) or clear the cell under the pointer, in unwrapped board coordinates
    Paint { pos: Pos2, alive: bool },
    Handled,
}

pub struct ConsoleRender {
    origin: Pos2,
    report: String,
    notice: Option<String>,
    paused: bool,
    attached: bool,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide, EnableMouseCapture)?;
        let mut render = Self::detached();
        render.attached = true;
        Ok(render)
    }

    /// Render state without touching the terminal
    fn detached() -> Self {
        Self {
            origin: Pos2::zero(),
            report: String::new(),
            notice: None,
            paused: false,
            attached: false,
        }
    }

    pub fn render(&self, grid: &Grid) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let body_rows = rows.saturating_sub(1);
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for (col, row) in grid
            .window(self.origin, cols as usize, body_rows as usize)
            .iter()
        {
            queue!(stdout, cursor::MoveTo(col as u16, row as u16))?;
            stdout.write_all("█".as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, body_rows))?;
        stdout.write_all(self.footer().as_bytes())?;

        stdout.flush()
    }

    fn footer(&self) -> String {
        let mut footer = self.report.clone();
        if self.paused {
            footer.push_str(" PAUSED");
        }
        if let Some(notice) = &self.notice {
            footer.push_str(" | ");
            footer.push_str(notice);
        }
        footer
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let cmd = match event::read()? {
            event::Event::Resize(cols, rows) => ConsoleCommand::Resize { cols, rows },
            event::Event::Mouse(mouse) => {
                let (_, rows) = terminal::size()?;
                self.paint(mouse, rows.saturating_sub(1))
                    .unwrap_or(ConsoleCommand::Handled)
            }
            // ignore key releases on platforms that report them
            event::Event::Key(KeyEvent {
                kind: KeyEventKind::Release,
                ..
            }) => ConsoleCommand::Handled,
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }) => ConsoleCommand::Exit,
            event::Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char(' ') => ConsoleCommand::TogglePause,
                KeyCode::Char('.') => ConsoleCommand::Step,
                KeyCode::Char('c') => ConsoleCommand::ClearAll,
                KeyCode::Char('r') => ConsoleCommand::Randomize,
                // arrows to move the view
                KeyCode::Up => self.pan(Pos2::new(0, -1)),
                KeyCode::Down => self.pan(Pos2::new(0, 1)),
                KeyCode::Left => self.pan(Pos2::new(-1, 0)),
                KeyCode::Right => self.pan(Pos2::new(1, 0)),
                _ => ConsoleCommand::Handled,
            },
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(cmd))
    }

    /// Left button paints alive cells, right button erases; the footer row is not part of the board
    fn paint(&self, mouse: MouseEvent, body_rows: u16) -> Option<ConsoleCommand> {
        let alive = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                true
            }
            MouseEventKind::Down(MouseButton::Right)
            | MouseEventKind::Drag(MouseButton::Right) => false,
            _ => return None,
        };
        if mouse.row >= body_rows {
            return None;
        }
        let pos = self.origin + Pos2::new(mouse.column as i64, mouse.row as i64);
        Some(ConsoleCommand::Paint { pos, alive })
    }

    fn pan(&mut self, delta: Pos2) -> ConsoleCommand {
        self.origin += delta;
        ConsoleCommand::Handled
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
    /// Replaces the footer message shown after the report; raw mode leaves no room for log lines
    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        if !self.attached {
            return;
        }
        // nothing useful to do with a failure while tearing down
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show, DisableMouseCapture);
    }
}
