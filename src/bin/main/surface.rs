use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType},
};
use rondo_core::render::{AnimationFrame, AnimationKind, Screen};

/// About-section header copy from the site.
const SECTION_TITLE: &str = "Our Space";
const SECTION_SUBTITLE: &str = "Where Innovation Happens";

const HELP_LINE: &str = "left/right navigate · 1-9 jump · q quit";

/// Raw-mode terminal renderer for the carousel view model. Restores the
/// terminal on drop.
pub struct TermSurface {
    out: Stdout,
}

impl TermSurface {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }

    pub fn draw(&mut self, screen: &Screen<'_>) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;

        match screen {
            Screen::Empty => {
                queue!(self.out, Print("No gallery images configured."))?;
            }
            Screen::Gallery {
                active,
                previous,
                next,
                index,
                total,
                locked,
                animation,
            } => {
                queue!(
                    self.out,
                    PrintStyledContent(SECTION_TITLE.bold()),
                    cursor::MoveTo(0, 1),
                    PrintStyledContent(SECTION_SUBTITLE.dim()),
                    cursor::MoveTo(0, 3),
                    Print(format!("{}  [{} / {}]", active.title, index + 1, total)),
                    cursor::MoveTo(0, 4),
                    PrintStyledContent(active.url.to_string().dim()),
                    cursor::MoveTo(0, 6),
                    PrintStyledContent(
                        format!("prev: {}   next: {}", previous.title, next.title).dim()
                    ),
                    cursor::MoveTo(0, 8),
                    Print(dots(*index, *total)),
                )?;

                if let Some(frame) = animation {
                    queue!(self.out, cursor::MoveTo(0, 9), Print(transition_line(frame)))?;
                } else if *locked {
                    queue!(self.out, cursor::MoveTo(0, 9), Print("settling"))?;
                }

                queue!(
                    self.out,
                    cursor::MoveTo(0, 11),
                    PrintStyledContent(HELP_LINE.dim()),
                )?;
            }
        }

        self.out.flush()
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn dots(active: u16, total: u16) -> String {
    let mut line = String::new();
    for index in 0..total {
        if index > 0 {
            line.push(' ');
        }
        line.push(if index == active { '●' } else { '○' });
    }
    line
}

fn transition_line(frame: &AnimationFrame) -> String {
    let marker = match frame.kind {
        AnimationKind::SlideLeft => "→",
        AnimationKind::SlideRight => "←",
        AnimationKind::CircleOpen => "◌",
    };
    format!("{} settling {:>3}%", marker, frame.progress_pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_mark_the_active_slide() {
        assert_eq!(dots(0, 3), "● ○ ○");
        assert_eq!(dots(2, 3), "○ ○ ●");
    }
}
