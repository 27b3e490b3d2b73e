use colored::{Color, Colorize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Fail,
    Hint,
    Weak,
}

impl MessageType {
    pub fn color(self) -> Color {
        match self {
            MessageType::Success => Color::Green,
            MessageType::Fail => Color::Red,
            MessageType::Hint => Color::Yellow,
            MessageType::Weak => Color::BrightBlack,
        }
    }
}

/// Writes messages tinted by their [`MessageType`]. With colors disabled
/// the text is written unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    colored: bool,
}

impl Console {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn write_line<W: Write>(&self, out: &mut W, msg: &str, kind: MessageType) -> io::Result<()> {
        self.write_text(out, msg, kind)?;
        writeln!(out)
    }

    pub fn write_text<W: Write>(&self, out: &mut W, msg: &str, kind: MessageType) -> io::Result<()> {
        if self.colored {
            write!(out, "{}", msg.color(kind.color()))
        } else {
            write!(out, "{}", msg)
        }
    }
}
