use {
    sequence::Sequence,
    std::{fmt, io::Write},
};

/// A sequence rendered as one output line: every value followed by a space.
pub struct Line<'a>(pub &'a Sequence);

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in self.0.as_slice() {
            write!(f, "{value} ")?;
        }
        Ok(())
    }
}

pub fn print_sequence(sequence: &Sequence, stdout: &mut impl Write) -> std::io::Result<()> {
    writeln!(stdout, "{}", Line(sequence))?;
    stdout.flush()
}
