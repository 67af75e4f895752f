mod lexer;

use {
    anyhow::Context,
    derive_more::Display,
    sequence::Sequence,
    std::path::Path,
};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StopReason {
    #[display("end of input")]
    EndOfInput,
    #[display("capacity reached")]
    CapacityReached,
    #[display("non-integer token {token:?} at byte {offset}")]
    Mismatch { offset: usize, token: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub sequence: Sequence,
    pub stop: StopReason,
}

pub fn load_str(src: &str, capacity: usize) -> anyhow::Result<Loaded> {
    use chumsky::Parser;

    let mut sequence = Sequence::try_with_capacity(capacity)
        .with_context(|| format!("cannot hold {capacity} integers"))?;

    // `rest` swallows anything unparsed, so this only fails on a bug in
    // the lexer itself.
    let (values, rest) = match lexer::lexer(capacity).parse(src).into_result() {
        Ok(output) => output,
        Err(errs) => anyhow::bail!(errs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")),
    };

    // The lexer stops at `capacity` values.
    for value in values {
        sequence.try_push(value)?;
    }

    let unread = rest.trim_start_matches(lexer::is_separator);
    let stop = if unread.is_empty() {
        StopReason::EndOfInput
    } else if sequence.is_full() {
        StopReason::CapacityReached
    } else {
        StopReason::Mismatch {
            offset: src.len() - unread.len(),
            token: unread
                .split(lexer::is_separator)
                .next()
                .unwrap_or(unread)
                .to_owned(),
        }
    };

    Ok(Loaded { sequence, stop })
}

/// Loads a sequence from a file. Invalid UTF-8 is replaced, so it ends the
/// sequence like any other non-integer token.
pub fn load_path(path: impl AsRef<Path>, capacity: usize) -> anyhow::Result<Loaded> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    load_str(&String::from_utf8_lossy(&bytes), capacity)
}
