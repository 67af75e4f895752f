use {
    chumsky::prelude::{Parser as ChumskyParser, *},
    sequence::Value,
};

pub(super) trait Parser<'src, Output>:
    ChumskyParser<'src, &'src str, Output, extra::Err<Rich<'src, char>>> + Clone
{
}
impl<
        'src,
        Output,
        T: ChumskyParser<'src, &'src str, Output, extra::Err<Rich<'src, char>>> + Clone,
    > Parser<'src, Output> for T
{
}

// The C locale's `isspace`: narrower than `char::is_whitespace`.
const SEPARATORS: &str = " \t\n\x0b\x0c\r";

pub(super) fn is_separator(c: char) -> bool {
    SEPARATORS.contains(c)
}

fn separator_lexer<'src>() -> impl Parser<'src, ()> {
    one_of(SEPARATORS).repeated()
}

// Out-of-range values fail like any other non-integer token.
fn int_lexer<'src>() -> impl Parser<'src, Value> {
    one_of("+-")
        .or_not()
        .then(one_of("0123456789").repeated().at_least(1))
        .to_slice()
        .try_map(|int: &str, span| int.parse::<Value>().map_err(|e| Rich::custom(span, e)))
}

/// Reads at most `capacity` whitespace-separated integers, stopping at the
/// first token that is not one. Returns the integers and the unread rest.
pub(super) fn lexer<'src>(capacity: usize) -> impl Parser<'src, (Vec<Value>, &'src str)> {
    int_lexer()
        .padded_by(separator_lexer())
        .repeated()
        .at_most(capacity)
        .collect::<Vec<_>>()
        .then(any().repeated().to_slice())
        .then_ignore(end())
}
