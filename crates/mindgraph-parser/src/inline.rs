//! Inline markdown to plain text.
//!
//! [`strip_inline`] removes emphasis, links, images, HTML and escapes from a
//! piece of inline markdown, leaving the text a reader would see. Code spans
//! are kept verbatim, everything else has its whitespace collapsed.

use winnow::{
    Parser as _,
    combinator::{alt, delimited, opt, peek, preceded},
    error::{ContextError, ErrMode, ModalResult},
    stream::AsChar,
    token::{any, one_of, take_till, take_until, take_while},
};

type IResult<O> = ModalResult<O, ContextError>;

/// Characters that may start markup.
const SPECIAL: [char; 9] = ['\\', '`', '!', '[', '<', '&', '~', '*', '_'];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    Owned(String),
    Code(&'a str),
    Char(char),
    Space,
    Skip,
    /// A run of `*` or `_`, with the character right after it.
    Delimiter { run: &'a str, next: Option<char> },
}

/// Strip inline markdown from `content`.
///
/// # Examples
///
/// ```
/// use mindgraph_parser::strip_inline;
///
/// assert_eq!(strip_inline("**Bold** [link](https://x.io) &amp; `a*b`"), "Bold link & a*b");
/// assert_eq!(strip_inline("snake_case_name"), "snake_case_name");
/// ```
pub fn strip_inline(content: &str) -> String {
    let mut out = Output::default();
    let mut input = content;

    while !input.is_empty() {
        match piece.parse_next(&mut input) {
            Ok(piece) => out.push(piece),
            Err(_) => {
                out.push(Piece::Text(input));
                break;
            }
        }
    }

    out.text.trim().to_string()
}

#[derive(Default)]
struct Output {
    text: String,
    pending_space: bool,
}

impl Output {
    fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.pending_space && !self.text.is_empty() {
            self.text.push(' ');
        }
        self.pending_space = false;
        self.text.push_str(text);
    }

    fn push(&mut self, piece: Piece<'_>) {
        match piece {
            Piece::Text(text) => self.push_str(text),
            Piece::Owned(text) => self.push_str(&text),
            Piece::Code(code) => self.push_str(code),
            Piece::Char(c) if c.is_whitespace() => self.pending_space = true,
            Piece::Char(c) => self.push_str(c.encode_utf8(&mut [0; 4])),
            Piece::Space => self.pending_space = true,
            Piece::Skip => {}
            Piece::Delimiter { run, next } => {
                if self.keeps_delimiter(run, next) {
                    self.push_str(run);
                }
            }
        }
    }

    /// A `*` run surrounded by whitespace is literal, as is an `_` run inside
    /// a word.
    fn keeps_delimiter(&self, run: &str, next: Option<char>) -> bool {
        let left_space = self.text.is_empty() || self.pending_space;
        let right_space = next.is_none_or(char::is_whitespace);
        if left_space && right_space {
            return true;
        }

        let left_word = !self.pending_space && self.text.chars().last().is_some_and(char::is_alphanumeric);
        let right_word = next.is_some_and(char::is_alphanumeric);
        run.starts_with('_') && left_word && right_word
    }
}

fn piece<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    alt((
        escape,
        code_span,
        image,
        link,
        autolink,
        html_comment,
        html_tag,
        entity,
        emphasis,
        delimiter,
        take_while(1.., char::is_whitespace).value(Piece::Space),
        take_till(1.., |c: char| SPECIAL.contains(&c) || c.is_whitespace()).map(Piece::Text),
        any.map(Piece::Char),
    ))
    .parse_next(input)
}

/// `\*` and friends.
fn escape<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    preceded('\\', one_of(|c: char| c.is_ascii_punctuation()))
        .map(Piece::Char)
        .parse_next(input)
}

/// A backtick run, content, then a backtick run of exactly the same length.
fn code_span<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    let opener = take_while(1.., '`').parse_next(input)?;
    let rest: &'a str = input;
    let bytes = rest.as_bytes();

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }
        let run = bytes[i..].iter().take_while(|b| **b == b'`').count();
        if run == opener.len() {
            *input = &rest[i + run..];
            return Ok(Piece::Code(trim_code(&rest[..i])));
        }
        i += run;
    }

    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Drop one space on each side when both are present and the content is not
/// all spaces.
fn trim_code(code: &str) -> &str {
    if code.len() >= 2 && code.starts_with(' ') && code.ends_with(' ') && !code.trim().is_empty() {
        &code[1..code.len() - 1]
    } else {
        code
    }
}

/// `[label](url)`, `[label][ref]` and `[label][]`.
fn link<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    let label = delimited('[', take_till(0.., [']', '\n']), ']').parse_next(input)?;
    alt((
        delimited('(', take_till(0.., ')'), ')').void(),
        delimited('[', take_till(0.., ']'), ']').void(),
    ))
    .parse_next(input)?;
    Ok(Piece::Owned(strip_inline(label)))
}

/// `![alt](src)`, replaced by its alt text.
fn image<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    preceded('!', link).parse_next(input)
}

/// `<https://example.com>`, kept as the bare URL.
fn autolink<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    delimited(
        '<',
        (
            alt(("https://", "http://", "mailto:")),
            take_till(1.., |c: char| c == '>' || c == '<' || c.is_whitespace()),
        )
            .take(),
        '>',
    )
    .map(Piece::Text)
    .parse_next(input)
}

fn html_comment<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    ("<!--", take_until(0.., "-->"), "-->")
        .value(Piece::Skip)
        .parse_next(input)
}

/// An opening or closing HTML tag. `<br>` reads as a space, other tags as
/// nothing.
fn html_tag<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    let (_, _, name, _, _) = (
        '<',
        opt('/'),
        take_while(1.., AsChar::is_alphanum),
        take_till(0.., ['<', '>', '\n']),
        '>',
    )
        .parse_next(input)?;

    if name.eq_ignore_ascii_case("br") {
        Ok(Piece::Space)
    } else {
        Ok(Piece::Skip)
    }
}

/// Named and numeric character references.
fn entity<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    let named = take_while(1..=8, AsChar::is_alpha).verify_map(|name: &str| match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    });
    let hex = preceded(one_of(['x', 'X']), take_while(1..=6, AsChar::is_hex_digit))
        .verify_map(|digits: &str| u32::from_str_radix(digits, 16).ok().and_then(char::from_u32));
    let decimal = take_while(1..=7, AsChar::is_dec_digit)
        .verify_map(|digits: &str| digits.parse::<u32>().ok().and_then(char::from_u32));

    delimited('&', alt((named, preceded('#', alt((hex, decimal))))), ';')
        .map(Piece::Char)
        .parse_next(input)
}

/// Strikethrough markers, always dropped.
fn emphasis<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    "~~".value(Piece::Skip).parse_next(input)
}

fn delimiter<'a>(input: &mut &'a str) -> IResult<Piece<'a>> {
    let run = alt((take_while(1.., '*'), take_while(1.., '_'))).parse_next(input)?;
    let next = peek(opt(any)).parse_next(input)?;
    Ok(Piece::Delimiter { run, next })
}
