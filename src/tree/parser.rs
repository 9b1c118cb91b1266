//! Parser for the s-expression tree dump.
//!
//! The format follows the way tree-sitter prints trees, with byte ranges in
//! place of row/column points:
//!
//! ```text
//! (source [0, 14]
//!   (variable_definition_statement [0, 14]
//!     ("let" [0, 3])
//!     name: (identifier [4, 5])
//!     ...))
//! ```
//!
//! Named node types are bare identifiers, anonymous tokens are quoted.
//! Whitespace and `;` comments run to the end of the line are ignored.

use nom::branch::alt;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::error::context;
use nom::multi::*;
use nom::sequence::*;
use nom::{Finish, Parser};
use nom_language::error::convert_error;

use super::node::{SyntaxTree, TreeNode};
use crate::error::{HighlightError, Result};
use crate::result::ParseResult;

/// parse a whole dump, which holds exactly one root node
pub fn parse_tree(input: &str) -> Result<SyntaxTree> {
    match all_consuming(delimited(trivia, node, trivia))
        .parse(input)
        .finish()
    {
        Ok((_, root)) => Ok(SyntaxTree::new(root)),
        Err(e) => Err(HighlightError::TreeDump(convert_error(input, e))),
    }
}

pub fn node(input: &str) -> ParseResult<&str, TreeNode> {
    context("node", node_body).parse(input)
}

fn node_body(input: &str) -> ParseResult<&str, TreeNode> {
    let (input, _) = char('(').parse(input)?;
    let (input, _) = trivia(input)?;
    let (input, kind) = cut(kind).parse(input)?;
    let (input, _) = trivia(input)?;
    let (input, (start_index, end_index)) = cut(range).parse(input)?;
    let (input, children) = many0(preceded(trivia, child)).parse(input)?;
    let (input, _) = trivia(input)?;
    let (input, _) = cut(context("closing parenthesis", char(')'))).parse(input)?;

    Ok((
        input,
        TreeNode {
            kind,
            field: None,
            start_index,
            end_index,
            children,
        },
    ))
}

fn child(input: &str) -> ParseResult<&str, TreeNode> {
    let (input, field) = opt(terminated(field_name, trivia)).parse(input)?;
    let (input, mut node) = node(input)?;
    node.field = field.map(str::to_string);
    Ok((input, node))
}

fn field_name(input: &str) -> ParseResult<&str, &str> {
    terminated(identifier, pair(trivia, char(':'))).parse(input)
}

pub fn kind(input: &str) -> ParseResult<&str, String> {
    context("kind", alt((map(identifier, str::to_string), quoted))).parse(input)
}

pub fn identifier(input: &str) -> ParseResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

/// `"..."` with `\"`, `\\` and `\n` escapes
fn quoted(input: &str) -> ParseResult<&str, String> {
    let escaped = preceded(
        char('\\'),
        cut(alt((value('\n', char('n')), one_of("\"\\")))),
    );
    delimited(
        char('"'),
        fold_many0(
            alt((escaped, none_of("\"\\"))),
            String::new,
            |mut acc, c| {
                acc.push(c);
                acc
            },
        ),
        cut(char('"')),
    )
    .parse(input)
}

/// `[start, end]`
fn range(input: &str) -> ParseResult<&str, (usize, usize)> {
    context(
        "range",
        delimited(
            pair(char('['), multispace0),
            separated_pair(index, (multispace0, char(','), multispace0), index),
            pair(multispace0, char(']')),
        ),
    )
    .parse(input)
}

fn index(input: &str) -> ParseResult<&str, usize> {
    map_res(digit1, |digits: &str| digits.parse::<usize>()).parse(input)
}

fn comment(input: &str) -> ParseResult<&str, &str> {
    recognize(pair(char(';'), take_while(|c: char| c != '\n'))).parse(input)
}

pub fn trivia(input: &str) -> ParseResult<&str, ()> {
    value((), many0_count(alt((multispace1, comment)))).parse(input)
}
