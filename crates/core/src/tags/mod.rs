//! Start tags of an HTML fragment, straight off the html5ever tokenizer.
//!
//! No tree is built: tags come back in the order they appear in the source,
//! whatever element they sit in, and nesting depth costs nothing.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// One start (or self-closing) tag with its attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct StartTag {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

impl StartTag {
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }
}

/// Keeps the start tags whose name is listed; everything else is skipped.
struct TagCollector<'a> {
    names: &'a [&'a str],
    tags: RefCell<Vec<StartTag>>,
}

impl TokenSink for TagCollector<'_> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if let Token::TagToken(tag) = token {
            if tag.kind == TagKind::StartTag && self.names.contains(&&*tag.name) {
                self.tags.borrow_mut().push(start_tag(tag));
            }
        }
        TokenSinkResult::Continue
    }
}

fn start_tag(tag: Tag) -> StartTag {
    // The tokenizer has already dropped repeated attributes (first one wins).
    let attributes = tag
        .attrs
        .into_iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect();
    StartTag {
        name: tag.name.to_string(),
        attributes,
    }
}

/// Tokenize `html` and return every start tag named in `names`, in source order.
///
/// Tag and attribute names come back lowercased; attribute values keep
/// their case with character references decoded. Unclosed, stray and
/// self-closing tags are all fine.
pub fn start_tags(html: &str, names: &[&str]) -> Vec<StartTag> {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let collector = TagCollector {
        names,
        tags: RefCell::new(Vec::new()),
    };
    let tokenizer = Tokenizer::new(collector, TokenizerOpts::default());
    // The sink never asks to pause, so one feed consumes the whole queue.
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.tags.into_inner()
}
