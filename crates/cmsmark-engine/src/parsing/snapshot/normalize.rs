use serde::Serialize;

use crate::{
    enhance::Card,
    parsing::{
        Document, cards_for_block,
        blocks::Block,
        inline::{InlineNode, tokenize_inline},
    },
};

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    /// All blocks in the document.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind, with depth or language where relevant (e.g. `"Heading(2)"`).
    pub kind: String,
    /// Raw text runs: the text, each list item, or each table row joined
    /// with `" | "`.
    pub text: Vec<String>,
    /// Inline nodes of every run, one line each.
    pub inline: Vec<String>,
    /// Cards, one line each.
    pub cards: Vec<String>,
}

/// Converts a document into a snapshot with inline nodes and cards resolved.
pub fn normalize(doc: &Document) -> Snap {
    let blocks = doc
        .blocks
        .iter()
        .map(|b| {
            let kind = match b {
                Block::Heading { depth, .. } => format!("Heading({depth})"),
                Block::CodeBlock {
                    lang: Some(lang), ..
                } => format!("CodeBlock({lang})"),
                other => other.kind_name().to_string(),
            };

            let (text, runs): (Vec<String>, Vec<&str>) = match b {
                Block::Heading { text, .. }
                | Block::Paragraph { text }
                | Block::Blockquote { text } => (vec![text.clone()], vec![text.as_str()]),
                Block::OrderedList { items } | Block::UnorderedList { items } => {
                    (items.clone(), items.iter().map(String::as_str).collect())
                }
                Block::CodeBlock { code, .. } => (vec![code.clone()], vec![]),
                Block::HorizontalRule => (vec![], vec![]),
                Block::Table { header, rows } => (
                    std::iter::once(header)
                        .chain(rows)
                        .map(|r| r.join(" | "))
                        .collect(),
                    vec![],
                ),
            };

            let inline = runs
                .into_iter()
                .flat_map(tokenize_inline)
                .map(|n| inline_line(&n))
                .collect();
            let cards = cards_for_block(b).iter().map(card_line).collect();

            BlockSnap {
                kind,
                text,
                inline,
                cards,
            }
        })
        .collect();

    Snap { blocks }
}

fn inline_line(n: &InlineNode) -> String {
    let sp = n.span();
    let range = format!("{}..{}", sp.start, sp.end);
    match n {
        InlineNode::Text { text, .. } => format!("Text {range} {text}"),
        InlineNode::CodeSpan { text, .. } => format!("CodeSpan {range} {text}"),
        InlineNode::Bold { text, .. } => format!("Bold {range} {text}"),
        InlineNode::Italic { text, .. } => format!("Italic {range} {text}"),
        InlineNode::Image { href, alt, .. } => format!("Image {range} {alt} -> {href}"),
        InlineNode::Link { kind, href, .. } => format!("Link({kind:?}) {range} -> {href}"),
    }
}

fn card_line(c: &Card) -> String {
    match c {
        Card::YouTubeEmbed { video_id } => format!("YouTubeEmbed {video_id}"),
        Card::VimeoEmbed { video_id } => format!("VimeoEmbed {video_id}"),
        Card::ImageCard { url } => format!("ImageCard {url}"),
        Card::VideoCard { url } => format!("VideoCard {url}"),
        Card::LinkCard { url, domain } => format!("LinkCard {domain} {url}"),
    }
}
