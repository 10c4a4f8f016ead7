//! # HTML Rendering
//!
//! Renders a [`Document`] to an HTML fragment. Inline nodes come from
//! [`tokenize_inline`] per text run; cards come from
//! [`extract_enhancements`](crate::enhance::extract_enhancements) and are only
//! attached to paragraphs. Hidden link nodes produce no output.

use html_escape::{encode_double_quoted_attribute as escape_attr, encode_text as escape};

use crate::{
    enhance::{Card, domain_of},
    parsing::{
        Document, cards_for_block,
        blocks::Block,
        inline::{InlineNode, tokenize_inline},
    },
};

/// Switches for optional output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit enhancement cards under paragraphs.
    pub cards: bool,
    /// Add `loading="lazy"` to images.
    pub lazy_images: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cards: true,
            lazy_images: true,
        }
    }
}

pub fn render_html(doc: &Document, opts: &RenderOptions) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        render_block(&mut out, block, opts);
        out.push('\n');
    }
    out
}

fn render_block(out: &mut String, block: &Block, opts: &RenderOptions) {
    match block {
        Block::Heading { depth, text } => {
            out.push_str(&format!("<h{depth}>"));
            render_inline(out, text, opts);
            out.push_str(&format!("</h{depth}>"));
        }
        Block::Paragraph { text } => {
            out.push_str("<p>");
            render_inline(out, text, opts);
            out.push_str("</p>");
            if opts.cards {
                render_cards(out, &cards_for_block(block), opts);
            }
        }
        Block::Blockquote { text } => {
            out.push_str("<blockquote>");
            render_inline(out, text, opts);
            out.push_str("</blockquote>");
        }
        Block::OrderedList { items } => render_list(out, "ol", items, opts),
        Block::UnorderedList { items } => render_list(out, "ul", items, opts),
        Block::CodeBlock { lang, code } => {
            match lang {
                Some(lang) => out.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    escape_attr(lang)
                )),
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&escape(code));
            out.push_str("</code></pre>");
        }
        Block::HorizontalRule => out.push_str("<hr>"),
        Block::Table { header, rows } => {
            out.push_str("<table><thead><tr>");
            for cell in header {
                out.push_str("<th>");
                render_inline(out, cell, opts);
                out.push_str("</th>");
            }
            out.push_str("</tr></thead><tbody>");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str("<td>");
                    render_inline(out, cell, opts);
                    out.push_str("</td>");
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table>");
        }
    }
}

fn render_list(out: &mut String, tag: &str, items: &[String], opts: &RenderOptions) {
    out.push_str(&format!("<{tag}>"));
    for item in items {
        out.push_str("<li>");
        render_inline(out, item, opts);
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
}

fn render_inline(out: &mut String, run: &str, opts: &RenderOptions) {
    for node in tokenize_inline(run) {
        match node {
            InlineNode::Text { text: t, .. } => out.push_str(&escape(&t)),
            InlineNode::CodeSpan { text: t, .. } => {
                out.push_str(&format!("<code>{}</code>", escape(&t)));
            }
            InlineNode::Bold { text: t, .. } => {
                out.push_str(&format!("<strong>{}</strong>", escape(&t)));
            }
            InlineNode::Italic { text: t, .. } => {
                out.push_str(&format!("<em>{}</em>", escape(&t)));
            }
            InlineNode::Image { href, alt, .. } => {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\"",
                    escape_attr(&href),
                    escape_attr(&alt)
                ));
                if opts.lazy_images {
                    out.push_str(" loading=\"lazy\"");
                }
                out.push('>');
            }
            InlineNode::Link { .. } => {}
        }
    }
}

fn render_cards(out: &mut String, cards: &[Card], opts: &RenderOptions) {
    if cards.is_empty() {
        return;
    }
    out.push_str("<div class=\"card-stack\">");
    for card in cards {
        match card {
            Card::YouTubeEmbed { video_id } => out.push_str(&format!(
                "<div class=\"embed\"><iframe src=\"https://www.youtube.com/embed/{}\" \
                 title=\"YouTube video\" allowfullscreen></iframe></div>",
                escape_attr(video_id)
            )),
            Card::VimeoEmbed { video_id } => out.push_str(&format!(
                "<div class=\"embed\"><iframe src=\"https://player.vimeo.com/video/{}\" \
                 title=\"Vimeo video\" allowfullscreen></iframe></div>",
                escape_attr(video_id)
            )),
            Card::ImageCard { url } => {
                out.push_str(&format!(
                    "<figure class=\"image-card\"><img src=\"{}\" alt=\"{}\"",
                    escape_attr(url),
                    escape_attr(url)
                ));
                if opts.lazy_images {
                    out.push_str(" loading=\"lazy\"");
                }
                out.push_str(&format!(
                    "><figcaption>{}</figcaption></figure>",
                    escape(&domain_of(url))
                ));
            }
            Card::VideoCard { url } => out.push_str(&format!(
                "<div class=\"video\"><video src=\"{}\" controls playsinline \
                 preload=\"metadata\"></video></div>",
                escape_attr(url)
            )),
            Card::LinkCard { url, domain } => out.push_str(&format!(
                "<div class=\"link-card\"><div class=\"link-host\">{}</div>\
                 <div class=\"link-url\">{}</div>\
                 <a href=\"{}\" rel=\"noopener noreferrer\">Open →</a></div>",
                escape(domain),
                escape(url),
                escape_attr(url)
            )),
        }
    }
    out.push_str("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn html(input: &str) -> String {
        render_html(&parse_document(input), &RenderOptions::default())
    }

    #[test]
    fn heading_with_inline_styles() {
        assert_eq!(
            html("## Hot **deals** `now`"),
            "<h2>Hot <strong>deals</strong> <code>now</code></h2>\n"
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(html("a < b & c"), "<p>a &lt; b &amp; c</p>\n");
    }

    #[test]
    fn paragraph_link_becomes_card_not_text() {
        let out = html("menu at https://shop.io/menu");
        assert!(out.starts_with("<p>menu at </p><div class=\"card-stack\">"));
        assert!(out.contains("<div class=\"link-host\">shop.io</div>"));
        assert!(out.contains("<a href=\"https://shop.io/menu\" rel=\"noopener noreferrer\">"));
    }

    #[test]
    fn youtube_and_vimeo_embeds() {
        let out = html("https://youtube.com/watch?v=abc https://vimeo.com/99");
        assert!(out.contains("src=\"https://www.youtube.com/embed/abc\""));
        assert!(out.contains("src=\"https://player.vimeo.com/video/99\""));
    }

    #[test]
    fn image_card_caption_is_domain() {
        let out = html("look www.pics.io/a.jpg");
        assert!(out.contains("<figcaption>pics.io</figcaption>"));
        assert!(out.contains("loading=\"lazy\""));
    }

    #[test]
    fn cards_can_be_disabled() {
        let opts = RenderOptions {
            cards: false,
            lazy_images: false,
        };
        let doc = parse_document("see https://a.io/x ![i](https://a.io/i.png)");
        let out = render_html(&doc, &opts);
        assert_eq!(out, "<p>see  <img src=\"https://a.io/i.png\" alt=\"i\"></p>\n");
    }

    #[test]
    fn quotes_never_get_cards() {
        assert_eq!(html("> https://a.io/x"), "<blockquote></blockquote>\n");
    }

    #[test]
    fn lists_code_rule_and_table() {
        let out = html("- *a*\n\n1. b\n\n```rust\nlet x = 1 < 2;\n```\n---\n|H|\n|---|\n|**c**|");
        assert_eq!(
            out,
            "<ul><li><em>a</em></li></ul>\n\
             <ol><li>b</li></ol>\n\
             <pre><code class=\"language-rust\">let x = 1 &lt; 2;</code></pre>\n\
             <hr>\n\
             <table><thead><tr><th>H</th></tr></thead><tbody><tr><td><strong>c</strong></td></tr></tbody></table>\n"
        );
    }
}
