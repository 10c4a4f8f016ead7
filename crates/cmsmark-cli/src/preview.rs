//! Terminal rendering of a parsed document for the content pane.

use cmsmark_engine::{
    Block, Card, Document, InlineNode, RenderOptions, domain_of, tokenize_inline,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE_WIDTH: usize = 40;

/// Lines for the content pane: one block after another, separated by a
/// blank line, with a line per card under each paragraph.
pub fn document_lines(doc: &Document, opts: &RenderOptions) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in &doc.blocks {
        match block {
            Block::Heading { depth, text } => {
                let style = Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD);
                let prefix = format!("{} ", "#".repeat(*depth as usize));
                push_inline(&mut lines, Span::styled(prefix, style), text, style);
            }
            Block::Paragraph { text } => {
                push_inline(&mut lines, Span::raw(""), text, Style::default());
                if opts.cards {
                    lines.extend(cmsmark_engine::cards_for_block(block).iter().map(card_line));
                }
            }
            Block::Blockquote { text } => {
                let bar = Span::styled("│ ", Style::default().fg(Color::DarkGray));
                push_inline(&mut lines, bar, text, Style::default().fg(Color::Gray));
            }
            Block::OrderedList { items } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = Span::raw(format!("{}. ", i + 1));
                    push_inline(&mut lines, marker, item, Style::default());
                }
            }
            Block::UnorderedList { items } => {
                for item in items {
                    push_inline(&mut lines, Span::raw("• "), item, Style::default());
                }
            }
            Block::CodeBlock { lang, code } => {
                let fence = Style::default().fg(Color::DarkGray);
                let body = Style::default().fg(Color::Green);
                let label = lang.as_deref().unwrap_or_default();
                lines.push(Line::from(Span::styled(format!("```{label}"), fence)));
                lines.extend(
                    code.lines()
                        .map(|l| Line::from(Span::styled(l.to_string(), body))),
                );
                lines.push(Line::from(Span::styled("```", fence)));
            }
            Block::HorizontalRule => lines.push(Line::from("─".repeat(RULE_WIDTH))),
            Block::Table { header, rows } => {
                let bold = Style::default().add_modifier(Modifier::BOLD);
                lines.push(Line::from(Span::styled(header.join(" │ "), bold)));
                lines.extend(rows.iter().map(|r| Line::from(r.join(" │ "))));
            }
        }
        lines.push(Line::default());
    }

    lines
}

/// Appends `text` as styled lines. Every source line break starts a new
/// output line carrying `prefix` again; hidden link nodes are skipped.
fn push_inline(lines: &mut Vec<Line<'static>>, prefix: Span<'static>, text: &str, base: Style) {
    let mut current = vec![prefix.clone()];

    for node in tokenize_inline(text) {
        let (content, style) = match node {
            InlineNode::Text { text, .. } => (text, base),
            InlineNode::CodeSpan { text, .. } => (text, base.fg(Color::Yellow)),
            InlineNode::Bold { text, .. } => (text, base.add_modifier(Modifier::BOLD)),
            InlineNode::Italic { text, .. } => (text, base.add_modifier(Modifier::ITALIC)),
            InlineNode::Image { alt, .. } => {
                (format!("[image: {alt}]"), base.fg(Color::Magenta))
            }
            InlineNode::Link { .. } => continue,
        };

        let mut pieces = content.split('\n');
        if let Some(first) = pieces.next() {
            current.push(Span::styled(first.to_string(), style));
        }
        for piece in pieces {
            lines.push(Line::from(std::mem::take(&mut current)));
            current = vec![prefix.clone(), Span::styled(piece.to_string(), style)];
        }
    }

    lines.push(Line::from(current));
}

fn card_line(card: &Card) -> Line<'static> {
    let (label, detail) = match card {
        Card::YouTubeEmbed { video_id } => ("▶ YouTube", video_id.clone()),
        Card::VimeoEmbed { video_id } => ("▶ Vimeo", video_id.clone()),
        Card::ImageCard { url } => ("▣ Image", format!("{} ({})", url, domain_of(url))),
        Card::VideoCard { url } => ("▶ Video", url.clone()),
        Card::LinkCard { url, domain } => ("→ Link", format!("{domain} {url}")),
    };
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(Color::Blue)),
        Span::styled(detail, Style::default().add_modifier(Modifier::UNDERLINED)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmsmark_engine::parse_document;
    use pretty_assertions::assert_eq;

    fn plain(input: &str, opts: RenderOptions) -> Vec<String> {
        document_lines(&parse_document(input), &opts)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        assert_eq!(plain("# Title\n\n- a\n- b\n\n1. x", RenderOptions::default()), vec![
            "# Title", "", "• a", "• b", "", "1. x", "",
        ]);
    }

    #[test]
    fn paragraph_urls_become_card_lines() {
        let lines = plain("Menu: www.shop.io/menu", RenderOptions::default());
        assert_eq!(lines, vec![
            "Menu: ",
            "  → Link: shop.io https://www.shop.io/menu",
            "",
        ]);
    }

    #[test]
    fn cards_can_be_hidden() {
        let opts = RenderOptions {
            cards: false,
            lazy_images: true,
        };
        assert_eq!(plain("see https://vimeo.com/42", opts), vec!["see ", ""]);
    }

    #[test]
    fn quote_lines_keep_the_bar() {
        assert_eq!(plain("> one\n> **two**", RenderOptions::default()), vec![
            "│ one", "│ two", "",
        ]);
    }

    #[test]
    fn styled_spans_carry_modifiers() {
        let doc = parse_document("plain *it* **bold**");
        let lines = document_lines(&doc, &RenderOptions::default());
        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "bold")
            .unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        let italic = lines[0].spans.iter().find(|s| s.content == "it").unwrap();
        assert!(italic.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn code_and_table() {
        assert_eq!(
            plain("```sh\nls -la\n```\n|A|B|\n|---|---|\n|1|2|", RenderOptions::default()),
            vec!["```sh", "ls -la", "```", "", "A │ B", "1 │ 2", ""]
        );
    }
}
