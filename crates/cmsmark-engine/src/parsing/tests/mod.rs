//! Cross-module tests: the block parser, inline tokenizer and enhancement
//! extractor run together over whole documents.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    enhance::Card,
    parsing::{
        blocks::{Block, parse_blocks},
        cards_for_block,
        inline::{InlineNode, LinkKind, tokenize_inline},
        inline_for_block, parse_document, snapshot,
    },
};

const ARTICLE: &str = "# Weekly specials

Fresh **paneer tikka** and *masala chai* all week.
Watch the recipe https://youtu.be/xyz789 or see www.menu.io/today.

> Best in town
> says everyone

1. Order online
2. Pick up

- Veg
- Non-veg

| Dish | Price |
|:-----|------:|
| Dal | 120 |
| Naan | 30 | extra |

```text
raw **not bold** https://not.a/card
```

---
Thanks for reading!";

#[rstest]
#[case(ARTICLE)]
#[case("")]
#[case("\n\n\n")]
#[case("no structure at all")]
#[case("|A|B|\n|x|y|\n|1|2|")]
#[case("```\nunterminated\n# still text")]
#[case("line\r\nwith\r\ncrlf\r\n\r\n- a\r\n- b")]
#[case("> q\n>\n> q2\n***\n####### seven\n1.nope\n-nope")]
#[case("![](www.a.io/b.png) [btn: Go](https://g.io) ** * ` [x](y)")]
fn invariants_hold(#[case] text: &str) {
    let doc = parse_document(text);
    snapshot::invariants(text, &doc);
}

#[test]
fn article_block_sequence() {
    let kinds: Vec<_> = parse_blocks(ARTICLE).iter().map(Block::kind_name).collect();
    assert_eq!(kinds, vec![
        "Heading",
        "Paragraph",
        "Blockquote",
        "OrderedList",
        "UnorderedList",
        "Table",
        "CodeBlock",
        "HorizontalRule",
        "Paragraph",
    ]);
}

#[test]
fn article_paragraph_cards() {
    let doc = parse_document(ARTICLE);
    let cards = cards_for_block(&doc.blocks[1]);
    assert_eq!(cards, vec![
        Card::YouTubeEmbed {
            video_id: "xyz789".into()
        },
        Card::LinkCard {
            url: "https://www.menu.io/today".into(),
            domain: "menu.io".into()
        },
    ]);
}

#[test]
fn article_paragraph_hides_urls_inline() {
    let doc = parse_document(ARTICLE);
    let nodes = inline_for_block(&doc.blocks[1]);
    let hidden: Vec<_> = nodes
        .iter()
        .filter_map(|n| match n {
            InlineNode::Link {
                kind: LinkKind::RawUrl,
                href,
                ..
            } => Some(href.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(hidden, vec!["https://youtu.be/xyz789", "https://www.menu.io/today"]);
}

#[test]
fn code_blocks_get_no_inline_nodes_or_cards() {
    let doc = parse_document(ARTICLE);
    let code = doc
        .blocks
        .iter()
        .find(|b| matches!(b, Block::CodeBlock { .. }))
        .unwrap();
    assert!(inline_for_block(code).is_empty());
    assert!(cards_for_block(code).is_empty());
}

#[test]
fn quotes_are_tokenized_but_get_no_cards() {
    let quote = Block::Blockquote {
        text: "**loud** https://x.io/a".into(),
    };
    assert!(matches!(inline_for_block(&quote)[0], InlineNode::Bold { .. }));
    assert!(cards_for_block(&quote).is_empty());
}

#[test]
fn table_keeps_ragged_row() {
    let doc = parse_document(ARTICLE);
    let Some(Block::Table { header, rows }) = doc.blocks.get(5) else {
        panic!("expected table at index 5");
    };
    assert_eq!(header, &vec!["Dish".to_string(), "Price".to_string()]);
    assert_eq!(rows[1], vec!["Naan", "30", "extra"]);
}

#[test]
fn tokenizer_is_deterministic_across_calls() {
    let text = "*a* **b** `c` https://d.io";
    let first = tokenize_inline(text);
    for _ in 0..5 {
        assert_eq!(tokenize_inline(text), first);
    }
}

#[test]
fn document_survives_json_round_trip() {
    let doc = parse_document(ARTICLE);
    let json = serde_json::to_string(&doc).unwrap();
    let back: crate::parsing::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn inline_nodes_and_cards_survive_json_round_trip() {
    let nodes =
        tokenize_inline("`c` **b** ![pic](www.x.io/p.png) [btn: Go](https://g.io) www.y.io/z");
    let json = serde_json::to_value(&nodes).unwrap();
    assert_eq!(json[0]["node"], "code_span");
    assert_eq!(json.as_array().unwrap().last().unwrap()["kind"], "raw_url");
    let back: Vec<InlineNode> = serde_json::from_value(json).unwrap();
    assert_eq!(back, nodes);

    let cards = cards_for_block(&parse_document(ARTICLE).blocks[1]);
    let json = serde_json::to_value(&cards).unwrap();
    assert_eq!(json[0]["kind"], "you_tube_embed");
    let back: Vec<Card> = serde_json::from_value(json).unwrap();
    assert_eq!(back, cards);
}
