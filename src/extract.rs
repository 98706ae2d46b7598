/*! Text block extraction.

Turns a raw HTML transcription into the ordered list of text blocks the
classifier works on: one block per heading or paragraph, whitespace collapsed,
empty ones dropped.

A parsed [BlockSource] can be iterated as many times as needed.
!*/
use std::path::Path;

use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::Error;

const BLOCK_TAGS: [&str; 7] = ["h1", "h2", "h3", "h4", "h5", "h6", "p"];

/// A parsed markup document.
pub struct BlockSource {
    document: Html,
    selector: Selector,
}

impl BlockSource {
    /// Parse a markup document held in memory.
    pub fn parse(markup: &str) -> Result<Self, Error> {
        if markup.trim().is_empty() {
            return Err(Error::Parse {
                path: None,
                reason: "document is empty".to_string(),
            });
        }
        if !markup.contains('<') {
            return Err(Error::Parse {
                path: None,
                reason: "no markup found".to_string(),
            });
        }

        let document = Html::parse_document(markup);
        if !document.errors.is_empty() {
            debug!("html parser recovered from {} errors", document.errors.len());
        }

        let selector = Selector::parse(&BLOCK_TAGS.join(", ")).map_err(|e| Error::Parse {
            path: None,
            reason: format!("invalid block selector: {:?}", e),
        })?;

        Ok(Self { document, selector })
    }

    /// Read and parse a document from disk.
    ///
    /// The file is read in one go and must be valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        let markup = String::from_utf8(bytes).map_err(|e| Error::Parse {
            path: Some(path.to_path_buf()),
            reason: e.to_string(),
        })?;

        Self::parse(&markup).map_err(|e| match e {
            Error::Parse { reason, .. } => Error::Parse {
                path: Some(path.to_path_buf()),
                reason,
            },
            e => e,
        })
    }

    /// Iterate over the document's text blocks, in document order.
    ///
    /// Elements nested in another block element (a `<p>` inside a `<p>`-like
    /// heading, for instance) are skipped since their text is already part of
    /// the enclosing block.
    pub fn blocks(&self) -> impl Iterator<Item = String> + '_ {
        self.document
            .select(&self.selector)
            .filter(|element| !has_block_ancestor(element))
            .map(|element| collapse_whitespace(&element.text().collect::<String>()))
            .filter(|text| !text.is_empty())
    }
}

fn has_block_ancestor(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| BLOCK_TAGS.contains(&ancestor.value().name()))
}

/// Collapse every whitespace run (non-breaking spaces included) into a single space.
pub fn collapse_whitespace(input: &str) -> String {
    let mut buf = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space && !buf.is_empty() {
                buf.push(' ');
            }
            last_space = true;
        } else {
            buf.push(ch);
            last_space = false;
        }
    }
    buf.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_paragraphs_in_order() {
        let html = r#"<html><head><title>Ethics</title><style>p { color: red }</style></head>
        <body>
            <h2>PART I.</h2>
            <div><p>PROP. I.   Substance is
            by nature prior to its modifications.</p></div>
            <p>   </p>
            <h3>Proof.</h3>
            <span>not a block</span>
        </body></html>"#;
        let source = BlockSource::parse(html).unwrap();
        let blocks: Vec<String> = source.blocks().collect();
        assert_eq!(
            blocks,
            vec![
                "PART I.",
                "PROP. I. Substance is by nature prior to its modifications.",
                "Proof.",
            ]
        );
    }

    #[test]
    fn restartable() {
        let source = BlockSource::parse("<p>one</p><p>two</p>").unwrap();
        let first: Vec<String> = source.blocks().collect();
        let second: Vec<String> = source.blocks().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn nested_blocks_are_not_duplicated() {
        let source = BlockSource::parse("<h2>PART <p>II</p></h2>").unwrap();
        let blocks: Vec<String> = source.blocks().collect();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn non_breaking_spaces() {
        assert_eq!(collapse_whitespace("\u{a0}I.\u{a0}\u{a0}By that\n"), "I. By that");
    }

    #[test]
    fn not_markup() {
        assert!(matches!(
            BlockSource::parse("   \n "),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            BlockSource::parse("just some text"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn invalid_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.html");
        std::fs::write(&path, [0x3c, 0x70, 0x3e, 0xff, 0xfe]).unwrap();
        match BlockSource::from_path(&path) {
            Err(Error::Parse { path: Some(p), .. }) => assert_eq!(p, path),
            _ => panic!("expected a parse error"),
        }
    }
}
