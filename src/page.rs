use std::path::PathBuf;
use std::sync::Arc;

use crate::content::Span;

// ---------------------------------------------------------------------------
// Page model – what a view renders, independent of egui
// ---------------------------------------------------------------------------

/// One rendered view: a title followed by blocks, painted top to bottom.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone)]
pub enum Block {
    Subheading(&'static str),
    Text(&'static [Span]),
    /// Bulleted list.
    Bullets(&'static [&'static str]),
    /// Emphasised lines, one per entry.
    StrongLines(&'static [&'static str]),
    Table(TablePreview),
    Image(ImageBlock),
    Html(HtmlEmbed),
    Download(Download),
    Link(Link),
    Notice(Notice),
    FeedbackForm,
    Separator,
}

/// Leading rows of a table, cells as text.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageWidth {
    Fixed(f32),
    /// Fill the available width.
    Container,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub path: PathBuf,
    pub width: ImageWidth,
}

impl ImageBlock {
    /// URI understood by the egui file loader.
    pub fn uri(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

/// An HTML fragment shown in a fixed-size frame, content untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlEmbed {
    pub path: PathBuf,
    pub content: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub enum DownloadSource {
    /// The loaded dataset, re-encoded to CSV on each request.
    DatasetCsv,
    /// Bytes read when the page was rendered.
    Bytes(Arc<[u8]>),
}

#[derive(Debug, Clone)]
pub struct Download {
    pub label: &'static str,
    pub file_name: &'static str,
    pub mime: &'static str,
    pub source: DownloadSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Text shown before the link, if any.
    pub caption: Option<&'static str>,
    pub text: &'static str,
    pub url: &'static str,
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

/// Severity of an inline message.
///
/// Missing EDA images and the missing heatmap are `Error`, while the missing
/// `.pbix` export is only a `Warning`. Both severities are kept on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Success,
            message: message.into(),
        }
    }
}

impl Page {
    pub fn new(title: &'static str) -> Self {
        Page {
            title,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

#[cfg(test)]
impl Page {
    pub fn images(&self) -> impl Iterator<Item = &ImageBlock> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Image(img) => Some(img),
            _ => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Notice(n) => Some(n),
            _ => None,
        })
    }

    pub fn downloads(&self) -> impl Iterator<Item = &Download> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Download(d) => Some(d),
            _ => None,
        })
    }

    /// All visible text on the page, one line per text-bearing item.
    pub fn text(&self) -> String {
        let mut out = vec![self.title.to_string()];
        for block in &self.blocks {
            match block {
                Block::Subheading(s) => out.push(s.to_string()),
                Block::Text(spans) => out.push(spans.iter().map(|s| s.text).collect()),
                Block::Bullets(lines) | Block::StrongLines(lines) => {
                    out.extend(lines.iter().map(|l| l.to_string()))
                }
                Block::Table(t) => {
                    out.push(t.headers.join(","));
                    out.extend(t.rows.iter().map(|r| r.join(",")));
                }
                Block::Download(d) => out.push(d.label.to_string()),
                Block::Link(l) => match l.caption {
                    Some(caption) => out.push(format!("{caption} {}", l.text)),
                    None => out.push(l.text.to_string()),
                },
                Block::Notice(n) => out.push(n.message.clone()),
                Block::Image(_) | Block::Html(_) | Block::FeedbackForm | Block::Separator => {}
            }
        }
        out.join("\n")
    }
}
