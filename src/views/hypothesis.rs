use crate::content;
use crate::page::{Block, Page};
use super::View;

/// Precomputed results only; no test statistics are evaluated here.
pub fn render() -> Page {
    let mut page = Page::new(View::HypothesisTesting.title());
    for finding in content::FINDINGS {
        page.push(Block::Subheading(finding.question));
        page.push(Block::Text(finding.statement));
    }
    page
}
