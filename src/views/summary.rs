use crate::content;
use crate::page::{Block, Page};
use super::View;

pub fn render() -> Page {
    let mut page = Page::new(View::Summary.title());
    page.push(Block::Subheading(content::SUMMARY_HEADING));
    page.push(Block::StrongLines(content::SUMMARY_POINTS));
    page.push(Block::Separator);
    page.push(Block::Subheading(content::FEEDBACK_HEADING));
    page.push(Block::FeedbackForm);
    page
}
