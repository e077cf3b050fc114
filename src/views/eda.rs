use crate::artifacts::{ArtifactKind, AssetLayout};
use crate::content;
use crate::page::{Block, ImageBlock, ImageWidth, Notice, Page};
use super::View;

/// Chart files in the visual-assets directory, in display order.
pub const CHARTS: [&str; 3] = ["top_states.png", "year_trends.png", "age_gender_bar.png"];

pub const CHART_WIDTH: f32 = 700.0;

/// Each chart is checked on its own: a missing file becomes an error notice
/// in its slot and the remaining charts still render.
pub fn render(layout: &AssetLayout) -> Page {
    let mut page = Page::new(View::Eda.title());
    page.push(Block::Text(content::EDA_INTRO));

    for name in CHARTS {
        let chart = layout.visual(ArtifactKind::Image, name);
        if chart.exists() {
            page.push(Block::Image(ImageBlock {
                path: chart.path,
                width: ImageWidth::Fixed(CHART_WIDTH),
            }));
        } else {
            log::warn!("Missing {:?} artifact: {}", chart.kind, chart.path.display());
            page.push(Block::Notice(Notice::error(format!(
                "Image not found: {}",
                chart.path.display()
            ))));
        }
    }
    page
}
