use crate::artifacts::{ArtifactError, ArtifactKind, AssetLayout};
use crate::content;
use crate::page::{Block, HtmlEmbed, Notice, Page};
use super::View;

pub const HEATMAP: &str = "missing_heatmap.html";
pub const HEATMAP_WIDTH: f32 = 900.0;
pub const HEATMAP_HEIGHT: f32 = 600.0;

pub fn render(layout: &AssetLayout) -> Page {
    let mut page = Page::new(View::GeoAnalysis.title());
    page.push(Block::Text(content::GEO_INTRO));

    let heatmap = layout.visual(ArtifactKind::Html, HEATMAP);
    match heatmap.read_text() {
        Ok(html) => page.push(Block::Html(HtmlEmbed {
            path: heatmap.path,
            content: html,
            width: HEATMAP_WIDTH,
            height: HEATMAP_HEIGHT,
        })),
        Err(ArtifactError::NotFound { path }) => {
            log::warn!("Heatmap missing: {}", path.display());
            page.push(Block::Notice(Notice::error(format!(
                "Heatmap file not found: {}",
                path.display()
            ))));
        }
        Err(e) => {
            log::error!("{e}");
            page.push(Block::Notice(Notice::error(e.to_string())));
        }
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::VISUAL_DIR;
    use crate::page::Severity;

    #[test]
    fn embeds_heatmap_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(VISUAL_DIR)).unwrap();
        let html = "<!DOCTYPE html>\n<div id=\"map\" style=\"width:100%\"></div>\r\n<script>var z = 1 < 2 && \"ü\";</script>\n";
        std::fs::write(dir.path().join(VISUAL_DIR).join(HEATMAP), html).unwrap();

        let page = render(&AssetLayout::from_root(dir.path()));
        let embed = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Html(e) => Some(e),
                _ => None,
            })
            .unwrap();
        assert_eq!(embed.content, html);
        assert_eq!((embed.width, embed.height), (900.0, 600.0));
        assert_eq!(page.notices().count(), 0);
    }

    #[test]
    fn missing_heatmap_is_one_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let layout = AssetLayout::from_root(dir.path());
        let page = render(&layout);

        let path = layout.visual(ArtifactKind::Html, HEATMAP).path;
        let notices: Vec<_> = page.notices().collect();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Error);
        assert!(notices[0].message.contains(&path.display().to_string()));
        assert!(!page.blocks.iter().any(|b| matches!(b, Block::Html(_))));
    }
}
