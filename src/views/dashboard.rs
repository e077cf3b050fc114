use crate::artifacts::{ArtifactKind, AssetLayout};
use crate::content;
use crate::page::{Block, Download, DownloadSource, ImageBlock, ImageWidth, Link, Notice, Page};
use super::View;

/// Dashboard page exports, in display order. `pag2.png` is the real file name.
pub const PAGES: [&str; 4] = ["page1.png", "pag2.png", "page3.png", "page4.png"];

pub const PBIX_FILE_NAME: &str = "powerbi.pbix";
pub const PBIX_MIME: &str = "application/octet-stream";

pub fn render(layout: &AssetLayout) -> Page {
    let mut page = Page::new(View::Dashboard.title());

    for name in PAGES {
        page.push(Block::Image(ImageBlock {
            path: layout.dashboard(ArtifactKind::Image, name).path,
            width: ImageWidth::Container,
        }));
    }

    let pbix = layout.dashboard(ArtifactKind::Binary, PBIX_FILE_NAME);
    match pbix.read_bytes() {
        Ok(bytes) => page.push(Block::Download(Download {
            label: content::PBIX_DOWNLOAD_LABEL,
            file_name: PBIX_FILE_NAME,
            mime: PBIX_MIME,
            source: DownloadSource::Bytes(bytes.into()),
        })),
        Err(e) => {
            log::warn!("{e}");
            page.push(Block::Notice(Notice::warning(content::PBIX_MISSING)));
        }
    }

    page.push(Block::Separator);
    page.push(Block::Subheading(content::REPORT_HEADING));
    page.push(Block::Link(Link {
        caption: None,
        text: content::REPORT_LINK_TEXT,
        url: content::REPORT_URL,
    }));
    page
}
