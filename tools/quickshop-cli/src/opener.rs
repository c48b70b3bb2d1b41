//! Opening checkout links in the system browser.

use quickshop_commerce::checkout::LinkOpener;

/// Opens links with the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        tracing::debug!(url, "opening link in browser");
        webbrowser::open(url)
    }
}
