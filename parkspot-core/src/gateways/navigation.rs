use super::GatewayError;
use url::Url;

/// Hands a URL over to the operating system or browser.
pub trait UrlOpener {
    fn open(&self, url: &Url) -> Result<(), GatewayError>;
}
