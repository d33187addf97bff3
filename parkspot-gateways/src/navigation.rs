use parkspot_core::gateways::{navigation::UrlOpener, GatewayError};
use url::Url;

/// Writes the URL to stdout instead of opening it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Print;

impl UrlOpener for Print {
    fn open(&self, url: &Url) -> Result<(), GatewayError> {
        println!("{url}");
        Ok(())
    }
}

/// Opens the URL with the default handler of the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct System;

impl UrlOpener for System {
    fn open(&self, url: &Url) -> Result<(), GatewayError> {
        log::debug!("Opening {url}");
        open_raw(url.as_str()).map_err(|err| {
            GatewayError::Unavailable(format!("Could not open {url}: {err}"))
        })
    }
}

#[cfg(not(test))]
fn open_raw(url: &str) -> std::io::Result<()> {
    use std::process::Command;

    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(url).spawn()?;
    Ok(())
}

/// Don't actually launch a browser while running the tests.
#[cfg(test)]
fn open_raw(url: &str) -> std::io::Result<()> {
    log::debug!("Would open {url}");
    Ok(())
}
