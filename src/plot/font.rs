use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};

use crate::error::{Error, Result};

/// Family name the charts ask for.
pub const FAMILY: &str = "sans-serif";

/// Make the embedded DejaVu face available to plotters under [`FAMILY`].
///
/// Registration happens once per process; later calls only report the
/// outcome of the first attempt.
pub fn ensure_registered() -> Result<()> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();

    let ok = *REGISTERED.get_or_init(|| {
        let data: &'static [u8] = dejavu::sans_mono::regular();
        match register_font(FAMILY, FontStyle::Normal, data) {
            Ok(()) => {
                log::debug!("Registered embedded font as '{FAMILY}'");
                true
            }
            Err(_) => {
                log::error!("Embedded DejaVu Sans Mono face was rejected by the font loader");
                false
            }
        }
    });

    if ok {
        Ok(())
    } else {
        Err(Error::Font)
    }
}
