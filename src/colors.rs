use colored::CustomColor;
use std::{sync::LazyLock, time::Duration};

// a failed or timed out probe counts as a dark terminal
static LIGHT_BACKGROUND: LazyLock<bool> = LazyLock::new(|| {
    matches!(
        termbg::theme(Duration::from_millis(10)),
        Ok(termbg::Theme::Light)
    )
});

pub static GENERAL_TEXT_COLOR: LazyLock<CustomColor> =
    LazyLock::new(|| themed([64, 64, 64], [160, 160, 160]));
pub static PATH_COLOR: LazyLock<CustomColor> =
    LazyLock::new(|| themed([0, 169, 233], [0, 169, 223]));
pub static WARNING_COLOR: LazyLock<CustomColor> =
    LazyLock::new(|| themed([112, 127, 35], [187, 142, 35]));
pub static ERROR_COLOR: LazyLock<CustomColor> =
    LazyLock::new(|| themed([200, 30, 30], [250, 90, 90]));
pub static SUCCESS_COLOR: LazyLock<CustomColor> =
    LazyLock::new(|| themed([20, 120, 40], [80, 200, 120]));

fn themed(light: [u8; 3], dark: [u8; 3]) -> CustomColor {
    pick(light, dark, *LIGHT_BACKGROUND)
}

fn pick(light: [u8; 3], dark: [u8; 3], light_background: bool) -> CustomColor {
    let [r, g, b] = if light_background { light } else { dark };
    CustomColor::new(r, g, b)
}
