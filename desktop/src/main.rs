use argh::FromArgs;
use supercompress_core::{application::Application, catalog::Catalog, framebuffer::DisplayBuffers};

use crate::minifb_display::MinifbDisplay;
use crate::png_assets::PngAssets;

mod minifb_display;
mod png_assets;

const CATALOG: &[&str] = &["Select Image", "Girl", "Bus", "Paris"];

#[derive(FromArgs)]
/// Viewer options
struct Args {
    /// directory holding the catalog images
    #[argh(option, short = 'a', default = "String::from(\"assets\")")]
    assets: String,

    /// initial window scale (1, 2 or 4)
    #[argh(option, short = 's', default = "2")]
    scale: u8,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    log::info!("SuperCompress viewer started");

    let catalog = Catalog::new(CATALOG).expect("catalog is malformed");
    let assets = PngAssets::new_with_base_path(args.assets.into());

    let scale = match args.scale {
        1 => minifb::Scale::X1,
        4 => minifb::Scale::X4,
        _ => minifb::Scale::X2,
    };

    let mut display_buffers = Box::new(DisplayBuffers::default());
    let mut display = MinifbDisplay::new(scale);
    let mut application = Application::new(&mut display_buffers, catalog, assets);

    while display.is_open() && application.running() {
        display.update();
        application.update(&display.get_buttons());
        application.draw(&mut display);
    }
}
