use embedded_graphics::{
    Drawable,
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::BinaryColor,
    prelude::Point,
    text::Text,
};
use log::{error, warn};

use crate::{
    assets::{AssetSource, Bitmap},
    catalog::Catalog,
    display::{Display, RefreshMode},
    framebuffer::DisplayBuffers,
    input::Buttons,
    selection::{DisplayPair, SelectionController},
};

/// Side length of the two image slots.
pub const SLOT_SIZE: u16 = 280;

const PRIMARY_SLOT: Point = Point::new(64, 180);
const SECONDARY_SLOT: Point = Point::new(456, 180);

enum Plane {
    Bw,
    Lsb,
    Msb,
}

/// The one screen: a selector over the catalog on top, the chosen image
/// and its rotation partner side by side below.
pub struct ViewerActivity<Assets: AssetSource> {
    assets: Assets,
    controller: SelectionController,
    focus: usize,
    pair: DisplayPair,
    primary: Option<Bitmap>,
    secondary: Option<Bitmap>,
    full_refresh: bool,
}

impl<Assets: AssetSource> ViewerActivity<Assets> {
    pub fn new(catalog: Catalog, assets: Assets) -> Self {
        let mut controller = SelectionController::new(catalog);
        let pair = controller.reset();
        ViewerActivity {
            assets,
            controller,
            focus: 0,
            pair,
            primary: None,
            secondary: None,
            full_refresh: true,
        }
    }

    pub fn pair(&self) -> &DisplayPair {
        &self.pair
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    fn focus_next(&mut self) {
        self.focus = if self.focus + 1 < self.controller.catalog().len() {
            self.focus + 1
        } else {
            0
        };
    }

    fn focus_prev(&mut self) {
        self.focus = if self.focus > 0 {
            self.focus - 1
        } else {
            self.controller.catalog().len() - 1
        };
    }

    fn load_slot(&self, key: Option<&str>) -> Option<Bitmap> {
        let key = key?;
        match self.assets.load(key) {
            Ok(bitmap) => Some(bitmap),
            Err(err) => {
                // A missing or broken asset shows as an empty slot.
                warn!("failed to load {key}: {err:?}");
                None
            }
        }
    }

    fn apply_selection(&mut self) -> super::UpdateResult {
        match self.controller.select(self.focus) {
            Ok(pair) => {
                self.pair = pair;
                self.primary = self.load_slot(self.pair.primary.as_deref());
                self.secondary = self.load_slot(self.pair.secondary.as_deref());
                self.full_refresh = true;
                super::UpdateResult::Redraw
            }
            Err(err) => {
                error!("selector produced {err:?}");
                super::UpdateResult::None
            }
        }
    }

    fn blit_slot(buffers: &mut DisplayBuffers, bitmap: Option<&Bitmap>, plane: Plane, slot: Point) {
        let Some(bitmap) = bitmap else { return };
        let src = match plane {
            Plane::Bw => &bitmap.bw,
            Plane::Lsb => &bitmap.lsb,
            Plane::Msb => &bitmap.msb,
        };
        // Center the image inside its slot.
        let origin = slot
            + Point::new(
                (SLOT_SIZE as i32 - bitmap.width as i32) / 2,
                (SLOT_SIZE as i32 - bitmap.height as i32) / 2,
            );
        buffers.blit_at(src, bitmap.width, bitmap.height, origin);
    }
}

impl<Assets: AssetSource> super::Activity for ViewerActivity<Assets> {
    fn start(&mut self) {
        log::info!("ViewerActivity started");
    }

    fn update(&mut self, state: &super::ApplicationState) -> super::UpdateResult {
        let buttons = &state.input;
        if buttons.is_pressed(Buttons::Back) {
            self.pair = self.controller.reset();
            self.focus = 0;
            self.primary = None;
            self.secondary = None;
            self.full_refresh = true;
            super::UpdateResult::Redraw
        } else if buttons.any_pressed(&[Buttons::Up, Buttons::Right]) {
            self.focus_prev();
            super::UpdateResult::Redraw
        } else if buttons.any_pressed(&[Buttons::Down, Buttons::Left]) {
            self.focus_next();
            super::UpdateResult::Redraw
        } else if buttons.is_pressed(Buttons::Confirm) {
            self.apply_selection()
        } else {
            super::UpdateResult::None
        }
    }

    fn draw(&mut self, display: &mut dyn Display, buffers: &mut DisplayBuffers) {
        buffers.clear_screen(0xFF);

        let text_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::Off);
        Text::new("SuperCompress", Point::new(20, 30), text_style)
            .draw(buffers)
            .ok();

        for (i, name) in self.controller.catalog().names().enumerate() {
            Text::new(name, Point::new(20, 60 + (i as i32) * 30), text_style)
                .draw(buffers)
                .ok();
            if i == self.focus {
                Text::new(">", Point::new(5, 60 + (i as i32) * 30), text_style)
                    .draw(buffers)
                    .ok();
            }
        }

        // Headings carry text only while nothing is selected.
        if !self.pair.primary_label.is_empty() {
            Text::new(
                self.pair.primary_label,
                Point::new(PRIMARY_SLOT.x, PRIMARY_SLOT.y - 10),
                text_style,
            )
            .draw(buffers)
            .ok();
        }
        if !self.pair.secondary_label.is_empty() {
            Text::new(
                self.pair.secondary_label,
                Point::new(SECONDARY_SLOT.x, SECONDARY_SLOT.y - 10),
                text_style,
            )
            .draw(buffers)
            .ok();
        }

        Self::blit_slot(buffers, self.primary.as_ref(), Plane::Bw, PRIMARY_SLOT);
        Self::blit_slot(buffers, self.secondary.as_ref(), Plane::Bw, SECONDARY_SLOT);
        display.display(
            buffers,
            if self.full_refresh {
                RefreshMode::Full
            } else {
                RefreshMode::Fast
            },
        );
        self.full_refresh = false;

        if self.primary.is_none() && self.secondary.is_none() {
            return;
        }

        buffers.clear_screen(0x00);
        Self::blit_slot(buffers, self.primary.as_ref(), Plane::Msb, PRIMARY_SLOT);
        Self::blit_slot(buffers, self.secondary.as_ref(), Plane::Msb, SECONDARY_SLOT);
        display.copy_to_msb(buffers.get_active_buffer());

        buffers.clear_screen(0x00);
        Self::blit_slot(buffers, self.primary.as_ref(), Plane::Lsb, PRIMARY_SLOT);
        Self::blit_slot(buffers, self.secondary.as_ref(), Plane::Lsb, SECONDARY_SLOT);
        display.copy_to_lsb(buffers.get_active_buffer());

        display.display_differential_grayscale();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        activities::{Activity, ApplicationState},
        assets,
        input::ButtonState,
        selection::{COMPRESSED_LABEL, ORIGINAL_LABEL},
    };

    struct NoAssets;

    impl AssetSource for NoAssets {
        fn load(&self, _key: &str) -> assets::Result<Bitmap> {
            Err(assets::Error::NotFound)
        }
    }

    fn viewer() -> ViewerActivity<NoAssets> {
        let catalog = Catalog::new(&["Select Image", "Girl", "Bus", "Paris"]).unwrap();
        ViewerActivity::new(catalog, NoAssets)
    }

    fn press(viewer: &mut ViewerActivity<NoAssets>, button: Buttons) {
        let mut input = ButtonState::default();
        input.update(button.mask());
        viewer.update(&ApplicationState { input });
    }

    #[test]
    fn confirm_applies_the_focused_entry() {
        let mut viewer = viewer();
        press(&mut viewer, Buttons::Down);
        press(&mut viewer, Buttons::Confirm);

        assert_eq!(viewer.focus(), 1);
        assert_eq!(viewer.pair().primary.as_deref(), Some("girl.png"));
        assert_eq!(viewer.pair().secondary.as_deref(), Some("paris.png"));
        assert_eq!(viewer.pair().primary_label, "");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut viewer = viewer();
        press(&mut viewer, Buttons::Up);
        assert_eq!(viewer.focus(), 3);
        press(&mut viewer, Buttons::Down);
        assert_eq!(viewer.focus(), 0);
    }

    #[test]
    fn back_restores_the_default_headings() {
        let mut viewer = viewer();
        press(&mut viewer, Buttons::Down);
        press(&mut viewer, Buttons::Confirm);
        press(&mut viewer, Buttons::Back);

        assert!(viewer.pair().is_empty());
        assert_eq!(viewer.pair().primary_label, ORIGINAL_LABEL);
        assert_eq!(viewer.pair().secondary_label, COMPRESSED_LABEL);
        assert_eq!(viewer.focus(), 0);
    }

    #[test]
    fn confirm_on_the_sentinel_clears_the_slots() {
        let mut viewer = viewer();
        press(&mut viewer, Buttons::Down);
        press(&mut viewer, Buttons::Confirm);
        press(&mut viewer, Buttons::Up);
        press(&mut viewer, Buttons::Confirm);

        assert!(viewer.pair().is_empty());
        assert_eq!(viewer.pair().primary_label, ORIGINAL_LABEL);
    }
}
