use log::info;

use crate::{
    activities::{Activity, ApplicationState, UpdateResult, viewer::ViewerActivity},
    assets::AssetSource,
    catalog::Catalog,
    display::Display,
    framebuffer::DisplayBuffers,
    input::{ButtonState, Buttons},
};

/// Owns the frame loop state: one viewer activity, a dirty flag so idle
/// frames cost nothing, and the sleep flag the frontend polls to exit.
pub struct Application<'a, Assets: AssetSource> {
    dirty: bool,
    sleep: bool,
    display_buffers: &'a mut DisplayBuffers,
    viewer: ViewerActivity<Assets>,
}

impl<'a, Assets: AssetSource> Application<'a, Assets> {
    pub fn new(display_buffers: &'a mut DisplayBuffers, catalog: Catalog, assets: Assets) -> Self {
        let mut viewer = ViewerActivity::new(catalog, assets);
        viewer.start();
        Application {
            dirty: true,
            sleep: false,
            display_buffers,
            viewer,
        }
    }

    pub fn running(&self) -> bool {
        !self.sleep
    }

    pub fn update(&mut self, buttons: &ButtonState) {
        if buttons.is_held(Buttons::Power) {
            info!("powering down");
            self.sleep = true;
            return;
        }
        let state = ApplicationState { input: *buttons };
        match self.viewer.update(&state) {
            UpdateResult::Redraw => self.dirty = true,
            UpdateResult::None => {}
        }
    }

    pub fn draw(&mut self, display: &mut impl Display) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        self.viewer.draw(display, self.display_buffers);
    }
}
