use crate::{display::Display, framebuffer::DisplayBuffers, input::ButtonState};

pub mod viewer;

pub enum UpdateResult {
    None,
    Redraw,
}

pub struct ApplicationState {
    pub input: ButtonState,
}

pub trait Activity {
    fn start(&mut self);
    fn update(&mut self, state: &ApplicationState) -> UpdateResult;
    fn draw(&mut self, display: &mut dyn Display, buffers: &mut DisplayBuffers);
}
