use log::{debug, info};
use supercompress_core::{
    display::RefreshMode,
    framebuffer::{BUFFER_SIZE, DisplayBuffers, HEIGHT, WIDTH},
    input::{ButtonState, Buttons},
};

const DISPLAY_BUFFER_SIZE: usize = WIDTH * HEIGHT;

/// Simulates the panel in a minifb window: 1bpp frames land as
/// black/white pixels, the gray planes are mixed in as shades.
pub struct MinifbDisplay {
    is_grayscale: bool,
    // Simulated EInk buffers
    lsb_buffer: Box<[u8; BUFFER_SIZE]>,
    msb_buffer: Box<[u8; BUFFER_SIZE]>,
    // Actual display buffer
    display_buffer: Box<[u32; DISPLAY_BUFFER_SIZE]>,
    window: minifb::Window,
    buttons: ButtonState,
    scale: minifb::Scale,
}

#[derive(PartialEq, Eq, Debug)]
enum BlitMode {
    // Blit the active framebuffer as full black/white
    Full,
    Partial,
    // Mix the gray planes over the black/white frame
    Grayscale,
    // Revert Grayscale to black/white
    GrayscaleRevert,
}

impl MinifbDisplay {
    pub fn new(scale: minifb::Scale) -> Self {
        let mut ret = Self {
            is_grayscale: false,
            lsb_buffer: Box::new([0; BUFFER_SIZE]),
            msb_buffer: Box::new([0; BUFFER_SIZE]),
            display_buffer: Box::new([0; DISPLAY_BUFFER_SIZE]),
            window: Self::create_window(scale),
            buttons: ButtonState::default(),
            scale,
        };

        ret.display_buffer.fill(0xFFFFFFFF);

        ret
    }

    fn create_window(scale: minifb::Scale) -> minifb::Window {
        let options = minifb::WindowOptions {
            borderless: false,
            title: true,
            resize: true,
            scale,
            ..minifb::WindowOptions::default()
        };
        let mut window =
            minifb::Window::new("SuperCompress", WIDTH, HEIGHT, options).unwrap_or_else(|e| {
                panic!("Unable to open window: {}", e);
            });

        window.set_target_fps(15);
        window
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    fn update_display(&mut self) {
        self.window
            .update_with_buffer(&*self.display_buffer, WIDTH, HEIGHT)
            .unwrap();
    }

    pub fn update(&mut self) {
        self.window.update();
        let mut current: u8 = 0;
        if self.window.is_key_down(minifb::Key::Left) {
            current |= Buttons::Left.mask();
        }
        if self.window.is_key_down(minifb::Key::Right) {
            current |= Buttons::Right.mask();
        }
        if self.window.is_key_down(minifb::Key::Up) {
            current |= Buttons::Up.mask();
        }
        if self.window.is_key_down(minifb::Key::Down) {
            current |= Buttons::Down.mask();
        }
        if self.window.is_key_down(minifb::Key::Enter) {
            current |= Buttons::Confirm.mask();
        }
        if self.window.is_key_down(minifb::Key::Backspace) {
            current |= Buttons::Back.mask();
        }
        if self.window.is_key_down(minifb::Key::End) {
            current |= Buttons::Power.mask();
        }
        if self.window.is_key_down(minifb::Key::S) {
            info!("Toggling scale");
            self.scale = match self.scale {
                minifb::Scale::X1 => minifb::Scale::X2,
                minifb::Scale::X2 => minifb::Scale::X4,
                minifb::Scale::X4 => minifb::Scale::X1,
                _ => minifb::Scale::X2,
            };
            self.window = Self::create_window(self.scale);
            self.update_display();
        }
        self.buttons.update(current);
    }

    pub fn get_buttons(&self) -> ButtonState {
        self.buttons
    }

    fn blit_internal(&mut self, mode: BlitMode) {
        debug!("Blitting with mode: {:?}", mode);
        match mode {
            BlitMode::Full => {
                for i in 0..self.lsb_buffer.len() {
                    let byte = self.lsb_buffer[i];
                    for bit in 0..8 {
                        let pixel_index = i * 8 + bit;
                        self.display_buffer[pixel_index] = if (byte & (1 << (7 - bit))) != 0 {
                            0xFFFFFFFF
                        } else {
                            0xFF000000
                        };
                    }
                }
            }
            BlitMode::Partial => {
                for i in 0..self.lsb_buffer.len() {
                    let curr_byte = self.lsb_buffer[i];
                    let prev_byte = self.msb_buffer[i];
                    for bit in 0..8 {
                        let current_bit = (curr_byte >> (7 - bit)) & 0x01;
                        let previous_bit = (prev_byte >> (7 - bit)) & 0x01;
                        if current_bit == previous_bit {
                            continue;
                        }
                        let pixel_index = i * 8 + bit;
                        self.display_buffer[pixel_index] = if current_bit == 1 {
                            0xFFFFFFFF
                        } else {
                            0xFF000000
                        };
                    }
                }
            }
            BlitMode::Grayscale => {
                for i in 0..self.lsb_buffer.len() {
                    let lsb_byte = self.lsb_buffer[i];
                    let msb_byte = self.msb_buffer[i];
                    for bit in 0..8 {
                        let pixel_index = i * 8 + bit;
                        if (msb_byte >> (7 - bit)) & 0x01 == 1 {
                            // Black -> Dark Gray
                            self.display_buffer[pixel_index] = 0xFF555555;
                        } else if (lsb_byte >> (7 - bit)) & 0x01 == 1 {
                            // White -> Light Gray
                            self.display_buffer[pixel_index] = 0xFFAAAAAA;
                        }
                    }
                }
            }
            BlitMode::GrayscaleRevert => {
                for i in 0..self.lsb_buffer.len() {
                    let lsb_byte = self.lsb_buffer[i];
                    let msb_byte = self.msb_buffer[i];
                    for bit in 0..8 {
                        let pixel_index = i * 8 + bit;
                        if (msb_byte >> (7 - bit)) & 0x01 == 1 {
                            // Dark Gray -> Black
                            self.display_buffer[pixel_index] = 0xFF000000;
                        } else if (lsb_byte >> (7 - bit)) & 0x01 == 1 {
                            // Light Gray -> White
                            self.display_buffer[pixel_index] = 0xFFFFFFFF;
                        }
                    }
                }
            }
        }
        self.update_display();
    }
}

impl supercompress_core::display::Display for MinifbDisplay {
    fn display(&mut self, buffers: &mut DisplayBuffers, mode: RefreshMode) {
        // revert grayscale first
        if self.is_grayscale {
            self.blit_internal(BlitMode::GrayscaleRevert);
            self.is_grayscale = false;
        }

        let current = buffers.get_active_buffer();
        let previous = buffers.get_inactive_buffer();
        self.lsb_buffer.copy_from_slice(&current[..]);
        self.msb_buffer.copy_from_slice(&previous[..]);
        if mode == RefreshMode::Fast {
            self.blit_internal(BlitMode::Partial);
        } else {
            self.blit_internal(BlitMode::Full);
        }
        buffers.swap_buffers();
    }

    fn copy_to_lsb(&mut self, buffer: &[u8; BUFFER_SIZE]) {
        self.lsb_buffer.copy_from_slice(buffer);
    }

    fn copy_to_msb(&mut self, buffer: &[u8; BUFFER_SIZE]) {
        self.msb_buffer.copy_from_slice(buffer);
    }

    fn display_differential_grayscale(&mut self) {
        self.is_grayscale = true;
        self.blit_internal(BlitMode::Grayscale);
    }
}
