use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
};

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 480;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

/// Double-buffered 1bpp framebuffer. The inactive buffer keeps the
/// previously displayed frame so partial refreshes can diff against it.
pub struct DisplayBuffers {
    framebuffer: [[u8; BUFFER_SIZE]; 2],
    active: bool,
}

impl Default for DisplayBuffers {
    fn default() -> Self {
        // Clear screen to white
        let mut ret = Self {
            framebuffer: [[0; BUFFER_SIZE]; 2],
            active: false,
        };
        ret.framebuffer[0].fill(0xFF);
        ret.framebuffer[1].fill(0xFF);
        ret
    }
}

impl DisplayBuffers {
    pub fn get_active_buffer_mut(&mut self) -> &mut [u8; BUFFER_SIZE] {
        if self.active {
            &mut self.framebuffer[1]
        } else {
            &mut self.framebuffer[0]
        }
    }

    pub fn get_active_buffer(&self) -> &[u8; BUFFER_SIZE] {
        if self.active {
            &self.framebuffer[1]
        } else {
            &self.framebuffer[0]
        }
    }

    pub fn get_inactive_buffer(&self) -> &[u8; BUFFER_SIZE] {
        if self.active {
            &self.framebuffer[0]
        } else {
            &self.framebuffer[1]
        }
    }

    pub fn clear_screen(&mut self, color: u8) {
        self.get_active_buffer_mut().fill(color);
    }

    pub fn swap_buffers(&mut self) {
        self.active = !self.active;
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return;
        }
        let index = y as usize * WIDTH + x as usize;
        let byte_index = index / 8;
        let bit_index = 7 - (index % 8);
        match color {
            BinaryColor::On => {
                self.get_active_buffer_mut()[byte_index] |= 1 << bit_index;
            }
            BinaryColor::Off => {
                self.get_active_buffer_mut()[byte_index] &= !(1 << bit_index);
            }
        }
    }

    /// Copy a packed plane into the active buffer with its top-left
    /// corner at `origin`. Pixels falling off the screen are dropped.
    pub fn blit_at(&mut self, src: &[u8], w: u16, h: u16, origin: Point) {
        for y in 0..h as usize {
            for x in 0..w as usize {
                let index = y * w as usize + x;
                let color = if (src[index / 8] >> (7 - index % 8)) & 1 == 1 {
                    BinaryColor::On
                } else {
                    BinaryColor::Off
                };
                self.set_pixel(x as i32 + origin.x, y as i32 + origin.y, color);
            }
        }
    }
}

impl OriginDimensions for DisplayBuffers {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for DisplayBuffers {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;

    fn pixel(buffers: &DisplayBuffers, x: usize, y: usize) -> bool {
        let index = y * WIDTH + x;
        (buffers.get_active_buffer()[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    #[test]
    fn blit_places_the_plane_at_the_origin() {
        let mut buffers = DisplayBuffers::default();
        buffers.clear_screen(0x00);
        // 8x2 all-white plane
        buffers.blit_at(&[0xFF, 0xFF], 8, 2, Point::new(16, 4));

        assert!(pixel(&buffers, 16, 4));
        assert!(pixel(&buffers, 23, 5));
        assert!(!pixel(&buffers, 15, 4));
        assert!(!pixel(&buffers, 24, 4));
        assert!(!pixel(&buffers, 16, 6));
    }

    #[test]
    fn blit_clips_at_the_screen_edges() {
        let mut buffers = DisplayBuffers::default();
        buffers.clear_screen(0x00);
        let plane = vec![0xFF; 16 * 8 / 8];
        buffers.blit_at(&plane, 16, 8, Point::new(WIDTH as i32 - 8, -4));

        assert!(pixel(&buffers, WIDTH - 1, 0));
        assert!(!pixel(&buffers, 0, 0));
        assert!(!pixel(&buffers, WIDTH - 9, 0));
    }
}
