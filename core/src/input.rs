#[derive(Debug, Clone, Copy)]
pub enum Buttons {
    Back,
    Confirm,
    Left,
    Right,
    Up,
    Down,
    Power,
}

impl Buttons {
    pub fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Raw button lines sampled once per frame, with edge detection against
/// the previous sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    current: u8,
    previous: u8,
}

impl ButtonState {
    pub fn update(&mut self, current: u8) {
        self.previous = self.current;
        self.current = current;
    }

    fn held(&self) -> u8 {
        self.current & self.previous
    }

    fn pressed(&self) -> u8 {
        self.current & !self.previous
    }

    fn released(&self) -> u8 {
        !self.current & self.previous
    }

    pub fn is_held(&self, button: Buttons) -> bool {
        (self.held() & button.mask()) != 0
    }

    pub fn is_pressed(&self, button: Buttons) -> bool {
        (self.pressed() & button.mask()) != 0
    }

    pub fn is_released(&self, button: Buttons) -> bool {
        (self.released() & button.mask()) != 0
    }

    pub fn any_pressed(&self, buttons: &[Buttons]) -> bool {
        let mask = buttons
            .iter()
            .fold(0, |acc, &button| acc | button.mask());
        (self.pressed() & mask) != 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pressed_fires_on_the_rising_edge_only() {
        let mut state = ButtonState::default();
        state.update(Buttons::Confirm.mask());
        assert!(state.is_pressed(Buttons::Confirm));
        assert!(!state.is_held(Buttons::Confirm));

        state.update(Buttons::Confirm.mask());
        assert!(!state.is_pressed(Buttons::Confirm));
        assert!(state.is_held(Buttons::Confirm));

        state.update(0);
        assert!(state.is_released(Buttons::Confirm));
    }

    #[test]
    fn any_pressed_covers_either_button() {
        let mut state = ButtonState::default();
        state.update(Buttons::Down.mask());
        assert!(state.any_pressed(&[Buttons::Down, Buttons::Left]));
        assert!(!state.any_pressed(&[Buttons::Up, Buttons::Right]));
    }
}
