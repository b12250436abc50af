/// Input driven state of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    current: usize,
    count: usize,
    wireframe: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    ToggleWireframe,
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    SceneChanged,
    WireframeChanged,
    Exit,
}

impl GalleryState {
    pub fn new(count: usize, current: usize) -> Self {
        Self {
            current: if count == 0 { 0 } else { current % count },
            count,
            wireframe: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn apply(&mut self, command: Command) -> Option<Outcome> {
        match command {
            Command::Next | Command::Previous if self.count <= 1 => None,
            Command::Next => {
                self.current = (self.current + 1) % self.count;
                Some(Outcome::SceneChanged)
            }
            Command::Previous => {
                self.current = self.current.checked_sub(1).unwrap_or(self.count - 1);
                Some(Outcome::SceneChanged)
            }
            Command::ToggleWireframe => {
                self.wireframe = !self.wireframe;
                Some(Outcome::WireframeChanged)
            }
            Command::Quit => Some(Outcome::Exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_and_wraps() {
        let mut state = GalleryState::new(3, 0);

        assert_eq!(state.apply(Command::Previous), Some(Outcome::SceneChanged));
        assert_eq!(state.current(), 2);

        state.apply(Command::Next);
        assert_eq!(state.current(), 0);

        state.apply(Command::Next);
        state.apply(Command::Next);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn single_scene_does_not_move() {
        let mut state = GalleryState::new(1, 0);

        assert_eq!(state.apply(Command::Next), None);
        assert_eq!(state.apply(Command::Previous), None);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn start_index_is_clamped() {
        assert_eq!(GalleryState::new(4, 6).current(), 2);
        assert_eq!(GalleryState::new(0, 6).current(), 0);
    }

    #[test]
    fn wireframe_toggles() {
        let mut state = GalleryState::new(2, 0);

        assert!(!state.wireframe());
        assert_eq!(state.apply(Command::ToggleWireframe), Some(Outcome::WireframeChanged));
        assert!(state.wireframe());
        state.apply(Command::ToggleWireframe);
        assert!(!state.wireframe());
    }

    #[test]
    fn quit() {
        let mut state = GalleryState::new(2, 1);

        assert_eq!(state.apply(Command::Quit), Some(Outcome::Exit));
        assert_eq!(state.current(), 1);
    }
}
