/// Headless presentation target for tests, benchmarks and the CLI

use super::Presenter;
use crate::rendering::Canvas;
use crate::Result;

/// Keeps a copy of the most recently presented frame.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    last: Option<Canvas>,
    presented: u64,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&Canvas> {
        self.last.as_ref()
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, frame: &Canvas) -> Result<()> {
        match self.last.as_mut() {
            Some(last) if last.width() == frame.width() && last.height() == frame.height() => {
                last.pixels_mut().copy_from_slice(frame.pixels());
            }
            _ => self.last = Some(frame.duplicate()),
        }
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Color;

    #[test]
    fn headless_presenter_keeps_latest_frame() {
        let mut p = HeadlessPresenter::new();
        assert!(p.last_frame().is_none());

        let mut frame = Canvas::new(2, 2);
        p.present(&frame).unwrap();
        frame.clear(Color::RED);
        p.present(&frame).unwrap();
        assert_eq!(p.presented(), 2);
        assert_eq!(p.last_frame().unwrap().get_pixel(1, 1), Color::RED);

        p.present(&Canvas::new(3, 1)).unwrap();
        assert_eq!(p.last_frame().unwrap().width(), 3);
    }
}
