//! Application state and the per-frame update.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::platform::FrameInput;
use crate::rendering::image::draw_image;
use crate::rendering::{Canvas, Font, Rect};
use crate::views::{draw_view, DrawContext, View};
use crate::RenderConfig;

/// What a tree builder gets to work with.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub width: u32,
    pub height: u32,
    pub font: &'a Arc<Font>,
    pub config: &'a RenderConfig,
}

/// Summary of one [`App::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// The view tree was rebuilt this frame.
    pub rebuilt: bool,
    pub views_drawn: usize,
    /// Zero-based index of this frame.
    pub frame_index: u64,
}

type Builder = Box<dyn FnMut(&BuildContext<'_>) -> View>;

/// Owns the view tree and rebuilds it whenever the framebuffer size changes.
pub struct App {
    config: RenderConfig,
    font: Arc<Font>,
    background: Option<Canvas>,
    tree: Option<View>,
    built_for: Option<(u32, u32)>,
    build: Builder,
    frames: u64,
}

impl App {
    pub fn new(config: RenderConfig, font: Arc<Font>, build: impl FnMut(&BuildContext<'_>) -> View + 'static) -> Self {
        Self {
            config,
            font,
            background: None,
            tree: None,
            built_for: None,
            build: Box::new(build),
            frames: 0,
        }
    }

    /// Image drawn, stretched to the whole frame, beneath the view tree.
    pub fn with_background(mut self, background: Canvas) -> Self {
        self.background = Some(background);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn font(&self) -> &Arc<Font> {
        &self.font
    }

    pub fn tree(&self) -> Option<&View> {
        self.tree.as_ref()
    }

    pub fn tree_mut(&mut self) -> Option<&mut View> {
        self.tree.as_mut()
    }

    /// Drops the current tree; the next update builds a new one.
    pub fn invalidate(&mut self) {
        self.tree = None;
        self.built_for = None;
    }

    /// Renders one frame into `framebuffer`, resizing it to the input size if needed.
    pub fn update(&mut self, input: &FrameInput, framebuffer: &mut Canvas) -> FrameStats {
        let size = (input.width, input.height);
        let rebuilt = self.tree.is_none() || self.built_for != Some(size);
        if rebuilt {
            self.tree = None;
            let ctx = BuildContext {
                width: input.width,
                height: input.height,
                font: &self.font,
                config: &self.config,
            };
            let tree = (self.build)(&ctx);
            debug!("built view tree for {}x{}: {} views", size.0, size.1, tree.subtree_len());
            self.tree = Some(tree);
            self.built_for = Some(size);
        }

        if (framebuffer.width(), framebuffer.height()) != size {
            *framebuffer = Canvas::new(input.width, input.height);
        }
        framebuffer.clear(self.config.clear_color);

        if let Some(background) = &self.background {
            let full = Rect::new(0.0, 0.0, input.width as f32, input.height as f32);
            draw_image(framebuffer, background, full, None);
        }

        let views_drawn = match self.tree.as_mut() {
            Some(tree) => draw_view(tree, framebuffer, &DrawContext::new(input, &self.config)),
            None => 0,
        };

        let stats = FrameStats {
            rebuilt,
            views_drawn,
            frame_index: self.frames,
        };
        self.frames += 1;
        debug!(
            "frame {}: {} views{}",
            stats.frame_index,
            stats.views_drawn,
            if rebuilt { " (rebuilt)" } else { "" }
        );
        stats
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("built_for", &self.built_for)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Color;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_app(builds: Rc<Cell<u32>>) -> App {
        App::new(RenderConfig::default(), Arc::new(Font::builtin()), move |ctx| {
            builds.set(builds.get() + 1);
            View::rect(Rect::new(0.0, 0.0, ctx.width as f32 / 2.0, ctx.height as f32), Color::RED)
        })
    }

    #[test]
    fn tree_is_rebuilt_only_on_resize() {
        let builds = Rc::new(Cell::new(0));
        let mut app = counting_app(builds.clone());
        let mut frame = Canvas::new(0, 0);

        assert!(app.update(&FrameInput::new(20, 10), &mut frame).rebuilt);
        let second = app.update(&FrameInput::new(20, 10), &mut frame);
        assert!(!second.rebuilt);
        assert_eq!(second.frame_index, 1);
        assert_eq!(builds.get(), 1);

        assert!(app.update(&FrameInput::new(40, 10), &mut frame).rebuilt);
        assert_eq!(builds.get(), 2);
        assert_eq!(frame.width(), 40);
        assert_eq!(frame.get_pixel(19, 5), Color::RED);
        assert_eq!(frame.get_pixel(20, 5), RenderConfig::default().clear_color);
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let builds = Rc::new(Cell::new(0));
        let mut app = counting_app(builds.clone());
        let mut frame = Canvas::new(8, 8);
        app.update(&FrameInput::new(8, 8), &mut frame);
        app.invalidate();
        assert!(app.tree().is_none());
        assert!(app.update(&FrameInput::new(8, 8), &mut frame).rebuilt);
        assert_eq!(builds.get(), 2);
    }

    #[test]
    fn background_is_stretched_under_tree() {
        let bg = Canvas::checkerboard(2, 2, 1, Color::WHITE, Color::BLACK);
        let mut app = App::new(RenderConfig::default(), Arc::new(Font::builtin()), |_| {
            View::container(Rect::default())
        })
        .with_background(bg);
        let mut frame = Canvas::new(0, 0);
        let stats = app.update(&FrameInput::new(4, 4), &mut frame);
        assert_eq!(stats.views_drawn, 1);
        assert_eq!(frame.get_pixel(0, 0), Color::WHITE);
        assert_eq!(frame.get_pixel(1, 1), Color::WHITE);
        assert_eq!(frame.get_pixel(2, 0), Color::BLACK);
    }
}
