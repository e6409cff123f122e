use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::rendering::Frame;
use crate::utils::EnvError;

/// Somewhere a frame can be shown, typically a window.
pub trait Viewer {
    fn show(&mut self, frame: &Frame) -> Result<(), EnvError>;
}

/// Opens a viewer for a square canvas of the given side length.
pub type ViewerFactory = Box<dyn Fn(u32) -> Result<Box<dyn Viewer>, EnvError>>;

/// Default factory: a native window when the `window` feature is enabled.
pub fn default_viewer_factory() -> Option<ViewerFactory> {
    #[cfg(feature = "window")]
    {
        Some(Box::new(|size| {
            window::WindowViewer::open(size).map(|v| Box::new(v) as Box<dyn Viewer>)
        }))
    }
    #[cfg(not(feature = "window"))]
    {
        None
    }
}

/// Lazily opened viewer with frame pacing.
///
/// The viewer is created on the first [`Display::present`] and dropped by
/// [`Display::release`]. Releasing twice, or without ever presenting, is a
/// no-op.
pub struct Display {
    factory: ViewerFactory,
    window_size: u32,
    frame_interval: Duration,
    viewer: Option<Box<dyn Viewer>>,
    last_frame: Option<Instant>,
}

impl Display {
    pub fn new(factory: ViewerFactory, window_size: u32, fps: u32) -> Self {
        Self {
            factory,
            window_size,
            frame_interval: Duration::from_secs_f64(1.0 / fps as f64),
            viewer: None,
            last_frame: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.viewer.is_some()
    }

    pub fn present(&mut self, frame: &Frame) -> Result<(), EnvError> {
        if self.viewer.is_none() {
            info!("Opening viewer ({}x{})", self.window_size, self.window_size);
            self.viewer = Some((self.factory)(self.window_size)?);
        }
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.show(frame)?;
        }
        self.tick();
        Ok(())
    }

    // Blocks for whatever is left of the current frame interval
    fn tick(&mut self) {
        if let Some(last) = self.last_frame {
            let elapsed = last.elapsed();
            if elapsed < self.frame_interval {
                std::thread::sleep(self.frame_interval - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());
    }

    pub fn release(&mut self) {
        if self.viewer.take().is_some() {
            debug!("Viewer released");
        }
        self.last_frame = None;
    }
}

#[cfg(feature = "window")]
mod window {
    use minifb::{Window, WindowOptions};

    use super::Viewer;
    use crate::rendering::Frame;
    use crate::utils::EnvError;

    pub struct WindowViewer {
        window: Window,
        buffer: Vec<u32>,
        size: usize,
    }

    impl WindowViewer {
        pub fn open(size: u32) -> Result<Self, EnvError> {
            let size = size as usize;
            let window = Window::new("Target Hazard World", size, size, WindowOptions::default())
                .map_err(|e| EnvError::Display(e.to_string()))?;
            Ok(Self {
                window,
                buffer: vec![0; size * size],
                size,
            })
        }
    }

    impl Viewer for WindowViewer {
        fn show(&mut self, frame: &Frame) -> Result<(), EnvError> {
            for (dst, rgb) in self.buffer.iter_mut().zip(frame.data.chunks_exact(3)) {
                *dst = (rgb[0] as u32) << 16 | (rgb[1] as u32) << 8 | rgb[2] as u32;
            }
            self.window
                .update_with_buffer(&self.buffer, self.size, self.size)
                .map_err(|e| EnvError::Display(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingViewer(Rc<RefCell<usize>>);

    impl Viewer for CountingViewer {
        fn show(&mut self, _frame: &Frame) -> Result<(), EnvError> {
            *self.0.borrow_mut() += 1;
            Ok(())
        }
    }

    fn blank() -> Frame {
        Frame {
            width: 1,
            height: 1,
            data: vec![255, 255, 255],
        }
    }

    #[test]
    fn test_viewer_opened_lazily_once() {
        let opened = Rc::new(RefCell::new(0));
        let shown = Rc::new(RefCell::new(0));
        let (o, s) = (opened.clone(), shown.clone());
        let factory: ViewerFactory = Box::new(move |_| {
            *o.borrow_mut() += 1;
            Ok(Box::new(CountingViewer(s.clone())) as Box<dyn Viewer>)
        });

        let mut display = Display::new(factory, 1, 1000);
        assert!(!display.is_open());

        display.present(&blank()).unwrap();
        display.present(&blank()).unwrap();
        assert!(display.is_open());
        assert_eq!(*opened.borrow(), 1);
        assert_eq!(*shown.borrow(), 2);

        display.release();
        display.release();
        assert!(!display.is_open());
    }

    #[test]
    fn test_factory_error_propagates() {
        let factory: ViewerFactory = Box::new(|_| Err(EnvError::Display("no display".into())));
        let mut display = Display::new(factory, 1, 24);
        assert!(matches!(display.present(&blank()), Err(EnvError::Display(_))));
        assert!(!display.is_open());
    }
}
