//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use filings::config::WindowConfig;

/// State shown in the window title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleInfo {
    pub strength: f64,
    pub filing_count: usize,
    pub max_filing_count: usize,
    pub count_limit_reached: bool,
}

impl TitleInfo {
    /// Format the full title after `base`
    pub fn format(&self, base: &str) -> String {
        let mut title = format!(
            "{} - strength {:.0}, {} filings",
            base, self.strength, self.filing_count
        );
        if self.count_limit_reached {
            title.push_str(&format!(" [max {} filings]", self.max_filing_count));
        }
        title
    }
}

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    last_title: Option<TitleInfo>,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            last_title: None,
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title, skipping the call when nothing changed
    pub fn update_title(&mut self, info: TitleInfo) {
        if self.last_title == Some(info) {
            return;
        }
        self.window.set_title(&info.format(&self.base_title));
        self.last_title = Some(info);
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
