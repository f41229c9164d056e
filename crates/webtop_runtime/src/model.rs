use serde::{Deserialize, Serialize};

use crate::config::DesktopConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    Calculator,
    Settings,
    Terminal,
    Notes,
    FileBrowser,
}

impl AppKind {
    /// Every kind in launcher order.
    pub const ALL: [AppKind; 5] = [
        Self::FileBrowser,
        Self::Calculator,
        Self::Notes,
        Self::Terminal,
        Self::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Settings => "Settings",
            Self::Terminal => "Terminal",
            Self::Notes => "Notes",
            Self::FileBrowser => "File Manager",
        }
    }

    pub fn default_size(self) -> WindowSize {
        let (width, height) = match self {
            Self::Calculator => (320, 400),
            Self::Settings => (500, 500),
            Self::Terminal => (600, 400),
            Self::Notes => (400, 500),
            Self::FileBrowser => (700, 500),
        };
        WindowSize { width, height }
    }

    pub fn icon_id(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Settings => "settings",
            Self::Terminal => "terminal",
            Self::Notes => "file-text",
            Self::FileBrowser => "computer",
        }
    }

    /// Stable identifier used for DOM ids and CSS hooks.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Settings => "settings",
            Self::Terminal => "terminal",
            Self::Notes => "notes",
            Self::FileBrowser => "file-browser",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub fn clamped_min(self, min: WindowSize) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// Position and size of a window taken together; the unit resize math works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub position: WindowPosition,
    pub size: WindowSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub kind: AppKind,
    pub title: String,
    pub minimized: bool,
    pub active: bool,
    pub position: WindowPosition,
    pub size: WindowSize,
}

impl WindowRecord {
    pub fn rect(&self) -> WindowRect {
        WindowRect {
            position: self.position,
            size: self.size,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}

/// Ordered set of open windows. Iteration order is append order and doubles as z-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    pub(crate) next_window_id: u64,
    pub(crate) windows: Vec<WindowRecord>,
    pub(crate) config: DesktopConfig,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl WindowRegistry {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.active).map(|w| w.id)
    }

    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.is_visible())
    }
}

/// Everything the desktop surfaces read: the registry plus process-wide UI flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub registry: WindowRegistry,
    pub launcher_open: bool,
}

impl DesktopState {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            registry: WindowRegistry::new(config),
            launcher_open: false,
        }
    }

    pub fn windows(&self) -> &[WindowRecord] {
        self.registry.windows()
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.registry.active_window_id()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn moves_left_edge(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn moves_top_edge(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }
}
