//! Viewport-width driven presentation state

/// Widths strictly below this are considered narrow
pub const DEFAULT_NARROW_BREAKPOINT: u32 = 768;

/// Coarse viewport classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewportClass {
    Narrow,
    #[default]
    Wide,
}

impl ViewportClass {
    /// Classify a viewport width. A missing width (no window) is wide.
    pub fn classify(width: Option<u32>, breakpoint: u32) -> Self {
        match width {
            Some(width) if width < breakpoint => ViewportClass::Narrow,
            _ => ViewportClass::Wide,
        }
    }

    pub fn is_narrow(self) -> bool {
        self == ViewportClass::Narrow
    }
}

/// Size variant for interactive controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSize {
    Small,
    Default,
    Large,
}

impl ControlSize {
    /// Language toggle in the top corner
    pub fn toggle_button(class: ViewportClass) -> Self {
        if class.is_narrow() {
            ControlSize::Small
        } else {
            ControlSize::Default
        }
    }

    /// Server address field and the call-to-action buttons
    pub fn primary_control(class: ViewportClass) -> Self {
        if class.is_narrow() {
            ControlSize::Default
        } else {
            ControlSize::Large
        }
    }
}

/// Tracks the current [`ViewportClass`] across resize notifications
#[derive(Debug, Clone, Copy)]
pub struct ResponsiveState {
    class: ViewportClass,
    breakpoint: u32,
}

impl Default for ResponsiveState {
    fn default() -> Self {
        Self::new(None, DEFAULT_NARROW_BREAKPOINT)
    }
}

impl ResponsiveState {
    pub fn new(width: Option<u32>, breakpoint: u32) -> Self {
        Self {
            class: ViewportClass::classify(width, breakpoint),
            breakpoint,
        }
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn is_narrow(&self) -> bool {
        self.class.is_narrow()
    }

    /// Recompute from a fresh width reading. Returns true if the class changed.
    pub fn update(&mut self, width: Option<u32>) -> bool {
        let next = ViewportClass::classify(width, self.breakpoint);
        if next == self.class {
            return false;
        }
        self.class = next;
        true
    }
}
