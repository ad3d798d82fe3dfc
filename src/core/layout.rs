//! # Responsive Layout
//!
//! Maps the device class to the layout overrides of the header, the title
//! input and the button column.
//!
//! ```text
//!             mobile                       desktop
//! header      wraps, padding 8             no overrides
//! input       font 22, margin 8, h 50      font 19
//! buttons     font 22, margin 8, h 50,     font 18, h 60,
//!             nowrap, scrolls sideways     wraps, right padding 20
//! ```
//!
//! Device detection lives here too: a terminal width is compared against the
//! `md` breakpoint. Anything narrower counts as mobile.

/// Width breakpoints, in terminal columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub md: u16,
    pub lg: u16,
}

pub const DEFAULT_MD_BREAKPOINT: u16 = 80;
pub const DEFAULT_LG_BREAKPOINT: u16 = 120;

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            md: DEFAULT_MD_BREAKPOINT,
            lg: DEFAULT_LG_BREAKPOINT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn detect(width: u16, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.md {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }
}

/// Grid size class, used for column spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenClass {
    Xs,
    Md,
    Lg,
}

impl ScreenClass {
    pub fn from_width(width: u16, breakpoints: &Breakpoints) -> Self {
        if width >= breakpoints.lg {
            ScreenClass::Lg
        } else if width >= breakpoints.md {
            ScreenClass::Md
        } else {
            ScreenClass::Xs
        }
    }
}

pub const GRID_COLUMNS: u16 = 24;

/// Column spans (out of [`GRID_COLUMNS`]) for the title and button columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpans {
    pub title: u16,
    pub buttons: u16,
}

impl ColumnSpans {
    pub fn for_screen(screen: ScreenClass) -> Self {
        match screen {
            ScreenClass::Xs => ColumnSpans { title: 23, buttons: 23 },
            ScreenClass::Md => ColumnSpans { title: 16, buttons: 8 },
            ScreenClass::Lg => ColumnSpans { title: 14, buttons: 10 },
        }
    }

    /// Both columns fit on one row only when their spans sum to the grid.
    pub fn single_row(&self) -> bool {
        self.title + self.buttons <= GRID_COLUMNS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    pub wrap: bool,
    pub padding_y: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLayout {
    pub font_size: u16,
    pub margin_x: u16,
    pub height: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColumnLayout {
    pub font_size: u16,
    pub margin_x: u16,
    pub height: u16,
    pub nowrap: bool,
    pub padding_right: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonGroupLayout {
    pub wrap: bool,
    pub scroll_x: bool,
    pub gap: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub header: HeaderLayout,
    pub input: InputLayout,
    pub button_column: ButtonColumnLayout,
    pub button_group: ButtonGroupLayout,
    /// Icon-only Edit / Save buttons and the short publish label.
    pub compact_labels: bool,
}

pub fn policy(device: DeviceClass) -> LayoutPolicy {
    match device {
        DeviceClass::Mobile => LayoutPolicy {
            header: HeaderLayout { wrap: true, padding_y: 8 },
            input: InputLayout {
                font_size: 22,
                margin_x: 8,
                height: Some(50),
            },
            button_column: ButtonColumnLayout {
                font_size: 22,
                margin_x: 8,
                height: 50,
                nowrap: true,
                padding_right: None,
            },
            button_group: ButtonGroupLayout {
                wrap: false,
                scroll_x: true,
                gap: 10,
            },
            compact_labels: true,
        },
        DeviceClass::Desktop => LayoutPolicy {
            header: HeaderLayout { wrap: false, padding_y: 0 },
            input: InputLayout {
                font_size: 19,
                margin_x: 0,
                height: None,
            },
            button_column: ButtonColumnLayout {
                font_size: 18,
                margin_x: 0,
                height: 60,
                nowrap: false,
                padding_right: Some(20),
            },
            button_group: ButtonGroupLayout {
                wrap: true,
                scroll_x: false,
                gap: 10,
            },
            compact_labels: false,
        },
    }
}
