// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration and its builder.

use core::fmt;

use understory_event_state::drag::{DragAxis, DragSlop};

use crate::attributes::Align;

/// Panel width used when the host has not measured one.
pub const DEFAULT_WIDTH: f64 = 200.0;

/// Horizontal travel that turns a press into a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// Vertical travel that abandons a press before it becomes a drag.
pub const DEFAULT_VERTICAL_VETO: f64 = 6.0;

/// Number of recent samples used to decide the release direction.
pub const DEFAULT_HISTORY_LEN: usize = 5;

/// Window after a gesture release during which clicks are ignored, in milliseconds.
pub const DEFAULT_CLICK_SUPPRESSION_MS: u64 = 50;

/// Validated drawer configuration.
///
/// Build one with [`DrawerConfigBuilder`], or use [`DrawerConfig::default`].
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerConfig {
    width: f64,
    drag_threshold: f64,
    vertical_veto: f64,
    history_len: usize,
    click_suppression_ms: u64,
    autoclose: bool,
    align: Align,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            vertical_veto: DEFAULT_VERTICAL_VETO,
            history_len: DEFAULT_HISTORY_LEN,
            click_suppression_ms: DEFAULT_CLICK_SUPPRESSION_MS,
            autoclose: false,
            align: Align::Left,
        }
    }
}

impl DrawerConfig {
    /// Starts a builder from the defaults.
    #[must_use]
    pub fn builder() -> DrawerConfigBuilder {
        DrawerConfigBuilder::new()
    }

    /// Fallback panel width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Horizontal drag threshold.
    #[must_use]
    pub fn drag_threshold(&self) -> f64 {
        self.drag_threshold
    }

    /// Vertical veto distance.
    #[must_use]
    pub fn vertical_veto(&self) -> f64 {
        self.vertical_veto
    }

    /// Release-direction window size; also the minimum number of drag samples
    /// needed before a release changes the open state.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// Click suppression window after a gesture release.
    #[must_use]
    pub fn click_suppression_ms(&self) -> u64 {
        self.click_suppression_ms
    }

    /// Initial autoclose policy.
    #[must_use]
    pub fn autoclose(&self) -> bool {
        self.autoclose
    }

    /// Initial alignment.
    #[must_use]
    pub fn align(&self) -> Align {
        self.align
    }

    /// Slop used to classify pending presses.
    #[must_use]
    pub fn slop(&self) -> DragSlop {
        DragSlop::new(DragAxis::Horizontal, self.drag_threshold, self.vertical_veto)
    }
}

/// Builder for [`DrawerConfig`].
///
/// ```
/// use overstory_drawer::{Align, DrawerConfig};
///
/// let config = DrawerConfig::builder()
///     .width(320.0)
///     .autoclose(true)
///     .align(Align::Right)
///     .build()
///     .unwrap();
/// assert_eq!(config.width(), 320.0);
///
/// assert!(DrawerConfig::builder().width(-1.0).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DrawerConfigBuilder {
    config: DrawerConfig,
}

impl DrawerConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback panel width.
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.config.width = width;
        self
    }

    /// Sets the horizontal drag threshold.
    #[must_use]
    pub fn drag_threshold(mut self, distance: f64) -> Self {
        self.config.drag_threshold = distance;
        self
    }

    /// Sets the vertical veto distance.
    #[must_use]
    pub fn vertical_veto(mut self, distance: f64) -> Self {
        self.config.vertical_veto = distance;
        self
    }

    /// Sets the release-direction window size.
    #[must_use]
    pub fn history_len(mut self, samples: usize) -> Self {
        self.config.history_len = samples;
        self
    }

    /// Sets the click suppression window.
    #[must_use]
    pub fn click_suppression_ms(mut self, ms: u64) -> Self {
        self.config.click_suppression_ms = ms;
        self
    }

    /// Sets the initial autoclose policy.
    #[must_use]
    pub fn autoclose(mut self, autoclose: bool) -> Self {
        self.config.autoclose = autoclose;
        self
    }

    /// Sets the initial alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.config.align = align;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<DrawerConfig, ConfigError> {
        let c = &self.config;
        if !is_valid_width(c.width) {
            return Err(ConfigError::InvalidWidth(c.width));
        }
        for (name, value) in [
            ("drag_threshold", c.drag_threshold),
            ("vertical_veto", c.vertical_veto),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDistance { name, value });
            }
        }
        if c.history_len == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        Ok(self.config)
    }
}

pub(crate) fn is_valid_width(width: f64) -> bool {
    width.is_finite() && width > 0.0
}

/// Error returned by [`DrawerConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The width is not a finite, positive number.
    InvalidWidth(f64),
    /// A gesture distance is negative or not finite.
    InvalidDistance {
        /// Name of the offending setting.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The release-direction window holds no samples.
    EmptyHistory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth(width) => {
                write!(f, "drawer width must be finite and positive, got {width}")
            }
            Self::InvalidDistance { name, value } => {
                write!(f, "{name} must be finite and non-negative, got {value}")
            }
            Self::EmptyHistory => f.write_str("history length must be at least 1"),
        }
    }
}

impl core::error::Error for ConfigError {}
