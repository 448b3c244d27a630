//! Terminal rendering of the weather card.
//!
//! Everything here measures text by terminal columns rather than bytes or
//! chars, so styled, accented, CJK and emoji content line up inside the
//! fixed-width frame. Rendering is pure: no I/O and no global state.

pub mod art;
pub mod card;
pub mod conditions;
pub mod layout;
pub mod measure;
pub mod scan;
pub mod style;
pub mod width;

use crate::i18n::{self, Lang};
use crate::units::Units;

pub use card::{CARD_WIDTH, render_card};
pub use measure::{truncate_to_width, visual_width};

/// Days shown when nothing else is configured.
pub const DEFAULT_DAYS: usize = 5;

/// Everything besides the data that shapes a card.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub units: Units,
    /// Forecast rows to show, capped by what the forecast holds.
    pub days: usize,
    pub color_enabled: bool,
    pub lang: &'static Lang,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            units: Units::Metric,
            days: DEFAULT_DAYS,
            color_enabled: true,
            lang: i18n::ENGLISH,
        }
    }
}
