//! Help text reflow.
//!
//! Toolkit labels do not re-wrap by themselves when their container is
//! resized, so components re-wrap them manually. Each component sits in one
//! of two equally wide columns and uses 87% of it; a flag shares its row with
//! the toggle and gets 70% of a third instead.
//!
//! Recomputing on every resize tick makes the label flicker, so the text is
//! only re-wrapped once its rendered width leaves a band of +-5% around the
//! target width.

use log::debug;

use crate::toolkit::{HelpAnnotation, Size};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReflowPolicy {
    /// Help text stacked above the control.
    Stacked,
    /// Help text inlined to the right of the control.
    Inline,
}

/// A re-wrap to perform: set `text`, then wrap it at `width`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Rewrap {
    pub text: String,
    pub width: u32,
}

impl ReflowPolicy {
    #[must_use]
    pub fn content_area(self, container_width: u32) -> u32 {
        let width = f64::from(container_width);
        let area = match self {
            ReflowPolicy::Stacked => width / 2.0 * 0.87,
            ReflowPolicy::Inline => width / 3.0 * 0.70,
        };
        // `area` is never negative and never exceeds `container_width`
        area.floor() as u32
    }

    /// Half open range of rendered widths that are left alone.
    #[must_use]
    pub fn tolerance_band(self, container_width: u32) -> std::ops::Range<u32> {
        let area = f64::from(self.content_area(container_width));
        let low = (area * 0.95).floor() as u32;
        let high = (area * 1.05).floor() as u32;
        low..high
    }

    /// Decide whether help text rendered at `rendered_width` has to be
    /// re-wrapped for a container of `size`.
    #[must_use]
    pub fn plan(self, size: Size, rendered_width: u32, text: &str) -> Option<Rewrap> {
        let content_area = self.content_area(size.width);
        let band = self.tolerance_band(size.width);

        debug!(
            "Reflow {:?}: rendered width {}, band {}..{}",
            self, rendered_width, band.start, band.end
        );

        if band.contains(&rendered_width) {
            return None;
        }

        Some(Rewrap {
            text: text.replace('\n', " "),
            width: content_area,
        })
    }

    /// Apply [`ReflowPolicy::plan`] to a live annotation.
    pub fn apply(self, size: Size, help: &mut dyn HelpAnnotation) {
        if let Some(rewrap) = self.plan(size, help.width(), &help.text()) {
            help.set_text(&rewrap.text);
            help.wrap(rewrap.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::memory::WrappingText;

    #[test]
    fn test_content_area_stacked() {
        assert_eq!(ReflowPolicy::Stacked.content_area(800), 348);
        assert_eq!(ReflowPolicy::Stacked.content_area(80), 34);
        assert_eq!(ReflowPolicy::Stacked.content_area(0), 0);
    }

    #[test]
    fn test_content_area_inline() {
        assert_eq!(ReflowPolicy::Inline.content_area(900), 210);
        assert_eq!(ReflowPolicy::Inline.content_area(80), 18);
    }

    #[test]
    fn test_tolerance_band() {
        // 348 * 0.95 = 330.6, 348 * 1.05 = 365.4
        assert_eq!(ReflowPolicy::Stacked.tolerance_band(800), 330..365);
    }

    #[test]
    fn test_plan_inside_band_is_noop() {
        let size = Size::new(800, 600);
        assert_eq!(ReflowPolicy::Stacked.plan(size, 330, "help"), None);
        assert_eq!(ReflowPolicy::Stacked.plan(size, 364, "help"), None);
    }

    #[test]
    fn test_plan_outside_band_normalizes_text() {
        let size = Size::new(800, 600);
        let rewrap = ReflowPolicy::Stacked.plan(size, 365, "line one\nline two");
        assert_eq!(
            rewrap,
            Some(Rewrap {
                text: "line one line two".to_string(),
                width: 348,
            })
        );

        assert!(ReflowPolicy::Stacked.plan(size, 329, "x").is_some());
    }

    #[test]
    fn test_apply_rewraps_annotation() {
        let mut help = WrappingText::new("the quick\nbrown fox jumps over the lazy dog");
        ReflowPolicy::Stacked.apply(Size::new(40, 10), &mut help);

        // content area 17
        assert_eq!(help.text(), "the quick brown\nfox jumps over\nthe lazy dog");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let text = "Path to the file that receives the rendered output of the job";
        let mut help = WrappingText::new(text);
        let size = Size::new(120, 40);

        ReflowPolicy::Stacked.apply(size, &mut help);
        let first = (help.text(), help.width());

        ReflowPolicy::Stacked.apply(size, &mut help);
        assert_eq!((help.text(), help.width()), first);
    }
}
