// SPDX-License-Identifier: MPL-2.0
//! Smooth vertical scrolling for a scrollable identified by a static id.
//!
//! Iced scrollables only jump. This state interpolates the vertical offset
//! from where the scrollable currently is to a [`Target`], one step per
//! window frame, using an ease-in-out cubic curve.
//!
//! Once the widget has reported its geometry the animation runs on absolute
//! pixel offsets and the target is resolved again on every frame, so a target
//! at the end of content that is still growing keeps moving with it. Before
//! any report the animation falls back to relative offsets.
//!
//! Absolute offsets also keep the widget from pinning itself to the end:
//! a scrollable resting at relative offset `1.0` follows content growth on
//! its own, which would make every later append jump instead of scroll.

use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::Task;
use std::time::{Duration, Instant};

/// Relative offsets closer than this are treated as equal.
const RELATIVE_EPSILON: f32 = 1e-3;

/// Absolute offsets closer than this (in logical pixels) are treated as equal.
const PIXEL_EPSILON: f32 = 0.5;

/// Where a scroll animation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Start,
    End,
}

impl Target {
    fn relative(self) -> f32 {
        match self {
            Target::Start => 0.0,
            Target::End => 1.0,
        }
    }

    fn resolve(self, geometry: Geometry) -> f32 {
        match self {
            Target::Start => 0.0,
            Target::End => geometry.max_offset(),
        }
    }
}

/// Heights of a scrollable's content and of its visible area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub content_height: f32,
    pub viewport_height: f32,
}

impl Geometry {
    /// Largest absolute offset the widget accepts.
    #[must_use]
    pub fn max_offset(self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// What a scrollable reported through `on_scroll`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Absolute vertical offset.
    pub offset: f32,
    pub geometry: Geometry,
}

impl ScrollMetrics {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            offset: viewport.absolute_offset().y,
            geometry: Geometry {
                content_height: viewport.content_bounds().height,
                viewport_height: viewport.bounds().height,
            },
        }
    }
}

/// Offset units an animation runs in, fixed when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Absolute,
    Relative,
}

/// One animation frame, ready to become a widget operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollStep {
    Absolute(f32),
    Relative(f32),
}

impl ScrollStep {
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            ScrollStep::Absolute(value) | ScrollStep::Relative(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f32,
    target: Target,
    mode: Mode,
    /// Set on the first frame so the animation does not depend on when the
    /// command was issued relative to the frame clock.
    started_at: Option<Instant>,
}

/// Animated scroll state for one scrollable.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    id: &'static str,
    duration: Duration,
    geometry: Option<Geometry>,
    /// Absolute offset; meaningful once `geometry` is known.
    offset: f32,
    /// Relative offset, tracked while no geometry has been reported.
    relative: f32,
    animation: Option<Animation>,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(id: &'static str, duration: Duration) -> Self {
        Self {
            id,
            duration,
            geometry: None,
            offset: 0.0,
            relative: 0.0,
            animation: None,
        }
    }

    /// Last reported or expected geometry.
    #[must_use]
    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    /// Current absolute offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current position as a fraction of the scrollable range.
    #[must_use]
    pub fn relative_offset(&self) -> f32 {
        match self.geometry {
            Some(geometry) if geometry.max_offset() > 0.0 => {
                (self.offset / geometry.max_offset()).clamp(0.0, 1.0)
            }
            Some(_) => 0.0,
            None => self.relative,
        }
    }

    /// Target of the running animation, if any.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        self.animation.map(|animation| animation.target)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn is_at(&self, target: Target) -> bool {
        match self.geometry {
            Some(geometry) => (self.offset - target.resolve(geometry)).abs() < PIXEL_EPSILON,
            None => (self.relative - target.relative()).abs() < RELATIVE_EPSILON,
        }
    }

    /// Starts an animation toward `target` unless the scrollable is already
    /// there or already heading there. Returns whether an animation started.
    pub fn scroll_to(&mut self, target: Target) -> bool {
        let idle = match self.animation {
            Some(animation) => animation.target != target,
            None => !self.is_at(target),
        };
        if idle {
            self.start(target);
        }
        idle
    }

    /// Starts an animation toward `target` even when the scrollable already
    /// rests there, for content that grew since the last frame.
    pub fn follow(&mut self, target: Target) {
        self.start(target);
    }

    fn start(&mut self, target: Target) {
        let (mode, from) = if self.geometry.is_some() {
            (Mode::Absolute, self.offset)
        } else {
            (Mode::Relative, self.relative)
        };
        self.animation = Some(Animation {
            from,
            target,
            mode,
            started_at: None,
        });
    }

    /// Raises the known content height to `content_height` for content that
    /// grew before the widget could report it. `viewport_height` is used when
    /// nothing was reported yet.
    pub fn expect_content(&mut self, content_height: f32, viewport_height: f32) {
        let geometry = self.geometry.get_or_insert(Geometry {
            content_height,
            viewport_height,
        });
        geometry.content_height = geometry.content_height.max(content_height);
    }

    /// Records a viewport report from the widget.
    ///
    /// Geometry is always taken, so a running animation sees content growth.
    /// The offset is ignored while animating; the animation owns it until it
    /// ends.
    pub fn on_scrolled(&mut self, metrics: ScrollMetrics) {
        self.geometry = Some(metrics.geometry);
        if self.animation.is_none() {
            self.offset = metrics.offset.clamp(0.0, metrics.geometry.max_offset());
        }
    }

    /// Advances the animation to `now` and returns the offset to apply.
    pub fn tick(&mut self, now: Instant) -> Option<ScrollStep> {
        let mut animation = self.animation?;
        let started_at = *animation.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        let to = match (animation.mode, self.geometry) {
            (Mode::Absolute, Some(geometry)) => animation.target.resolve(geometry),
            _ => animation.target.relative(),
        };
        let value = if progress >= 1.0 {
            to
        } else {
            animation.from + (to - animation.from) * ease_in_out_cubic(progress)
        };

        self.animation = (progress < 1.0).then_some(animation);

        Some(match animation.mode {
            Mode::Absolute => {
                self.offset = value;
                ScrollStep::Absolute(value)
            }
            Mode::Relative => {
                self.relative = value;
                ScrollStep::Relative(value)
            }
        })
    }

    /// Advances the animation and turns the new offset into a scroll task.
    pub fn tick_task<T: Send + 'static>(&mut self, now: Instant) -> Task<T> {
        match self.tick(now) {
            Some(step) => scroll_task(self.id, step),
            None => Task::none(),
        }
    }
}

/// Moves the scrollable `id` to the offset of `step`.
pub fn scroll_task<T: Send + 'static>(id: &'static str, step: ScrollStep) -> Task<T> {
    match step {
        ScrollStep::Absolute(y) => {
            operation::scroll_to(Id::new(id), AbsoluteOffset { x: 0.0, y })
        }
        ScrollStep::Relative(y) => operation::snap_to(Id::new(id), RelativeOffset { x: 0.0, y }),
    }
}

/// Cubic ease-in-out on `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(400);

    fn metrics(offset: f32, content_height: f32) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            geometry: Geometry {
                content_height,
                viewport_height: 200.0,
            },
        }
    }

    /// Runs the animation to completion with frames 100 ms apart.
    fn frames(scroll: &mut SmoothScroll) -> Vec<f32> {
        let start = Instant::now();
        (0..=4)
            .filter_map(|i| scroll.tick(start + Duration::from_millis(100 * i)))
            .map(ScrollStep::value)
            .collect()
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let value = ease_in_out_cubic(step as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn scroll_to_current_offset_is_a_no_op() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        assert!(!scroll.scroll_to(Target::Start));
        assert!(!scroll.is_animating());

        scroll.on_scrolled(metrics(600.0, 800.0));
        assert!(!scroll.scroll_to(Target::End));
    }

    #[test]
    fn scroll_to_same_target_twice_starts_once() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        assert!(scroll.scroll_to(Target::End));
        assert!(!scroll.scroll_to(Target::End));
        assert_eq!(scroll.target(), Some(Target::End));
    }

    #[test]
    fn retarget_starts_from_current_offset() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        scroll.on_scrolled(metrics(0.0, 1200.0));
        let start = Instant::now();
        scroll.scroll_to(Target::End);
        scroll.tick(start);
        let midway = scroll.tick(start + DURATION / 2).map(ScrollStep::value);

        assert!(scroll.scroll_to(Target::Start));
        let first = scroll.tick(start + DURATION).map(ScrollStep::value);
        assert_eq!(first, midway);
    }

    #[test]
    fn absolute_animation_reaches_content_end() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        scroll.on_scrolled(metrics(0.0, 1000.0));
        scroll.scroll_to(Target::End);

        let frames = frames(&mut scroll);
        assert_eq!(frames.first(), Some(&0.0));
        assert_eq!(frames.last(), Some(&800.0));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.relative_offset(), 1.0);
    }

    #[test]
    fn follow_after_growth_moves_through_distinct_frames() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        scroll.on_scrolled(metrics(0.0, 400.0));
        scroll.follow(Target::End);
        frames(&mut scroll);
        assert_eq!(scroll.offset(), 200.0);

        // Each later append grows the content while the widget rests at the end
        for content in [440.0, 480.0, 520.0] {
            scroll.expect_content(content, 200.0);
            scroll.follow(Target::End);
            let frames = frames(&mut scroll);

            assert!(
                frames.windows(2).all(|pair| pair[1] > pair[0]),
                "frames should keep moving: {frames:?}"
            );
            assert_eq!(frames.last(), Some(&(content - 200.0)));
        }
    }

    #[test]
    fn growth_reported_mid_animation_extends_the_target() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        scroll.on_scrolled(metrics(200.0, 400.0));
        scroll.follow(Target::End);

        let start = Instant::now();
        scroll.tick(start);
        scroll.on_scrolled(metrics(200.0, 460.0));
        let last = scroll.tick(start + DURATION).map(ScrollStep::value);
        assert_eq!(last, Some(260.0));
    }

    #[test]
    fn expect_content_never_shrinks_reported_geometry() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        scroll.on_scrolled(metrics(0.0, 900.0));
        scroll.expect_content(500.0, 100.0);
        assert_eq!(
            scroll.geometry(),
            Some(Geometry {
                content_height: 900.0,
                viewport_height: 200.0
            })
        );
    }

    #[test]
    fn without_geometry_animation_runs_on_relative_offsets() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        scroll.scroll_to(Target::End);
        let start = Instant::now();

        assert_eq!(scroll.tick(start), Some(ScrollStep::Relative(0.0)));
        assert_eq!(
            scroll.tick(start + DURATION),
            Some(ScrollStep::Relative(1.0))
        );
        assert_eq!(scroll.relative_offset(), 1.0);
        assert!(!scroll.scroll_to(Target::End));
    }

    #[test]
    fn zero_duration_jumps_on_first_frame() {
        let mut scroll = SmoothScroll::new("test", Duration::ZERO);
        scroll.on_scrolled(metrics(0.0, 500.0));
        scroll.scroll_to(Target::End);
        assert_eq!(
            scroll.tick(Instant::now()),
            Some(ScrollStep::Absolute(300.0))
        );
        assert!(!scroll.is_animating());
    }

    #[test]
    fn follow_restarts_even_when_already_at_target() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        scroll.on_scrolled(metrics(300.0, 500.0));
        assert!(!scroll.scroll_to(Target::End));

        scroll.follow(Target::End);
        assert!(scroll.is_animating());
    }

    #[test]
    fn reported_offsets_are_ignored_while_animating() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        scroll.on_scrolled(metrics(0.0, 1000.0));
        scroll.scroll_to(Target::End);
        scroll.on_scrolled(metrics(120.0, 1000.0));
        assert_eq!(scroll.offset(), 0.0);

        frames(&mut scroll);
        scroll.on_scrolled(metrics(120.0, 1000.0));
        assert_eq!(scroll.offset(), 120.0);
    }

    #[test]
    fn content_that_fits_has_no_range() {
        let mut scroll = SmoothScroll::new("test", DURATION);
        scroll.on_scrolled(metrics(0.0, 150.0));
        assert_eq!(scroll.relative_offset(), 0.0);
        assert!(!scroll.scroll_to(Target::End));
    }
}
