// Timer- and scroll-driven page effects
//
// Three independent effects live here, each a small state machine advanced
// by the render tick:
// - Typewriter: reveals the hero title one character at a time
// - RevealTracker: fades blocks in the first time they scroll into view
// - header_elevated: the navbar's scrolled-past-the-top affordance

use super::scroll::{BlockId, BlockLayout};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Scroll offset (rows) past which the header renders elevated
/// (the 100px threshold at 10px per row)
pub const ELEVATE_THRESHOLD: usize = 10;

/// Fraction of a block's height that must be visible to reveal it
pub const REVEAL_THRESHOLD: f32 = 0.10;

/// Rows shaved off the bottom of the viewport before the visibility check
/// (the -50px root margin)
pub const REVEAL_BOTTOM_MARGIN: usize = 5;

/// Pause before the first character appears
const TYPING_DELAY: Duration = Duration::from_millis(1000);

/// One character per this interval
const TYPING_INTERVAL: Duration = Duration::from_millis(100);

/// Whether the header shows its scrolled style. Pure function of the scroll
/// offset - repeated calls with the same offset agree.
pub fn header_elevated(scroll: usize) -> bool {
    scroll > ELEVATE_THRESHOLD
}

/// Hero-title typing animation.
///
/// Captures the full title at construction, then reveals it one character
/// per 100ms starting 1s later. Runs once; when the text is exhausted the
/// state machine is done and stays done. Steps by `char`, not byte, so
/// multibyte titles do not tear.
#[derive(Debug)]
pub struct Typewriter {
    full: String,
    char_count: usize,
    started_at: Instant,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let full = text.into();
        let char_count = full.chars().count();
        Self {
            full,
            char_count,
            started_at: Instant::now(),
        }
    }

    /// Characters visible at `now`: zero through the initial delay, then
    /// one more per interval until the text is exhausted
    fn visible_chars(&self, now: Instant) -> usize {
        let Some(since_start) = now.checked_duration_since(self.started_at) else {
            return 0;
        };
        let Some(typing_time) = since_start.checked_sub(TYPING_DELAY) else {
            return 0;
        };
        let typed = (typing_time.as_millis() / TYPING_INTERVAL.as_millis()) as usize + 1;
        typed.min(self.char_count)
    }

    /// The currently visible prefix of the title
    pub fn visible_at(&self, now: Instant) -> &str {
        let chars = self.visible_chars(now);
        match self.full.char_indices().nth(chars) {
            Some((idx, _)) => &self.full[..idx],
            None => &self.full,
        }
    }

    pub fn visible(&self) -> &str {
        self.visible_at(Instant::now())
    }

    /// True once every character is shown
    #[allow(dead_code)]
    pub fn is_done(&self, now: Instant) -> bool {
        self.visible_chars(now) >= self.char_count
    }
}

/// One-way reveal state for page blocks.
///
/// Replaces the browser's IntersectionObserver: each tick the caller passes
/// the current block geometry and viewport, and any block with >= 10% of its
/// height inside the (bottom-shrunk) viewport joins the revealed set. The
/// set only grows.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<BlockId>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check all blocks against the viewport, revealing any that qualify
    pub fn observe(&mut self, blocks: &[BlockLayout], scroll: usize, viewport: usize) {
        let window_bottom = scroll + viewport.saturating_sub(REVEAL_BOTTOM_MARGIN);
        for block in blocks {
            if self.revealed.contains(&block.id) {
                continue;
            }
            if visible_fraction(block, scroll, window_bottom) >= REVEAL_THRESHOLD {
                self.revealed.insert(block.id);
            }
        }
    }

    pub fn is_revealed(&self, id: BlockId) -> bool {
        self.revealed.contains(&id)
    }
}

/// Fraction of a block's height inside [scroll, window_bottom)
fn visible_fraction(block: &BlockLayout, scroll: usize, window_bottom: usize) -> f32 {
    if block.height == 0 {
        return 0.0;
    }
    let top = block.top.max(scroll);
    let bottom = (block.top + block.height).min(window_bottom);
    if bottom <= top {
        return 0.0;
    }
    (bottom - top) as f32 / block.height as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: BlockId, top: usize, height: usize) -> BlockLayout {
        BlockLayout { id, top, height }
    }

    #[test]
    fn elevation_boundary() {
        assert!(!header_elevated(0));
        assert!(!header_elevated(ELEVATE_THRESHOLD));
        assert!(header_elevated(ELEVATE_THRESHOLD + 1));
        // Idempotent under repeated identical scroll positions
        assert_eq!(header_elevated(7), header_elevated(7));
    }

    #[test]
    fn typewriter_waits_out_the_initial_delay() {
        let tw = Typewriter::new("hello");
        let start = tw.started_at;
        assert_eq!(tw.visible_at(start), "");
        assert_eq!(tw.visible_at(start + Duration::from_millis(999)), "");
        // First character lands at the 1s mark
        assert_eq!(tw.visible_at(start + Duration::from_millis(1000)), "h");
    }

    #[test]
    fn typewriter_reveals_one_char_per_interval() {
        let tw = Typewriter::new("hello");
        let start = tw.started_at;
        assert_eq!(tw.visible_at(start + Duration::from_millis(1150)), "he");
        assert_eq!(tw.visible_at(start + Duration::from_millis(1350)), "hell");
        assert_eq!(tw.visible_at(start + Duration::from_millis(1400)), "hello");
        assert!(tw.is_done(start + Duration::from_millis(1400)));
        // Exhausted and stays exhausted
        assert_eq!(tw.visible_at(start + Duration::from_secs(60)), "hello");
    }

    #[test]
    fn typewriter_steps_by_char_not_byte() {
        let tw = Typewriter::new("안녕하세요");
        let start = tw.started_at;
        assert_eq!(tw.visible_at(start + Duration::from_millis(1100)), "안녕");
        assert_eq!(
            tw.visible_at(start + Duration::from_millis(1400)),
            "안녕하세요"
        );
    }

    #[test]
    fn typewriter_empty_title_is_done_immediately() {
        let tw = Typewriter::new("");
        assert!(tw.is_done(tw.started_at));
        assert_eq!(tw.visible_at(tw.started_at), "");
    }

    #[test]
    fn blocks_start_hidden_and_reveal_at_threshold() {
        let mut tracker = RevealTracker::new();
        let blocks = [block(BlockId::Hero, 0, 10), block(BlockId::Card(0), 100, 10)];
        assert!(!tracker.is_revealed(BlockId::Hero));

        tracker.observe(&blocks, 0, 24);
        assert!(tracker.is_revealed(BlockId::Hero));
        // Far-away card is still hidden
        assert!(!tracker.is_revealed(BlockId::Card(0)));
    }

    #[test]
    fn reveal_requires_ten_percent_visibility() {
        let mut tracker = RevealTracker::new();
        // Block of height 10 at rows 100..110; viewport 24 rows with a 5-row
        // bottom margin shows page rows [scroll, scroll+19)
        let blocks = [block(BlockId::Card(0), 100, 10)];

        // Window bottom at row 100: zero rows visible
        tracker.observe(&blocks, 81, 24);
        assert!(!tracker.is_revealed(BlockId::Card(0)));

        // Window bottom at row 101: one row of ten = 10% exactly
        tracker.observe(&blocks, 82, 24);
        assert!(tracker.is_revealed(BlockId::Card(0)));
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut tracker = RevealTracker::new();
        let blocks = [block(BlockId::Profile, 5, 5)];
        tracker.observe(&blocks, 0, 24);
        assert!(tracker.is_revealed(BlockId::Profile));

        // Scrolling far away never hides it again
        tracker.observe(&blocks, 500, 24);
        assert!(tracker.is_revealed(BlockId::Profile));
    }

    #[test]
    fn bottom_margin_shrinks_the_window() {
        let mut tracker = RevealTracker::new();
        // Block right at the viewport bottom edge: visible without the
        // margin, hidden with it
        let blocks = [block(BlockId::Card(1), 20, 10)];
        tracker.observe(&blocks, 0, 24); // window bottom = 19
        assert!(!tracker.is_revealed(BlockId::Card(1)));

        tracker.observe(&blocks, 2, 24); // window bottom = 21, one row visible
        assert!(tracker.is_revealed(BlockId::Card(1)));
    }
}
