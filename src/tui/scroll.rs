// Viewport scrolling and page geometry
//
// The page is a virtual column of rows; the terminal shows a window into it.
// `PageLayout` computes where every section and block lands at a given width,
// and `SmoothScroll` animates the window toward a target row with eased
// steps on the render tick. Nav links resolve fragment ids to a target of
// `section.top - NAV_OFFSET`; unknown ids are a silent no-op at the caller.

use crate::content::Page;

/// Rows the scroll target sits above a section top, leaving room for the
/// fixed header (the 80px navbar offset, at 10px per row)
pub const NAV_OFFSET: usize = 8;

/// Post card height in rows
pub const CARD_HEIGHT: usize = 7;

/// Bordered form field height in rows
pub const FIELD_HEIGHT: usize = 3;

const HERO_HEIGHT: usize = 12;
const HEADING_HEIGHT: usize = 2;
const SECTION_PAD: usize = 2;
const CARD_GAP: u16 = 2;
const FOOTER_HEIGHT: usize = 2;

/// Fraction of the remaining distance covered per animation step
const EASE_FACTOR: f32 = 0.25;

/// Distance below which the animation snaps to its target
const SNAP_EPSILON: f32 = 0.5;

/// A rectangle in page coordinates (rows grow downward without bound)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRect {
    pub x: u16,
    pub top: usize,
    pub width: u16,
    pub height: usize,
}

impl PageRect {
    pub fn contains(&self, col: u16, row: usize) -> bool {
        col >= self.x
            && col < self.x.saturating_add(self.width)
            && row >= self.top
            && row < self.top + self.height
    }
}

/// Identity of a revealable block, stable across frames and widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    Hero,
    Profile,
    Card(usize),
    ContactItem(usize),
}

/// A revealable block's position in page coordinates
#[derive(Debug, Clone, Copy)]
pub struct BlockLayout {
    pub id: BlockId,
    pub top: usize,
    pub height: usize,
}

/// Where a section starts and how tall it is
#[derive(Debug, Clone)]
pub struct SectionLayout {
    pub id: &'static str,
    pub top: usize,
    pub height: usize,
}

/// Contact form field rectangles
#[derive(Debug, Clone)]
pub struct FormLayout {
    pub email: PageRect,
    pub phone: PageRect,
    pub message: PageRect,
    pub send: PageRect,
}

/// Full page geometry at one render width
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: u16,
    pub sections: Vec<SectionLayout>,
    pub cards: Vec<PageRect>,
    pub blocks: Vec<BlockLayout>,
    pub form: FormLayout,
    pub total_height: usize,
}

impl PageLayout {
    /// Compute geometry for the page at a content width.
    ///
    /// Cards sit three abreast when the width allows, stacked otherwise,
    /// mirroring the page's responsive grid.
    pub fn compute(page: &Page, width: u16) -> Self {
        let width = width.max(20);
        let mut sections = Vec::with_capacity(4);
        let mut blocks = Vec::new();

        // Hero ("home")
        let hero_top = 0;
        sections.push(SectionLayout {
            id: "home",
            top: hero_top,
            height: HERO_HEIGHT,
        });
        blocks.push(BlockLayout {
            id: BlockId::Hero,
            top: hero_top + 2,
            height: HERO_HEIGHT - 4,
        });

        // About: heading + bordered profile card
        let about_top = hero_top + HERO_HEIGHT;
        let profile_height = page.about_lines.len() + 2;
        sections.push(SectionLayout {
            id: "about",
            top: about_top,
            height: HEADING_HEIGHT + profile_height + SECTION_PAD,
        });
        blocks.push(BlockLayout {
            id: BlockId::Profile,
            top: about_top + HEADING_HEIGHT,
            height: profile_height,
        });

        // Posts: heading + card grid
        let posts_top = about_top + HEADING_HEIGHT + profile_height + SECTION_PAD;
        let grid_top = posts_top + HEADING_HEIGHT;
        let three_across = width >= 60 && page.cards.len() > 1;
        let mut cards = Vec::with_capacity(page.cards.len());
        let grid_height = if three_across {
            let columns = page.cards.len().min(3) as u16;
            let card_width = (width - CARD_GAP * (columns - 1)) / columns;
            for i in 0..page.cards.len() {
                let col = (i as u16) % columns;
                let row = i / columns as usize;
                cards.push(PageRect {
                    x: col * (card_width + CARD_GAP),
                    top: grid_top + row * (CARD_HEIGHT + 1),
                    width: card_width,
                    height: CARD_HEIGHT,
                });
            }
            let rows = page.cards.len().div_ceil(columns as usize);
            rows * CARD_HEIGHT + rows.saturating_sub(1)
        } else {
            for i in 0..page.cards.len() {
                cards.push(PageRect {
                    x: 0,
                    top: grid_top + i * (CARD_HEIGHT + 1),
                    width,
                    height: CARD_HEIGHT,
                });
            }
            page.cards.len() * CARD_HEIGHT + page.cards.len().saturating_sub(1)
        };
        for (i, rect) in cards.iter().enumerate() {
            blocks.push(BlockLayout {
                id: BlockId::Card(i),
                top: rect.top,
                height: rect.height,
            });
        }
        sections.push(SectionLayout {
            id: "posts",
            top: posts_top,
            height: HEADING_HEIGHT + grid_height + SECTION_PAD,
        });

        // Contact: heading + contact items + form
        let contact_top = posts_top + HEADING_HEIGHT + grid_height + SECTION_PAD;
        let items_top = contact_top + HEADING_HEIGHT;
        for i in 0..page.contact_items.len() {
            blocks.push(BlockLayout {
                id: BlockId::ContactItem(i),
                top: items_top + i,
                height: 1,
            });
        }
        let form_top = items_top + page.contact_items.len() + 1;
        let field_width = width.min(48);
        let form = FormLayout {
            email: PageRect {
                x: 0,
                top: form_top,
                width: field_width,
                height: FIELD_HEIGHT,
            },
            phone: PageRect {
                x: 0,
                top: form_top + FIELD_HEIGHT,
                width: field_width,
                height: FIELD_HEIGHT,
            },
            message: PageRect {
                x: 0,
                top: form_top + 2 * FIELD_HEIGHT,
                width: field_width,
                height: FIELD_HEIGHT,
            },
            send: PageRect {
                x: 0,
                top: form_top + 3 * FIELD_HEIGHT + 1,
                width: 12,
                height: FIELD_HEIGHT,
            },
        };
        let form_height = 3 * FIELD_HEIGHT + 1 + FIELD_HEIGHT;
        let contact_height =
            HEADING_HEIGHT + page.contact_items.len() + 1 + form_height + SECTION_PAD;
        sections.push(SectionLayout {
            id: "contact",
            top: contact_top,
            height: contact_height,
        });

        let total_height = contact_top + contact_height + FOOTER_HEIGHT;

        Self {
            width,
            sections,
            cards,
            blocks,
            form,
            total_height,
        }
    }

    /// Top row of the section with this fragment id
    pub fn section_top(&self, id: &str) -> Option<usize> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }

    /// Scroll target for a fragment id: `top - NAV_OFFSET`, or None when
    /// no such section exists (callers treat that as a no-op)
    pub fn scroll_target_for(&self, id: &str) -> Option<usize> {
        self.section_top(id).map(|top| top.saturating_sub(NAV_OFFSET))
    }

    /// Largest valid scroll offset for a viewport height
    pub fn max_scroll(&self, viewport: usize) -> usize {
        self.total_height.saturating_sub(viewport)
    }

    /// Which card (if any) sits under a page coordinate - hover hit test
    pub fn card_at(&self, col: u16, row: usize) -> Option<usize> {
        self.cards.iter().position(|rect| rect.contains(col, row))
    }
}

/// Eased viewport scroll position.
///
/// Manual scrolling (keys, wheel) moves instantly; nav-link scrolling sets a
/// target that `step` approaches each tick with an ease-out curve.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    current: f32,
    target: f32,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self {
            current: 0.0,
            target: 0.0,
        }
    }

    /// Current offset in whole rows
    pub fn offset(&self) -> usize {
        self.current.round().max(0.0) as usize
    }

    /// Begin an eased scroll toward a row
    pub fn animate_to(&mut self, row: usize) {
        self.target = row as f32;
    }

    /// Jump instantly (manual scrolling)
    pub fn jump_to(&mut self, row: usize) {
        self.current = row as f32;
        self.target = self.current;
    }

    /// Manual scroll by a signed number of rows, clamped to [0, max]
    pub fn scroll_by(&mut self, delta: i32, max: usize) {
        let next = (self.offset() as i64 + delta as i64).clamp(0, max as i64) as usize;
        self.jump_to(next);
    }

    /// Advance the animation one tick. Returns true while still moving.
    pub fn step(&mut self) -> bool {
        let distance = self.target - self.current;
        if distance.abs() <= SNAP_EPSILON {
            self.current = self.target;
            return false;
        }
        self.current += distance * EASE_FACTOR;
        true
    }

    /// Clamp both position and target into the valid range
    pub fn clamp_to(&mut self, max: usize) {
        let max = max as f32;
        self.current = self.current.clamp(0.0, max);
        self.target = self.target.clamp(0.0, max);
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.current).abs() <= SNAP_EPSILON
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Page;

    fn layout() -> PageLayout {
        PageLayout::compute(&Page::builtin(), 80)
    }

    #[test]
    fn sections_are_ordered_and_contiguous() {
        let layout = layout();
        assert_eq!(layout.sections.len(), 4);
        assert_eq!(layout.sections[0].top, 0);
        for pair in layout.sections.windows(2) {
            assert_eq!(pair[0].top + pair[0].height, pair[1].top);
        }
        let last = &layout.sections[3];
        assert_eq!(layout.total_height, last.top + last.height + 2);
    }

    #[test]
    fn scroll_target_sits_nav_offset_above_section() {
        let layout = layout();
        let posts_top = layout.section_top("posts").unwrap();
        assert_eq!(
            layout.scroll_target_for("posts"),
            Some(posts_top - NAV_OFFSET)
        );
        // Top of page cannot scroll negative
        assert_eq!(layout.scroll_target_for("home"), Some(0));
    }

    #[test]
    fn unknown_fragment_resolves_to_none() {
        let layout = layout();
        assert_eq!(layout.scroll_target_for("missing"), None);
        assert_eq!(layout.section_top("#home"), None); // ids are bare fragments
    }

    #[test]
    fn wide_layout_puts_cards_three_abreast() {
        let layout = layout();
        assert_eq!(layout.cards.len(), 3);
        let top = layout.cards[0].top;
        assert!(layout.cards.iter().all(|c| c.top == top));
        // No horizontal overlap
        assert!(layout.cards[0].x + layout.cards[0].width <= layout.cards[1].x);
    }

    #[test]
    fn narrow_layout_stacks_cards() {
        let layout = PageLayout::compute(&Page::builtin(), 40);
        assert!(layout.cards.windows(2).all(|p| p[0].top < p[1].top));
        assert!(layout.cards.iter().all(|c| c.x == 0));
    }

    #[test]
    fn card_hit_test() {
        let layout = layout();
        let rect = layout.cards[1];
        assert_eq!(layout.card_at(rect.x + 1, rect.top + 1), Some(1));
        assert_eq!(layout.card_at(rect.x + 1, rect.top + rect.height), None);
    }

    #[test]
    fn smooth_scroll_converges_to_target() {
        let mut scroll = SmoothScroll::new();
        scroll.animate_to(40);
        let mut steps = 0;
        while scroll.step() {
            steps += 1;
            assert!(steps < 200, "animation failed to settle");
        }
        assert_eq!(scroll.offset(), 40);
        assert!(scroll.is_settled());
    }

    #[test]
    fn manual_scroll_is_instant_and_clamped() {
        let mut scroll = SmoothScroll::new();
        scroll.scroll_by(5, 100);
        assert_eq!(scroll.offset(), 5);
        assert!(scroll.is_settled());

        scroll.scroll_by(-50, 100);
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_by(500, 100);
        assert_eq!(scroll.offset(), 100);
    }

    #[test]
    fn clamp_pulls_back_out_of_range_targets() {
        let mut scroll = SmoothScroll::new();
        scroll.animate_to(500);
        scroll.clamp_to(120);
        while scroll.step() {}
        assert_eq!(scroll.offset(), 120);
    }
}
