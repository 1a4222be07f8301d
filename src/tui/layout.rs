/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered
/// in render code. Compact terminals collapse the nav links into a drawer,
/// the terminal stand-in for a mobile hamburger menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: stacked cards, nav collapses into a drawer
    Compact,
    /// 60-99 cols: full nav, three-across cards
    Normal,
    /// 100+ cols: the same, with breathing room
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Whether the nav links live in the collapsible drawer at this width
    pub fn nav_collapsed(&self) -> bool {
        matches!(self, Breakpoint::Compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn only_compact_collapses_nav() {
        assert!(Breakpoint::Compact.nav_collapsed());
        assert!(!Breakpoint::Normal.nav_collapsed());
        assert!(!Breakpoint::Wide.nav_collapsed());
    }
}
