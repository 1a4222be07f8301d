// Page content model
//
// The one-page blog the app renders. Sections are declared as data; layout
// (vertical offsets, card rectangles) is computed from this model at render
// width by `tui::scroll::PageLayout`. Nav links resolve against fragment
// ids, exactly like in-page anchors.

/// A post preview card in the posts grid
#[derive(Debug, Clone)]
pub struct Card {
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
}

/// A single row in the contact section (icon + value)
#[derive(Debug, Clone)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
}

/// Fragment ids for the four sections, in page order
pub const SECTION_IDS: [&str; 4] = ["home", "about", "posts", "contact"];

/// The whole page
#[derive(Debug, Clone)]
pub struct Page {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub about_lines: Vec<&'static str>,
    pub cards: Vec<Card>,
    pub contact_items: Vec<ContactItem>,
}

impl Page {
    /// The built-in page content
    pub fn builtin() -> Self {
        Self {
            hero_title: "Welcome to my corner of the web",
            hero_subtitle: "Notes on code, coffee, and everything in between",
            about_lines: vec![
                "Hi, I'm a software developer who likes small tools,",
                "plain text, and terminals that do more than they should.",
                "",
                "This page is my notebook in public: build logs, half-baked",
                "ideas, and the occasional finished thought.",
            ],
            cards: vec![
                Card {
                    title: "Why I still write shell scripts",
                    date: "2025-11-02",
                    summary: "Twenty lines of bash beat a framework more often than you'd think.",
                },
                Card {
                    title: "A month of keyboard-only computing",
                    date: "2025-09-18",
                    summary: "What broke, what stuck, and why my mouse is gathering dust.",
                },
                Card {
                    title: "Reading old code kindly",
                    date: "2025-07-30",
                    summary: "Past me had reasons. Future me should look for them first.",
                },
            ],
            contact_items: vec![
                ContactItem {
                    label: "email",
                    value: "hello@example.dev",
                },
                ContactItem {
                    label: "github",
                    value: "github.com/example",
                },
                ContactItem {
                    label: "rss",
                    value: "example.dev/feed.xml",
                },
            ],
        }
    }

    /// Nav label for a section id (title-cased fragment)
    pub fn nav_label(id: &str) -> &'static str {
        match id {
            "home" => "Home",
            "about" => "About",
            "posts" => "Posts",
            "contact" => "Contact",
            _ => "?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_page_has_all_sections_worth_of_content() {
        let page = Page::builtin();
        assert!(!page.hero_title.is_empty());
        assert!(!page.about_lines.is_empty());
        assert_eq!(page.cards.len(), 3);
        assert_eq!(page.contact_items.len(), 3);
    }

    #[test]
    fn nav_labels_cover_every_section() {
        for id in SECTION_IDS {
            assert_ne!(Page::nav_label(id), "?");
        }
        assert_eq!(Page::nav_label("nonexistent"), "?");
    }
}
