// fixed vector icon payloads written by the placeholder generator

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Calendar,
    Chat,
    Friendship,
}

impl Icon {
    pub const ALL: [Icon; 3] = [Icon::Calendar, Icon::Chat, Icon::Friendship];

    pub fn file_name(self) -> &'static str {
        match self {
            Icon::Calendar => "calendar.svg",
            Icon::Chat => "chat.svg",
            Icon::Friendship => "friendship.svg",
        }
    }

    pub fn svg(self) -> &'static str {
        match self {
            Icon::Calendar => CALENDAR_SVG,
            Icon::Chat => CHAT_SVG,
            Icon::Friendship => FRIENDSHIP_SVG,
        }
    }
}

const CALENDAR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
    <rect x="3" y="4" width="18" height="18" rx="2" ry="2"></rect>
    <line x1="16" y1="2" x2="16" y2="6"></line>
    <line x1="8" y1="2" x2="8" y2="6"></line>
    <line x1="3" y1="10" x2="21" y2="10"></line>
</svg>"#;

const CHAT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
    <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"></path>
</svg>"#;

const FRIENDSHIP_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
    <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path>
    <circle cx="9" cy="7" r="4"></circle>
    <path d="M23 21v-2a4 4 0 0 0-3-3.87"></path>
    <path d="M16 3.13a4 4 0 0 1 0 7.75"></path>
</svg>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_are_standalone_svg_documents() {
        for icon in Icon::ALL {
            let svg = icon.svg();
            assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
            assert!(svg.ends_with("</svg>"));
            assert!(icon.file_name().ends_with(".svg"));
        }
    }

    #[test]
    fn payloads_match_fixture_bytes() {
        assert_eq!(Icon::Calendar.svg(), include_str!("../../tests/fixtures/icons/calendar.svg"));
        assert_eq!(Icon::Chat.svg(), include_str!("../../tests/fixtures/icons/chat.svg"));
        assert_eq!(
            Icon::Friendship.svg(),
            include_str!("../../tests/fixtures/icons/friendship.svg")
        );
    }
}
