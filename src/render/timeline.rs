use crate::domain::model::ExperienceEntry;
use maud::{html, Markup};

/// Which side of the central axis an entry's text sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even positions go left, odd go right. Entry content never matters.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Renders the career timeline in the given order. An empty list renders nothing.
pub fn render_timeline(entries: &[ExperienceEntry]) -> Markup {
    if entries.is_empty() {
        return html! {};
    }

    html! {
        div class="timeline" {
            div class="timeline-axis" {}
            div class="timeline-rows" {
                @for (index, entry) in entries.iter().enumerate() {
                    (timeline_row(Side::for_index(index), entry))
                }
            }
        }
    }
}

fn timeline_row(side: Side, entry: &ExperienceEntry) -> Markup {
    html! {
        div class={ "timeline-row timeline-row--" (side.as_str()) } data-side=(side.as_str()) {
            div class="timeline-content" {
                h3 class="timeline-role" { (entry.role) }
                p class="timeline-company" { (entry.company) }
                p class="timeline-year" { (entry.year) }
            }
            div class="timeline-marker" {
                @if entry.is_future {
                    span class="marker marker--future" {
                        span class="marker-ping" {}
                        span class="marker-core" {}
                    }
                } @else {
                    span class="marker marker--past" {}
                }
            }
            div class="timeline-spacer" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(role: &str, is_future: bool) -> ExperienceEntry {
        ExperienceEntry {
            role: role.to_string(),
            company: "Acme".to_string(),
            year: "2024".to_string(),
            is_future,
        }
    }

    fn sides(html: &str) -> Vec<&str> {
        html.match_indices("data-side=\"")
            .map(|(i, m)| {
                let rest = &html[i + m.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render_timeline(&[]).into_string().is_empty());
    }

    #[test]
    fn sides_alternate_by_index_only() {
        // Identical entries and a future flag in the middle must not shift the pattern.
        let entries = vec![
            entry("Same", false),
            entry("Same", false),
            entry("Same", true),
            entry("Other", false),
            entry("Same", true),
        ];
        let html = render_timeline(&entries).into_string();

        assert_eq!(sides(&html), vec!["left", "right", "left", "right", "left"]);
        for index in 0..100 {
            let expected = if index % 2 == 0 { Side::Left } else { Side::Right };
            assert_eq!(Side::for_index(index), expected);
        }
    }

    #[test]
    fn rows_keep_input_order() {
        let entries = vec![entry("Zeta", false), entry("Alpha", false)];
        let html = render_timeline(&entries).into_string();
        assert!(html.find("Zeta").unwrap() < html.find("Alpha").unwrap());
    }

    #[test]
    fn future_entries_get_the_hollow_marker() {
        let html = render_timeline(&[entry("Next", true), entry("Past", false)]).into_string();
        assert_eq!(html.matches("marker--future").count(), 1);
        assert_eq!(html.matches("marker--past").count(), 1);
        assert!(html.contains("marker-ping"));
    }

    #[test]
    fn text_is_escaped() {
        let html = render_timeline(&[entry("<script>", false)]).into_string();
        assert!(html.contains("&lt;script&gt;"));
    }
}
