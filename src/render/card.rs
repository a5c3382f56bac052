use crate::domain::model::WorkItem;
use crate::render::external_link;
use crate::render::icons::Icon;
use maud::{html, Markup};

pub fn render_card(item: &WorkItem) -> Markup {
    let has_links = item.github.is_some() || item.link.is_some();

    html! {
        article class="card" {
            h3 class="card-title" { (item.title) }
            @if let Some(description) = &item.description {
                p class="card-description" { (description) }
            }
            @if has_links {
                div class="card-links" {
                    @if let Some(github) = &item.github {
                        (external_link(github, "Source on GitHub", Icon::Github, "card-link"))
                    }
                    @if let Some(link) = &item.link {
                        (external_link(link, "Open project", Icon::ExternalLink, "card-link"))
                    }
                }
            }
        }
    }
}

/// Cards in list order inside the two-column grid.
pub fn render_cards(items: &[WorkItem]) -> Markup {
    html! {
        div class="card-grid" {
            @for item in items {
                (render_card(item))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_only_card_has_no_icons() {
        let html = render_card(&WorkItem::titled("X")).into_string();
        assert!(html.contains(">X</h3>"));
        assert!(!html.contains("<a "));
        assert!(!html.contains("<svg"));
        assert!(!html.contains("card-description"));
    }

    #[test]
    fn links_open_without_opener_access() {
        let item = WorkItem {
            title: "Folio".to_string(),
            description: Some("Static portfolio".to_string()),
            link: Some("https://folio.example.com".to_string()),
            github: Some("https://github.com/example/folio".to_string()),
        };
        let html = render_card(&item).into_string();

        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 2);
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert!(html.contains("Static portfolio"));
        assert!(html.find("github.com/example").unwrap() < html.find("folio.example.com").unwrap());
    }

    #[test]
    fn only_present_links_are_rendered() {
        let item = WorkItem {
            link: Some("https://folio.example.com".to_string()),
            ..WorkItem::titled("Folio")
        };
        let html = render_card(&item).into_string();
        assert!(html.contains("icon-external-link"));
        assert!(!html.contains("icon-github"));
    }

    #[test]
    fn grid_keeps_order() {
        let html = render_cards(&[WorkItem::titled("B"), WorkItem::titled("A")]).into_string();
        assert!(html.find(">B<").unwrap() < html.find(">A<").unwrap());
    }
}
