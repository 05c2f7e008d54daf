use yew::prelude::*;

use super::nav_bar::NavBar;
use super::scroll_nav::use_scroll_nav;
use super::section::Section;
use crate::content::{AboutContent, nav_setup};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_else(AboutContent::load_from_static)]
    pub content: AboutContent,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            content: AboutContent::load_from_static(),
        }
    }
}

#[function_component(AboutPage)]
pub fn about_page(p: &Props) -> Html {
    let setup = use_memo((), |()| nav_setup());
    use_scroll_nav((*setup).clone());

    let content = &p.content;
    let bindings = setup.navigator.bindings().to_vec();
    let floating_id = setup.floating.binding().trigger.dom_id();
    let top_href = format!("#{}", setup.floating.binding().target);

    html! {
        <>
            <main id="main" role="main" class="about-header">
                <h1>{ content.title.clone() }</h1>
                if !content.tagline.is_empty() {
                    <p class="tagline">{ content.tagline.clone() }</p>
                }
                <NavBar sections={content.sections.clone()} {bindings} />
            </main>
            { for content.sections.iter().map(|section| html! {
                <Section key={section.id.dom_id()} content={section.clone()} />
            }) }
            <a
                id={floating_id}
                href={top_href}
                class="floating-btn"
                aria-label={content.floating_label.clone()}
                title={content.floating_label.clone()}
            >
                { "\u{2191}" }
            </a>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(content: AboutContent) -> String {
        block_on(LocalServerRenderer::<AboutPage>::with_props(Props { content }).render())
    }

    #[test]
    fn page_exposes_every_section_and_trigger_id() {
        let html = render(AboutContent::load_from_static());
        let sections = aboutpage_nav::SectionId::ALL.map(aboutpage_nav::SectionId::dom_id);
        let triggers = aboutpage_nav::TriggerId::ALL.map(aboutpage_nav::TriggerId::dom_id);
        for id in sections.into_iter().chain(triggers) {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
    }

    #[test]
    fn nav_links_fall_back_to_anchor_hrefs() {
        let html = render(AboutContent::load_from_static());
        assert!(html.contains("href=\"#developer\""));
        assert!(html.contains("href=\"#main\""));
    }

    #[test]
    fn sections_without_content_get_no_button() {
        let mut content = AboutContent::load_from_static();
        content.sections.retain(|s| s.id != aboutpage_nav::SectionId::Developer);
        let html = render(content);
        assert!(!html.contains("id=\"devBtn\""));
        assert!(!html.contains("id=\"developer\""));
    }
}
