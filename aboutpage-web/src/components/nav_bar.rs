use aboutpage_nav::NavBinding;
use yew::prelude::*;

use crate::content::SectionContent;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub sections: Vec<SectionContent>,
    pub bindings: Vec<NavBinding>,
}

/// One anchor per section that has a trigger bound to it.
///
/// The `href` keeps the links usable before the script loads; the navigator
/// suppresses the jump once bound.
#[function_component(NavBar)]
pub fn nav_bar(p: &Props) -> Html {
    let items = p.sections.iter().filter_map(|section| {
        let binding = p.bindings.iter().find(|b| b.target == section.id)?;
        Some(html! {
            <li>
                <a
                    id={binding.trigger.dom_id()}
                    href={format!("#{}", section.id)}
                    class="nav-link"
                >
                    { section.nav_label.clone() }
                </a>
            </li>
        })
    });
    html! {
        <nav class="about-nav" aria-label="Sections">
            <ul>{ for items }</ul>
        </nav>
    }
}
