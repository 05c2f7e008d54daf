use crate::content::SectionContent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub content: SectionContent,
}

#[function_component(Section)]
pub fn section(p: &Props) -> Html {
    let content = &p.content;
    let id = content.id.dom_id();
    let heading_id = format!("{id}-heading");
    html! {
        <section id={id} class="about-section" aria-labelledby={heading_id.clone()}>
            <h2 id={heading_id}>{ content.heading.clone() }</h2>
            { for content.paragraphs.iter().map(|para| html! { <p>{ para.clone() }</p> }) }
            if !content.links.is_empty() {
                <ul class="link-list">
                    { for content.links.iter().map(|link| html! {
                        <li>
                            <a href={link.href.clone()} target="_blank" rel="noopener noreferrer">
                                { link.label.clone() }
                            </a>
                        </li>
                    }) }
                </ul>
            }
        </section>
    }
}
