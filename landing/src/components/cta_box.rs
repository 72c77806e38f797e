use leptos::prelude::*;

use super::anchor::{anchor_target, scroll_to_anchor};

/// Text block with a call-to-action button. In-page links (`#id`) scroll
/// smoothly instead of jumping.
#[component]
pub fn CtaBox(
    cta_text: &'static str,
    cta_link: &'static str,
    #[prop(optional)] new_tab: bool,
    #[prop(optional)] left: bool,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(id) = anchor_target(cta_link) {
            ev.prevent_default();
            scroll_to_anchor(id);
        }
    };

    view! {
        <div class="cta-box">
            <div class="cta-box-content">{children()}</div>
            <a
                href=cta_link
                target=new_tab.then_some("_blank")
                class=if left { "cta-button cta-button-left" } else { "cta-button" }
                on:click=on_click
            >
                {cta_text}
            </a>
        </div>
    }
}
