use leptos::prelude::*;

use super::{DOCS_URL, ORG_URL};

#[component]
fn NavLinks(#[prop(optional)] mobile: bool) -> impl IntoView {
    view! {
        <div class=if mobile { "nav-links nav-links-mobile" } else { "nav-links" }>
            <a href=DOCS_URL target="_blank" class="button-link">"Docs"</a>
            <a href=ORG_URL target="_blank" class="button-link">"Qreater"</a>
        </div>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">"Helm"<span class="highlight-primary">"Inspect"</span></span>
                </a>
                <NavLinks />
                <button class="nav-menu-open" aria-label="Open menu" on:click=toggle_menu>
                    "☰"
                </button>
            </div>

            // Mobile drawer
            <Show when=move || menu_open.get()>
                <div class="nav-backdrop" on:click=toggle_menu></div>
                <div class="nav-mobile">
                    <div class="nav-mobile-header">
                        <span class="nav-title">"Helm"<span class="highlight-primary">"Inspect"</span></span>
                        <button class="nav-menu-close" aria-label="Close menu" on:click=toggle_menu>
                            "✕"
                        </button>
                    </div>
                    <NavLinks mobile=true />
                </div>
            </Show>
        </nav>
    }
}
