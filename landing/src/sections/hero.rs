use leptos::prelude::*;

use crate::components::{CommandBox, scroll_to_anchor};

#[component]
pub fn Hero() -> impl IntoView {
    let scroll_to_why = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        scroll_to_anchor("why-helm-inspect");
    };

    view! {
        <section class="hero-section">
            <div class="hero-content-wrapper">
                <div class="landing-content">
                    <h1 class="hero-title">
                        "Detect Helm Drift "
                        <span class="highlight-primary">"Instantly"</span>
                        ". "
                        <span class="highlight-primary">"No Setup"</span>
                        " Required."
                    </h1>
                    <p class="hero-text">
                        <span class="mobile-trim">
                            "Manually "
                            <span class="highlight-primary">"modified Kubernetes"</span>
                            " resources can lead to inconsistencies, downtime, and security risks. "
                        </span>
                        <span class="highlight-secondary">"Helm Inspect"</span>
                        " helps you track and detect "
                        <span class="highlight-primary">"drift"</span>
                        " between your Helm manifests and the actual deployed resources"
                        <span class="mobile-trim">
                            ", "
                            <span class="highlight-primary">"without"</span>
                            " any complicated setup."
                        </span>
                    </p>
                    <CommandBox copy_text="pip install helm-inspect">
                        "pip install "
                        <span class="highlight-primary">"helm-inspect"</span>
                    </CommandBox>
                    <a href="#why-helm-inspect" class="button-link" on:click=scroll_to_why>
                        "Why Helm Inspect?"
                    </a>
                </div>
            </div>
        </section>
    }
}
