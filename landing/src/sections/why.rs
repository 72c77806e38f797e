use leptos::prelude::*;
use scenariobox::Deck;

use crate::components::{CtaBox, ScenarioBox};

#[component]
pub fn Why() -> impl IntoView {
    let scenarios = match Deck::builtin("why") {
        Ok(deck) => view! { <ScenarioBox deck=deck /> }.into_any(),
        Err(err) => {
            web_sys::console::error_1(&format!("[why] {err}").into());
            ().into_any()
        }
    };

    view! {
        <section id="why-helm-inspect" class="hero-section">
            <div class="hero-content-wrapper">
                <div class="why-wrapper">
                    <h2 class="hero-title">
                        "Why " <span class="highlight-primary">"Helm Inspect"</span>
                    </h2>
                    <div class="why-content">
                        {scenarios}
                        <CtaBox cta_text="How it works?" cta_link="#how-it-works">
                            <p class="hero-text">"Helm Drift Occurs When,"</p>
                            <ul class="hero-list">
                                <li>
                                    "Kubernetes resources "
                                    <span class="highlight-accent">"are manually changed"</span>
                                    " instead of using helm "
                                    <span class="highlight-primary">"upgrade"</span>
                                    "."
                                </li>
                                <li class="mobile-trim">
                                    "Configurations differ from what Helm originally deployed, causing hidden "
                                    <span class="highlight-primary">"inconsistencies"</span>
                                    "."
                                </li>
                                <li>
                                    "Future upgrades fail due to unexpected changes in resource definitions."
                                </li>
                            </ul>
                            <p class="hero-text">
                                "While ArgoCD can prevent drift in "
                                <span class="highlight-secondary">"GitOps"</span>
                                " setups, not every system has it in place."
                            </p>
                            <p class="hero-text">
                                <span class="highlight-primary">"HelmInspect"</span>
                                " is a lightweight CLI tool that instantly detects drift, providing actionable insights without requiring complex configurations."
                            </p>
                        </CtaBox>
                    </div>
                </div>
            </div>
        </section>
    }
}
