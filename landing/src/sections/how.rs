use leptos::prelude::*;
use scenariobox::Deck;

use super::DOCS_URL;
use crate::components::{CtaBox, ScenarioBox};

#[component]
pub fn How() -> impl IntoView {
    let scenarios = match Deck::builtin("how") {
        Ok(deck) => view! { <ScenarioBox deck=deck /> }.into_any(),
        Err(err) => {
            web_sys::console::error_1(&format!("[how] {err}").into());
            ().into_any()
        }
    };

    view! {
        <section id="how-it-works" class="hero-section">
            <div class="hero-content-wrapper">
                <div class="how-wrapper">
                    <h2 class="hero-title">
                        "How " <span class="highlight-primary">"It Works"</span>
                    </h2>
                    <div class="how-content">
                        <CtaBox cta_text="Check The Docs!" cta_link=DOCS_URL new_tab=true left=true>
                            <p class="hero-text">
                                "With HelmInspect, you can catch and fix drifts before they break your apps."
                            </p>
                            <ul class="hero-list">
                                <li>
                                    <span class="highlight-primary">"Install & Run HelmInspect"</span>
                                    "."
                                </li>
                                <li class="mobile-trim">
                                    <span class="highlight-primary">"Calibration"</span>
                                    <ul class="hero-list">
                                        <li>
                                            "Kubernetes automatically adds system-generated keys, which should not be flagged as drift. HelmInspect solves this with calibration"
                                        </li>
                                    </ul>
                                </li>
                                <li>
                                    <span class="highlight-primary">"Detecting Drift & Generating Reports."</span>
                                    <ul class="hero-list">
                                        <li>
                                            <span class="highlight-secondary">"CLI output"</span>
                                            " highlights all drifted configurations."
                                        </li>
                                        <li>"JSON report is automatically stored for tracking."</li>
                                        <li>
                                            "Want "
                                            <span class="highlight-secondary">"Slack alerts"</span>
                                            "? Use --slack-token and --slack-channel to get a detailed report and logs, directly for your teams!"
                                        </li>
                                    </ul>
                                </li>
                            </ul>
                        </CtaBox>
                        {scenarios}
                    </div>
                </div>
            </div>
        </section>
    }
}
