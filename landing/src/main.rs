// HelmInspect Landing Page - Leptos 0.8 Edition
// Developed by the Qreater team (c)2025

mod components;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use pages::HomePage;
use sections::Nav;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="layout">
                <Nav />
                <main class="layout-content">
                    // Unknown paths land back on the single page
                    <Routes fallback=|| view! { <Redirect path="/" /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
