// Home page - hero, then the two scenario sections
use crate::sections::{Hero, How, Why};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Why />
        <How />
    }
}
