use leptos::prelude::*;
use scenariobox::{Markup, Tone};

/// CSS class for a highlight tone; plain text gets none.
pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Plain => "",
        Tone::Primary => "highlight-primary",
        Tone::Secondary => "highlight-secondary",
        Tone::Accent => "highlight-accent",
        Tone::Dull => "highlight-dull",
    }
}

/// Render markup as toned spans, turning `\n` into `<br/>`.
#[component]
pub fn RichText(markup: Markup) -> impl IntoView {
    markup
        .segments()
        .iter()
        .map(|segment| {
            let mut parts: Vec<AnyView> = Vec::new();
            for (i, line) in segment.text.split('\n').enumerate() {
                if i > 0 {
                    parts.push(view! { <br /> }.into_any());
                }
                parts.push(line.to_owned().into_any());
            }
            view! { <span class=tone_class(segment.tone)>{parts}</span> }
        })
        .collect_view()
}
