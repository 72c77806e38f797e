use leptos::prelude::*;
use scenariobox::{Deck, Entry, Visibility, visibility};

use super::{BrowserScheduler, RichText};

fn visibility_class(state: Visibility) -> &'static str {
    match state {
        Visibility::Hidden => "scenario-item is-hidden",
        Visibility::Entering => "scenario-item is-entering",
        Visibility::Settled => "scenario-item is-settled",
    }
}

/// Terminal-style box that replays a deck: entries appear one by one, the full
/// list holds for the wrap delay, then the box starts over.
///
/// The revealer lives as long as the component; unmounting stops it.
#[component]
pub fn ScenarioBox(deck: Deck) -> impl IntoView {
    let (current, set_current) = signal(None::<usize>);

    let sequence = match deck.sequence() {
        Ok(sequence) => sequence,
        Err(err) => {
            web_sys::console::error_1(&format!("[scenario] {err}").into());
            return view! { <div class="scenario-box"></div> }.into_any();
        }
    };

    let running = sequence.start(BrowserScheduler, move |event| set_current.set(Some(event.index)));
    let handle = StoredValue::new_local(Some(running));
    on_cleanup(move || {
        handle.try_update_value(|slot| {
            if let Some(running) = slot.take() {
                running.stop();
            }
        });
    });

    let items = deck
        .scenarios
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let class = move || visibility_class(visibility(index, current.get()));
            view! { <ScenarioItem entry=entry class=class /> }
        })
        .collect_view();

    view! { <div class="scenario-box">{items}</div> }.into_any()
}

#[component]
fn ScenarioItem(entry: Entry, #[prop(into)] class: Signal<&'static str>) -> impl IntoView {
    let Entry { label, command, message } = entry;
    view! {
        <div class=move || class.get()>
            <p class="hero-text">
                {label.map(|label| format!("{label} "))}
                "> "
                <RichText markup=command />
            </p>
            <p class="hero-text">
                <RichText markup=message />
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_keeps_the_base_class() {
        for state in [Visibility::Hidden, Visibility::Entering, Visibility::Settled] {
            assert!(visibility_class(state).starts_with("scenario-item "));
        }
        assert_eq!(visibility_class(Visibility::Hidden), "scenario-item is-hidden");
    }
}
