use leptos::prelude::*;

/// Click-to-copy shell command.
#[component]
pub fn CommandBox(copy_text: &'static str, children: Children) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(copy_text);
            if copied.get_untracked() {
                return;
            }
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(1500),
            );
        }
    };

    view! {
        <div class="command-box" on:click=copy>
            <p class="code-paragraph">{children()}</p>
            <span class="command-box-icon">
                {move || if copied.get() { "copied" } else { "copy" }}
            </span>
        </div>
    }
}
