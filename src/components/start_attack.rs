//! Submit button shared by the attack forms.

use leptos::prelude::*;

/// Big red button. Disabled until the form is submittable; the click handler
/// is expected to issue exactly one attack-creation request.
#[component]
pub fn StartAttack(
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="start-attack"
            disabled=move || !active.get()
            on:click=move |_| on_click.run(())
        >
            "Start attack"
        </button>
    }
}
