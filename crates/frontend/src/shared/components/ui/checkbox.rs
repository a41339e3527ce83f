use leptos::prelude::*;

/// Checkbox bound to a bool signal
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    checked: RwSignal<bool>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the checkbox element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let wrapper_class = move || {
        if is_disabled() {
            "form__checkbox-wrapper form__checkbox-wrapper--disabled"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=is_disabled
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=id>
                {label}
            </label>
        </div>
    }
}
