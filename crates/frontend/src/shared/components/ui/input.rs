use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value, written on every keystroke
    value: RwSignal<String>,
    /// Input type: "text" (default), "number", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {label}
            </label>
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
