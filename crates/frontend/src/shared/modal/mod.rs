use contracts::shared::notice::Notice;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// The panel's single notice surface.
///
/// Renders nothing while `notice` is `None`. Overlay click, the close button
/// and Escape all call `on_close`.
#[component]
pub fn NoticeModal(
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_close: Callback<()>,
) -> impl IntoView {
    // Escape closes; the listener lives as long as the page
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                on_close.run(());
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        {move || notice.get().map(|current| view! {
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=stop_propagation>
                    <div class="modal-header">
                        <h2 class="modal-title">{current.title}</h2>
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body modal-body--lines">{current.body}</div>
                </div>
            </div>
        })}
    }
}
