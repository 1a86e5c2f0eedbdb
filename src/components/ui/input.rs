use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Single-line text input, one-way bound: the store owns the value, edits
/// flow out through `on_input`.
///
/// NOTE: We intentionally avoid `bind:value=...` here because Leptos binding
/// APIs/macros have changed across versions, and Trunk builds for wasm32 in
/// CI. This manual wiring is stable.
#[component]
pub fn Input(
    // Styling
    #[prop(into, optional)] class: String,

    // Common HTML attributes
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] maxlength: Option<u32>,
    #[prop(optional)] required: bool,

    // One-way binding
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,

    // Ref for direct DOM access
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm",
        "focus-visible:border-ring focus-visible:ring-ring/50",
        "focus-visible:ring-2",
        class
    );

    let handle_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                on_input.run(input.value());
            }
        }
    };

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            id=id
            maxlength=maxlength.map(|m| m.to_string())
            required=required
            prop:value=move || value.get()
            on:input=handle_input
            node_ref=node_ref
        />
    }
    .into_any()
}
