use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardList, CardTitle, Input,
    Label, Textarea,
};
use crate::state::{AppContext, NoteField};
use crate::theme::{apply_theme, persist_theme, Theme};
use crate::util::{format_timestamp, truncate_preview};
use icons::{Moon, Plus, Sun, Trash2};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// The single notes page: top bar with search and actions, sidebar list,
/// detail editor. Everything renders from the one controller signal.
#[component]
pub fn NotesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let controller = app_state.0.controller;
    let theme = app_state.0.theme;

    // Derived views over the store.
    let visible = Memo::new(move |_| controller.with(|c| c.visible_notes()));
    let selected = Memo::new(move |_| controller.with(|c| c.selected_note().cloned()));
    let selected_id =
        Memo::new(move |_| controller.with(|c| c.selected_id().map(str::to_string)));
    let editing = Memo::new(move |_| controller.with(|c| c.is_editing()));

    let search_term = Signal::derive(move || controller.with(|c| c.search_term().to_string()));
    let title_value =
        Signal::derive(move || selected.get().map(|n| n.title).unwrap_or_default());
    let content_value =
        Signal::derive(move || selected.get().map(|n| n.content).unwrap_or_default());
    let modified_label = Signal::derive(move || {
        selected
            .get()
            .map(|n| format_timestamp(n.last_modified))
            .unwrap_or_default()
    });

    let on_search = Callback::new(move |term: String| {
        controller.update(|c| c.set_search(term));
    });
    let on_edit_title = Callback::new(move |value: String| {
        controller.update(|c| c.edit_field(NoteField::Title, &value));
    });
    let on_edit_content = Callback::new(move |value: String| {
        controller.update(|c| c.edit_field(NoteField::Content, &value));
    });
    let on_blur_commit = move |_| controller.update(|c| c.commit_edit());
    let on_delete_selected = move |_| {
        if let Some(id) = selected_id.get_untracked() {
            controller.update(|c| c.delete_note(&id));
        }
    };

    // Theme is presentation-only; reflect it on the document and persist.
    Effect::new(move |_| {
        let t = theme.get();
        apply_theme(t);
        persist_theme(t);
    });

    // Cmd/Ctrl+N creates a note from anywhere while the page is mounted.
    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if (ev.meta_key() || ev.ctrl_key()) && ev.key().to_lowercase() == "n" {
            ev.prevent_default();
            controller.update(|c| c.create_note());
        }
    });
    on_cleanup(move || key_handle.remove());

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <header class="border-b border-border bg-card">
                <div class="mx-auto flex w-full max-w-5xl flex-col gap-3 px-4 py-3 md:flex-row md:items-center">
                    <a href="/" class="shrink-0 text-sm font-semibold">"Jotpad"</a>

                    <div class="min-w-0 flex-1 md:px-6">
                        <div class="flex items-center gap-2">
                            <span class="sr-only">"Search"</span>
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="16"
                                height="16"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                class="shrink-0 text-muted-foreground"
                                aria-hidden="true"
                            >
                                <circle cx="11" cy="11" r="8"></circle>
                                <path d="m21 21-4.3-4.3"></path>
                            </svg>

                            <Input
                                r#type="search"
                                placeholder="Search notes…"
                                value=search_term
                                on_input=on_search
                                class="h-8 max-w-md text-sm"
                            />
                        </div>
                    </div>

                    <div class="flex shrink-0 items-center gap-2">
                        <Button
                            size=ButtonSize::Sm
                            attr:title="New note (Ctrl+N)"
                            on:click=move |_| controller.update(|c| c.create_note())
                        >
                            <Plus />
                            "New note"
                        </Button>

                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            attr:title="Toggle light/dark mode"
                            on:click=move |_| theme.update(|t| *t = t.toggle())
                        >
                            <Show when=move || theme.get() == Theme::Dark fallback=|| view! { <Moon /> }>
                                <Sun />
                            </Show>
                        </Button>
                    </div>
                </div>
            </header>

            <main class="mx-auto flex w-full max-w-5xl flex-col gap-4 px-4 py-6 md:flex-row">
                <aside class="w-full shrink-0 md:w-72">
                    <Card>
                        <CardHeader>
                            <CardTitle class="text-sm">"Your notes"</CardTitle>
                            <span class="rounded-full bg-muted px-2 py-0.5 text-xs text-muted-foreground">
                                {move || visible.get().len()}
                            </span>
                        </CardHeader>

                        <CardContent class="px-2">
                            <Show
                                when=move || !visible.get().is_empty()
                                fallback=|| view! {
                                    <div class="px-2 py-4 text-sm text-muted-foreground">"No notes found."</div>
                                }
                            >
                                <CardList class="gap-1">
                                    {move || {
                                        visible
                                            .get()
                                            .into_iter()
                                            .map(|n| {
                                                let select_id = n.id.clone();
                                                let enter_id = n.id.clone();
                                                let delete_id = n.id.clone();
                                                let row_id = n.id.clone();
                                                let preview = truncate_preview(&n.content);

                                                let title_view = if n.title.is_empty() {
                                                    view! { <i class="text-muted-foreground">"Untitled"</i> }
                                                        .into_any()
                                                } else {
                                                    view! { <span>{n.title.clone()}</span> }.into_any()
                                                };

                                                let row_class = move || {
                                                    let base = "group flex w-full cursor-pointer items-center gap-2 rounded-md px-2 py-2 transition-colors hover:bg-accent/50";
                                                    if selected_id.get().as_deref() == Some(row_id.as_str()) {
                                                        format!("{base} bg-accent")
                                                    } else {
                                                        base.to_string()
                                                    }
                                                };

                                                view! {
                                                    <li
                                                        class=row_class
                                                        tabindex="0"
                                                        role="option"
                                                        on:click=move |_| controller.update(|c| c.select_note(select_id.clone()))
                                                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                            if ev.key() == "Enter" {
                                                                controller.update(|c| c.select_note(enter_id.clone()));
                                                            }
                                                        }
                                                    >
                                                        <div class="min-w-0 flex-1">
                                                            <div class="truncate text-sm font-medium">
                                                                {title_view}
                                                            </div>
                                                            <div class="min-h-[1rem] truncate text-xs text-muted-foreground">
                                                                {preview}
                                                            </div>
                                                        </div>

                                                        <Button
                                                            variant=ButtonVariant::Ghost
                                                            size=ButtonSize::Icon
                                                            class="h-7 w-7 text-muted-foreground opacity-0 transition-opacity group-hover:opacity-100 focus-visible:opacity-100"
                                                            attr:title="Delete note"
                                                            on:click=move |ev: web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                controller.update(|c| c.delete_note(&delete_id));
                                                            }
                                                        >
                                                            <Trash2 />
                                                        </Button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </CardList>
                            </Show>
                        </CardContent>
                    </Card>
                </aside>

                <section class="min-w-0 flex-1">
                    <Show
                        when=move || selected.get().is_some()
                        fallback=|| view! {
                            <Card>
                                <CardContent class="py-12 text-center text-sm text-muted-foreground">
                                    "Select a note or create a new one."
                                </CardContent>
                            </Card>
                        }
                    >
                        <Card>
                            <CardContent>
                                <form
                                    class="flex flex-col gap-3"
                                    autocomplete="off"
                                    on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()
                                >
                                    <Label html_for="note-title" class="sr-only">"Note title"</Label>
                                    <Input
                                        id="note-title"
                                        placeholder="Title"
                                        maxlength=60
                                        required=true
                                        value=title_value
                                        on_input=on_edit_title
                                        on:blur=on_blur_commit
                                        class="text-base font-medium"
                                    />

                                    <Label html_for="note-content" class="sr-only">"Note content"</Label>
                                    <Textarea
                                        id="note-content"
                                        placeholder="Write your note here…"
                                        rows=14
                                        required=true
                                        value=content_value
                                        on_input=on_edit_content
                                        on:blur=on_blur_commit
                                    />

                                    <div class="flex items-center justify-between">
                                        <span class="text-xs text-muted-foreground">
                                            {move || modified_label.get()}
                                            <Show when=move || editing.get() fallback=|| ().into_view()>
                                                <span class="ml-2">"· editing"</span>
                                            </Show>
                                        </span>

                                        <Button
                                            variant=ButtonVariant::Destructive
                                            size=ButtonSize::Sm
                                            attr:r#type="button"
                                            attr:title="Delete note"
                                            on:click=on_delete_selected
                                        >
                                            <Trash2 />
                                            "Delete"
                                        </Button>
                                    </div>
                                </form>
                            </CardContent>
                        </Card>
                    </Show>
                </section>
            </main>
        </div>
    }
}
