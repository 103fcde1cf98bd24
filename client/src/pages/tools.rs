//! Tools page: the community resource library.

use leptos::prelude::*;

use crate::net::types::{Resource, ResourceDraft, ResourceKind};
use crate::state::library::{filter_resources, normalize_url, split_tags};

#[component]
pub fn ToolsPage() -> impl IntoView {
    let resources = RwSignal::new(Vec::<Resource>::new());
    let loading = RwSignal::new(true);
    let query = RwSignal::new(String::new());
    let show_share = RwSignal::new(false);

    // Initial fetch on mount.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                resources.set(crate::net::api::fetch_resources().await);
                loading.set(false);
            });
        }
    });

    let on_like = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let _ = crate::net::api::like_resource(id).await;
                resources.set(crate::net::api::fetch_resources().await);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_share = Callback::new(move |draft: ResourceDraft| {
        show_share.set(false);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let _ = crate::net::api::create_resource(draft).await;
                resources.set(crate::net::api::fetch_resources().await);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    });

    let filtered = move || filter_resources(&resources.get(), &query.get());

    view! {
        <div class="tools-page">
            <header class="page-header tools-page__header">
                <div>
                    <h1>"Community Tool Library"</h1>
                    <p class="page-header__subtitle">
                        "A shared database of the best resources found by students."
                    </p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_share.set(true)>
                    "+ Share Resource"
                </button>
            </header>

            <div class="tools-page__search">
                <input
                    class="tools-page__search-input"
                    type="text"
                    placeholder="Search resources by name or tag (e.g. 'Pointers', 'React')..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="tools-page__spinner">"Loading resources..."</div> }
            >
                <div class="tools-page__grid">
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|resource| view! { <ResourceCard resource=resource on_like=on_like/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || show_share.get()>
                <ShareDialog
                    on_cancel=Callback::new(move |()| show_share.set(false))
                    on_share=on_share
                />
            </Show>
        </div>
    }
}

/// Icon glyph per resource kind.
fn kind_icon(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Video => "▶",
        ResourceKind::Article => "📖",
        ResourceKind::Documentation => "🔗",
    }
}

/// One resource card with like button, tags, and source link.
#[component]
fn ResourceCard(resource: Resource, on_like: Callback<i64>) -> impl IntoView {
    let id = resource.id;
    let likes = resource.likes;

    let tags = resource
        .tags
        .iter()
        .map(|tag| {
            let tag = tag.clone();
            view! { <span class="resource-card__tag">"#" {tag}</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="resource-card">
            <div class="resource-card__top">
                <span class="resource-card__icon">{kind_icon(resource.kind)}</span>
                <button class="resource-card__like" on:click=move |_| on_like.run(id)>
                    "👍 " {likes}
                </button>
            </div>
            <h3 class="resource-card__title">{resource.title.clone()}</h3>
            <p class="resource-card__author">"Shared by " <strong>{resource.author.clone()}</strong></p>
            <div class="resource-card__tags">{tags}</div>
            <a
                class="resource-card__source btn"
                href=resource.url.clone()
                target="_blank"
                rel="noopener noreferrer"
            >
                "View Source"
            </a>
        </div>
    }
}

/// Modal dialog for sharing a new resource.
#[component]
fn ShareDialog(on_cancel: Callback<()>, on_share: Callback<ResourceDraft>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let kind = RwSignal::new(ResourceKind::Video.as_str().to_owned());
    let url = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let title_value = title.get();
        let url_value = url.get();
        if title_value.trim().is_empty() || url_value.trim().is_empty() {
            return;
        }

        on_share.run(ResourceDraft {
            title: title_value.trim().to_owned(),
            kind: ResourceKind::from_form(&kind.get()),
            url: normalize_url(&url_value),
            tags: split_tags(&tags.get()),
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"Share Tool"</h2>
                    <button class="dialog__close" on:click=move |_| on_cancel.run(())>
                        "×"
                    </button>
                </div>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. Master C Memory"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        prop:value=move || kind.get()
                        on:change=move |ev| kind.set(event_target_value(&ev))
                    >
                        {[ResourceKind::Video, ResourceKind::Article, ResourceKind::Documentation]
                            .into_iter()
                            .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="dialog__label">
                    "URL"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="https://..."
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Tags (comma separated)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="C, Memory, Linux"
                        prop:value=move || tags.get()
                        on:input=move |ev| tags.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <button class="btn btn--primary dialog__submit" on:click=move |_| submit.run(())>
                    "Submit Resource"
                </button>
            </div>
        </div>
    }
}
