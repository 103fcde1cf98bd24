//! Upcoming events list with team rosters and copyable discord handles.

use leptos::prelude::*;

use crate::state::events::{EventItem, EventType, seed_events};
use crate::util::clipboard;

/// How long the "Copied!" feedback stays on a handle button.
#[cfg(feature = "hydrate")]
const COPY_FEEDBACK_MS: u32 = 2_000;

/// Panel listing the seeded upcoming events.
#[component]
pub fn EventsList() -> impl IntoView {
    let copied_handle = RwSignal::new(None::<String>);

    let events = seed_events();

    view! {
        <div class="panel events-list">
            <div class="panel__header">
                <span class="panel__title">"Upcoming events"</span>
            </div>
            <div class="events-list__body">
                {events
                    .into_iter()
                    .map(|event| view! { <EventRow event=event copied_handle=copied_handle/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// One event entry: date block, badge, details, optional team roster.
#[component]
fn EventRow(event: EventItem, copied_handle: RwSignal<Option<String>>) -> impl IntoView {
    let badge = match event.kind {
        EventType::Pld => {
            Some(view! { <span class="event__badge event__badge--pld">"PLD"</span> }.into_any())
        }
        EventType::Team => {
            Some(view! { <span class="event__badge event__badge--team">"Team"</span> }.into_any())
        }
        EventType::Event => None,
    };

    let team = (!event.team.is_empty()).then(|| {
        view! {
            <div class="event__team">
                <div class="event__team-title">"Team Members"</div>
                {event
                    .team
                    .iter()
                    .map(|member| {
                        let handle = member.discord.clone();
                        let name = member.name.clone();
                        let avatar = member.avatar.clone();
                        let is_copied = {
                            let handle = handle.clone();
                            move || copied_handle.get().as_deref() == Some(handle.as_str())
                        };
                        let on_copy = {
                            let handle = handle.clone();
                            move |_| {
                                clipboard::copy_text(&handle);
                                copied_handle.set(Some(handle.clone()));

                                #[cfg(feature = "hydrate")]
                                {
                                    let handle = handle.clone();
                                    leptos::task::spawn_local(async move {
                                        gloo_timers::future::TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                                        copied_handle.update(|current| {
                                            if current.as_deref() == Some(handle.as_str()) {
                                                *current = None;
                                            }
                                        });
                                    });
                                }
                            }
                        };
                        let label = {
                            let handle = handle.clone();
                            let is_copied = is_copied.clone();
                            move || if is_copied() { "Copied!".to_owned() } else { handle.clone() }
                        };
                        view! {
                            <div class="event__member">
                                <div class="event__member-id">
                                    <img class="event__member-avatar" src=avatar alt=name.clone()/>
                                    <span class="event__member-name">{name}</span>
                                </div>
                                <button
                                    class="event__copy"
                                    class:event__copy--copied=is_copied
                                    title="Click to copy Discord handle"
                                    on:click=on_copy
                                >
                                    {label}
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
    });

    view! {
        <div class="event">
            <div class="event__main">
                <div class="event__date">
                    <span class="event__month">{event.month}</span>
                    <span class="event__day">{event.date}</span>
                </div>
                <div class="event__details">
                    <div class="event__title-row">
                        {badge}
                        <h3 class="event__title">{event.title}</h3>
                    </div>
                    <div class="event__meta">
                        <span class="event__time">{event.time}</span>
                        <span class="event__location">{event.location}</span>
                    </div>
                </div>
            </div>
            {team}
        </div>
    }
}
