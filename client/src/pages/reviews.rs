//! Reviews page: rate the quality of peer feedback you have received.

use leptos::prelude::*;

use crate::net::types::Reputation;
use crate::state::reviews::{PendingReview, Verdict, seed_reviews};

/// Cosmetic pause between recording a rating and removing the item from
/// the visible list.
#[cfg(feature = "hydrate")]
const RATING_FEEDBACK_MS: u32 = 1_200;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    view! {
        <div class="reviews-page">
            <header class="page-header">
                <h1>"Review Management"</h1>
                <p class="page-header__subtitle">
                    "Maintain the quality of the peer-learning ecosystem through detailed feedback."
                </p>
            </header>
            <div class="reviews-page__panel">
                <ReviewFeedback/>
            </div>
        </div>
    }
}

/// Quality-assessment panel: reputation badge plus pending review rows.
#[component]
fn ReviewFeedback() -> impl IntoView {
    let pending = RwSignal::new(seed_reviews());
    let reputation = RwSignal::new(Reputation { avg: 4.88, count: 48 });
    let rating_id = RwSignal::new(None::<i64>);

    // Initial fetch on mount.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                reputation.set(crate::net::api::fetch_reputation().await);
            });
        }
    });

    let on_rate = Callback::new(move |(review_id, verdict): (i64, Verdict)| {
        if rating_id.get_untracked().is_some() {
            return;
        }
        rating_id.set(Some(review_id));

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let updated = crate::net::api::rate_review(verdict.score()).await;
                reputation.set(updated);

                // Let the "Recorded!" overlay breathe before the row leaves.
                gloo_timers::future::TimeoutFuture::new(RATING_FEEDBACK_MS).await;
                pending.update(|list| list.retain(|r| r.id != review_id));
                rating_id.set(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = verdict;
        }
    });

    view! {
        <div class="review-feedback">
            <div class="review-feedback__banner">
                <div>
                    <h2 class="review-feedback__title">"Quality Assessments"</h2>
                    <p class="review-feedback__subtitle">
                        "Review the quality of peer feedback you've received."
                    </p>
                </div>
                <div class="review-feedback__reputation">
                    <div class="review-feedback__reputation-label">"Global Reputation"</div>
                    <div class="review-feedback__reputation-value">
                        {move || format!("{:.2}", reputation.get().avg)}
                        <span class="review-feedback__reputation-scale">" / 5.0"</span>
                    </div>
                </div>
            </div>

            <div class="review-feedback__body">
                {move || {
                    let list = pending.get();
                    if list.is_empty() {
                        view! {
                            <div class="review-feedback__empty">
                                <h3>"No pending assessments"</h3>
                                <p>
                                    "You've rated all your reviewers. Great job helping the community maintain high standards!"
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        list.into_iter()
                            .map(|review| {
                                view! { <ReviewRow review=review rating_id=rating_id on_rate=on_rate/> }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// One pending review with its three verdict buttons.
#[component]
fn ReviewRow(
    review: PendingReview,
    rating_id: RwSignal<Option<i64>>,
    on_rate: Callback<(i64, Verdict)>,
) -> impl IntoView {
    let review_id = review.id;
    let is_rating = move || rating_id.get() == Some(review_id);

    let buttons = [Verdict::Superficial, Verdict::Helpful, Verdict::Insightful]
        .into_iter()
        .map(|verdict| {
            let primary = verdict == Verdict::Insightful;
            view! {
                <button
                    class="review__verdict"
                    class:review__verdict--primary=primary
                    on:click=move |_| on_rate.run((review_id, verdict))
                >
                    {verdict.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="review" class:review--recording=is_rating>
            <Show when=is_rating>
                <div class="review__recorded">"Recorded!"</div>
            </Show>
            <div class="review__who">
                <img class="review__avatar" src=review.avatar.clone() alt=review.reviewer.clone()/>
                <div>
                    <div class="review__date">"Received " {review.date.clone()}</div>
                    <h4 class="review__project">{review.project.clone()}</h4>
                    <p class="review__reviewer">"By " {review.reviewer.clone()}</p>
                </div>
            </div>
            <div class="review__actions">{buttons}</div>
        </div>
    }
}
