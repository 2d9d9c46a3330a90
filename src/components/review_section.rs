//! Review Section Component
//!
//! Review form and the list of existing reviews. Submitted reviews are
//! logged only; nothing is stored.

use leptos::prelude::*;

use crate::catalog::reviews_for;
use crate::components::{StarPicker, StarRating};
use crate::models::initials;

#[component]
pub fn ReviewSection(recipe_id: &'static str) -> impl IntoView {
    let reviews = reviews_for(recipe_id);
    let review_count = reviews.len();

    let (new_rating, set_new_rating) = signal(5u8);
    let (new_review, set_new_review) = signal(String::new());

    let submit = move |_| {
        let text = new_review.get();
        if text.trim().is_empty() {
            return;
        }
        log::info!("[REVIEWS] Review for {} ({} stars): {}", recipe_id, new_rating.get(), text);
        set_new_review.set(String::new());
    };

    view! {
        <div class="card reviews-card">
            <div class="card-title">{format!("💬 Отзывы ({})", review_count)}</div>

            <div class="review-form">
                <h4>"Оставить отзыв"</h4>
                <div class="review-form-rating">
                    <span>"Оценка:"</span>
                    <StarPicker rating=new_rating set_rating=set_new_rating />
                </div>
                <textarea
                    placeholder="Поделитесь своим опытом приготовления..."
                    prop:value=move || new_review.get()
                    on:input=move |ev| set_new_review.set(event_target_value(&ev))
                ></textarea>
                <button class="primary-btn small" on:click=submit>"Опубликовать отзыв"</button>
            </div>

            <hr class="separator" />

            {reviews.into_iter().map(|review| {
                view! {
                    <div class="review" id=format!("review-{}", review.id)>
                        <div class="avatar">
                            <img src=review.user.avatar alt=review.user.name />
                            <span class="avatar-fallback">{initials(review.user.name)}</span>
                        </div>
                        <div class="review-body">
                            <div class="review-header">
                                <span class="review-author">{review.user.name}</span>
                                <StarRating rating=f32::from(review.rating) />
                                <span class="review-date">{review.date}</span>
                            </div>
                            <p class="review-text">{review.text}</p>
                            <div class="review-actions">
                                <button class="ghost-btn small">{format!("👍 Полезно ({})", review.helpful)}</button>
                                <button class="ghost-btn small">"💬 Ответить"</button>
                            </div>
                        </div>
                    </div>
                    <hr class="separator" />
                }
            }).collect_view()}
        </div>
    }
}
