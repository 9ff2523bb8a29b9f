use dioxus::prelude::*;

use crate::content::Review;

#[derive(Props, Clone, PartialEq)]
pub struct ReviewCardProps {
    pub review: Review,
}

/// Member review with star rating.
#[component]
pub fn ReviewCard(props: ReviewCardProps) -> Element {
    let review = props.review;
    let stars = review.stars();

    rsx! {
        blockquote { class: "pp-review-card",
            p { class: "pp-review-stars", "aria-label": "{review.rating} out of 5", "{stars}" }
            p { class: "pp-review-quote", "\u{201C}{review.quote}\u{201D}" }
            footer { class: "pp-review-author", "{review.author}, {review.trip}" }
        }
    }
}
