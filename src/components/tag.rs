//! Tag chips for aggregated data rows.

use leptos::prelude::*;

use crate::api::models::SimpleTag;

/// A single colored tag chip.
#[component]
pub fn Tag(tag: SimpleTag) -> impl IntoView {
    let SimpleTag { name, color, .. } = tag;
    let style = format!(
        "background-color: rgba({}, {}, {}, {});",
        color.r,
        color.g,
        color.b,
        f32::from(color.alpha) / 255.0,
    );

    view! { <span class="tag" style=style>{name}</span> }
}

/// All tags of a row.
#[component]
pub fn TagList(tags: Vec<SimpleTag>) -> impl IntoView {
    view! {
        <div class="tag-list">
            {tags.into_iter().map(|tag| view! { <Tag tag=tag/> }).collect::<Vec<_>>()}
        </div>
    }
}
