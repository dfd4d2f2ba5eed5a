//! Content Panel Component
//!
//! Scrollable placeholder page content.

use leptos::prelude::*;

const SECTION_COUNT: usize = 20;

#[component]
pub fn ContentPanel() -> impl IntoView {
    view! {
        <main class="content-panel">
            <div class="content-sections">
                {(1..=SECTION_COUNT)
                    .map(|i| view! {
                        <div class="content-card">
                            <h2>{format!("Content Section {}", i)}</h2>
                            <p>"This is some sample content to demonstrate scrolling."</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </main>
    }
}
