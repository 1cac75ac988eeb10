use super::nav::BrandMark;
use leptos::prelude::*;

#[component]
pub fn Footer(brand: String, copyright: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <BrandMark />
                    <span class="footer-title">{brand}</span>
                </div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
