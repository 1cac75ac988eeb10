use crate::icons::{ICON_CHECK, Icon, plan_icon};
use leptos::prelude::*;
use reelforge_core::catalog::{PRICING_PERKS, PRICING_PLANS, TRUST_BADGES};
use reelforge_core::types::PricingPlan;

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="section section-dim">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Simple, Transparent Pricing"</h2>
                    <p class="section-description">
                        "Choose the perfect plan for your video production needs"
                    </p>
                </div>
                <div class="pricing-grid">
                    {PRICING_PLANS
                        .iter()
                        .map(|plan| view! { <PlanCard plan=*plan /> })
                        .collect_view()}
                </div>
                <div class="pricing-info">
                    <p class="pricing-perks">{PRICING_PERKS.join(" • ")}</p>
                    <div class="pricing-trust">
                        {TRUST_BADGES
                            .iter()
                            .map(|badge| view! { <span>{format!("✓ {}", badge)}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    view! {
        <article class=plan_card_class(&plan)>
            {plan.popular.then(|| view! { <span class="plan-ribbon">"Most Popular"</span> })}
            <header class="plan-header">
                <div class="plan-icon">
                    <Icon path=plan_icon(plan.icon) size="24" />
                </div>
                <h3 class="plan-name">{plan.name}</h3>
                <p class="card-description">{plan.description}</p>
                <div class="plan-price">
                    <span class="plan-amount">{plan.price_label()}</span>
                    <span class="plan-period">"/month"</span>
                </div>
            </header>
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="plan-feature">
                                <Icon path=ICON_CHECK size="16" class="plan-check" />
                                <span>{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class=plan_button_class(&plan)>"Get Started"</button>
        </article>
    }
}

fn plan_card_class(plan: &PricingPlan) -> &'static str {
    if plan.popular { "card plan-card plan-popular" } else { "card plan-card" }
}

fn plan_button_class(plan: &PricingPlan) -> &'static str {
    if plan.popular { "btn btn-gradient btn-block" } else { "btn btn-muted btn-block" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelforge_core::catalog::most_popular_plan;

    #[test]
    fn popular_plan_is_highlighted() {
        let popular = most_popular_plan().expect("one popular plan");
        assert_eq!(plan_card_class(popular), "card plan-card plan-popular");
        assert_eq!(plan_button_class(popular), "btn btn-gradient btn-block");
    }

    #[test]
    fn regular_plans_use_muted_button() {
        for plan in PRICING_PLANS.iter().filter(|p| !p.popular) {
            assert_eq!(plan_card_class(plan), "card plan-card");
            assert_eq!(plan_button_class(plan), "btn btn-muted btn-block");
        }
    }
}
