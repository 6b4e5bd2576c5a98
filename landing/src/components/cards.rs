//! Card variants.

use leptos::prelude::*;

use crate::content::{Bonus, PriceConfig, Recipe, Step};

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let Recipe {
        icon,
        title,
        description,
    } = recipe;

    view! {
        <div class="recipe-card bg-white/50 p-6 rounded-2xl shadow-sm border border-stone-200">
            <h3 class="text-lg md:text-xl font-bold text-[#1b4332] mb-3 uppercase flex items-center gap-2">
                <span class="shrink-0">{icon}</span>
                " "
                {title}
            </h3>
            <p class="text-xs md:text-sm text-gray-600 leading-relaxed font-normal">{description}</p>
        </div>
    }
}

/// Bonus gift card. `number` is the 1-based position among the bonuses.
#[component]
pub fn BonusCard(bonus: Bonus, number: usize) -> impl IntoView {
    let Bonus {
        image,
        title,
        description,
    } = bonus;

    view! {
        <div class="bonus-card flex flex-col items-center bg-white rounded-[2.5rem] p-8 border-2 border-dashed border-[#2d5a27]/40 shadow-sm relative group hover:border-[#2d5a27] transition-colors">
            <span class="bonus-badge absolute -top-4 bg-[#2d5a27] text-white text-xs font-black rounded-full px-4 py-1 uppercase tracking-widest">
                {format!("Bônus {number}")}
            </span>
            <div class="mb-6 relative">
                <img
                    src=image.src
                    alt=image.alt
                    class="w-full max-w-[180px] h-auto object-contain drop-shadow-2xl group-hover:scale-105 transition-transform duration-500"
                    loading="lazy"
                />
            </div>
            <div class="text-center">
                <h3 class="text-[#2d5a27] text-lg md:text-xl font-extrabold mb-4 uppercase leading-tight tracking-tight">
                    {title}
                </h3>
                <p class="text-stone-500 text-sm md:text-base leading-relaxed font-normal">{description}</p>
            </div>
        </div>
    }
}

/// Strike-through price box.
#[component]
pub fn PriceCard(price: PriceConfig) -> impl IntoView {
    let PriceConfig {
        original,
        lead,
        current,
        note,
    } = price;

    view! {
        <div class="price-card max-w-[280px] mx-auto bg-[#f0fff4]/60 border border-[#c6f6d5] rounded-2xl p-4 my-2 shadow-sm">
            <div class="flex flex-col items-center leading-tight">
                <p class="text-red-600 line-through text-sm font-bold opacity-80">{original}</p>
                <p class="text-black font-extrabold text-sm uppercase mt-1">{lead}</p>
                <p class="text-[#2d5a27] text-4xl font-black">{current}</p>
                <p class="text-gray-500 text-[10px] leading-tight font-normal mt-2 text-center opacity-80 px-2">
                    {note}
                </p>
            </div>
        </div>
    }
}

/// Image on top, caption below.
#[component]
pub fn StepCard(step: Step) -> impl IntoView {
    let Step { image, caption } = step;

    view! {
        <div class="step-card flex flex-col bg-stone-50 rounded-[2rem] border border-stone-100 shadow-sm overflow-hidden group hover:shadow-md transition-shadow">
            <div class="w-full flex justify-center bg-stone-100 p-2">
                <img
                    src=image.src
                    alt=image.alt
                    class="w-full h-auto rounded-xl object-contain group-hover:scale-[1.02] transition-transform duration-500"
                    loading="lazy"
                />
            </div>
            <div class="p-8 flex-grow flex items-center justify-center text-center">
                <p class="text-base md:text-lg text-stone-700 leading-relaxed font-medium">{caption}</p>
            </div>
        </div>
    }
}
