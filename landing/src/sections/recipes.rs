use leptos::prelude::*;

use crate::components::{ActionControl, LayoutSection, RecipeCard, RichTextView};
use crate::composer::CallToAction;
use crate::content::RecipesContent;

#[component]
pub fn Recipes(content: RecipesContent, cta: Option<CallToAction>) -> impl IntoView {
    let RecipesContent {
        intro,
        recipes,
        outro,
        ..
    } = content;

    view! {
        <LayoutSection class="recipes border-y border-stone-200" background="#fcfaf6">
            <p class="text-lg md:text-xl text-center mb-12 text-gray-700 max-w-3xl mx-auto leading-relaxed">
                <RichTextView text=intro />
            </p>
            <div class="grid md:grid-cols-2 gap-5 mb-6">
                {recipes
                    .into_iter()
                    .map(|recipe| view! { <RecipeCard recipe=recipe /> })
                    .collect_view()}
            </div>
            <p class="text-base md:text-xl text-center text-gray-600 italic leading-relaxed mb-10 px-4 max-w-3xl mx-auto">
                {outro}
            </p>
            <div class="text-center flex justify-center">
                {cta.map(|cta| view! { <ActionControl text=cta.text action=cta.action /> })}
            </div>
        </LayoutSection>
    }
}
