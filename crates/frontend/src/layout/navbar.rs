use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

/// Top navigation bar: brand, page links, theme toggle and the profile entry.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let theme = use_theme();
    let (auth_state, _) = use_auth();

    let initial = move || {
        auth_state
            .get()
            .user
            .map(|u| {
                u.display_name()
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_else(|| "?".to_string())
            })
            .unwrap_or_default()
    };

    view! {
        <header class="navbar">
            <div class="navbar__brand" on:click=move |_| ctx.navigate(Page::Home)>
                <span class="navbar__logo">"🎓"</span>
                <span class="navbar__title">"UniMarket"</span>
            </div>

            <nav class="navbar__links">
                {Page::nav_order()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if ctx.active.get() == page {
                                        "navbar__link navbar__link--active"
                                    } else {
                                        "navbar__link"
                                    }
                                }
                                on:click=move |_| ctx.navigate(page)
                            >
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="navbar__actions">
                <button
                    type="button"
                    class="navbar__icon-button"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || if theme.is_dark() { icon("sun") } else { icon("moon") }}
                </button>
                <button
                    type="button"
                    class=move || {
                        if ctx.active.get() == Page::Profile {
                            "navbar__avatar navbar__avatar--active"
                        } else {
                            "navbar__avatar"
                        }
                    }
                    title="Profile"
                    on:click=move |_| ctx.navigate(Page::Profile)
                >
                    {initial}
                </button>
            </div>
        </header>
    }
}
