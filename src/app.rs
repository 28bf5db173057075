mod about;
mod contact;
mod data_list;
mod experience;
mod footer;
mod hero;
mod navbar;
mod projects;
mod recaptcha;
mod scroll;
mod section;
mod skills;
mod timeline;

pub use contact::submit_contact;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::portfolio::{portfolio, PortfolioConfig, PortfolioError};
use crate::settings::SiteSettings;
use crate::theme::Theme;

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let recaptcha_src = SiteSettings::current().recaptcha_script_url();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/@tabler/icons-webfont@3/dist/tabler-icons.min.css"
                />
                <script src=recaptcha_src async defer></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            set_theme.set(stored_theme.get_untracked());
        },
        true,
    );

    // the only place the theme changes
    let toggle_theme = Callback::new(move |_: ()| {
        let next = theme.get_untracked().toggled();
        set_theme.set(next);
        #[cfg(feature = "hydrate")]
        set_stored_theme.set(next);
        log::debug!("theme switched to {}", next.class());
    });

    let site_name = portfolio()
        .map(|c| c.personal.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Html {..} class=move || theme.get().class() />
        <Title formatter=move |title| format!("{site_name} - {title}") />
        <Meta name="color-scheme" content="light dark" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=move || view! { <HomePage theme toggle_theme /> } />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage(theme: ReadSignal<Theme>, toggle_theme: Callback<()>) -> impl IntoView {
    match portfolio() {
        Ok(config) => Either::Left(view! { <Portfolio config theme toggle_theme /> }),
        Err(err) => Either::Right(view! { <ContentError err /> }),
    }
}

#[component]
fn Portfolio(
    config: &'static PortfolioConfig,
    theme: ReadSignal<Theme>,
    toggle_theme: Callback<()>,
) -> impl IntoView {
    let personal = &config.personal;
    view! {
        <Title text=personal.title.clone() />
        <Meta name="description" content=personal.subtitle.clone() />
        <Navbar
            nav_items=config.nav_items.as_slice()
            name=personal.name.clone()
            theme
            toggle_theme
        />
        <main>
            <Hero personal />
            <About personal />
            <Skills skills=config.skills.as_slice() />
            <Projects projects=config.projects.as_slice() />
            <Experience entries=config.experience.as_slice() />
            <Contact />
        </main>
        <Footer personal />
    }
}

#[component]
fn ContentError(err: PortfolioError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <main class="flex min-h-screen items-center justify-center px-4">
            <div class="max-w-md rounded-lg border border-red/40 p-6 text-center">
                <h1 class="text-xl font-bold mb-2">"This page couldn't be built"</h1>
                <p class="text-sm text-muted">{err.to_string()}</p>
            </div>
        </main>
    }
}
