use leptos::{either::Either, html, prelude::*, task::spawn_local};
use leptos::server_fn::codec::Json;

use super::recaptcha::{sleep, Recaptcha};
use super::scroll::{scroll_to, ScrollTarget};
use super::section::Section;
use crate::contact::{
    deliver, ContactForm, ContactSubject, ContactSubmission, Field, Step, SubmissionSink,
    SubmitError, MESSAGE_MAX,
};
use crate::portfolio::SectionId;
use crate::settings::SiteSettings;

#[server(input = Json)]
pub async fn submit_contact(submission: ContactSubmission) -> Result<(), ServerFnError> {
    if let Err(errors) = submission.validate() {
        tracing::warn!(%errors, "rejected contact submission");
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::UNPROCESSABLE_ENTITY);
        }
        return Err(ServerFnError::new(errors.to_string()));
    }
    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        subject = %submission.subject,
        verified = submission.recaptcha_token.is_some(),
        "contact submission received"
    );
    Ok(())
}

/// Hands submissions to [`submit_contact`].
struct ServerSink;

impl SubmissionSink for ServerSink {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        submit_contact(submission.clone())
            .await
            .map_err(|e| match e {
                ServerFnError::ServerError(msg) => SubmitError::Rejected(msg),
                other => SubmitError::Network(other.to_string()),
            })
    }
}

fn field_value(form: &ContactForm, field: Field) -> String {
    let values = form.values();
    match field {
        Field::Name => values.name.clone(),
        Field::Email => values.email.clone(),
        Field::Subject => values.subject.map(|s| s.as_str().to_string()).unwrap_or_default(),
        Field::Message => values.message.clone(),
    }
}

fn set_field(form: &mut ContactForm, field: Field, value: String) {
    match field {
        Field::Name => form.set_name(value),
        Field::Email => form.set_email(value),
        Field::Subject => {
            if let Ok(subject) = value.parse::<ContactSubject>() {
                form.set_subject(subject);
            }
        }
        Field::Message => form.set_message(value),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let card_ref = NodeRef::<html::Div>::new();
    let step = Memo::new(move |_| form.with(|f| f.step()));
    let submitted = Memo::new(move |_| form.with(|f| f.is_submitted()));

    // keep the card in view as the step changes
    Effect::watch(
        move || step.get(),
        move |_, _, _| {
            if let Some(el) = card_ref.get_untracked() {
                scroll_to(ScrollTarget::Element(el.into()));
            }
        },
        false,
    );

    let submit = move || {
        let Some(submission) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let settings = SiteSettings::current();
        spawn_local(async move {
            let provider = Recaptcha::new(settings.recaptcha_site_key);
            let outcome = deliver(
                submission,
                &provider,
                settings.recaptcha_action,
                &ServerSink,
                sleep(settings.token_timeout),
            )
            .await;
            if let Err(e) = &outcome {
                log::error!("contact hand-off failed: {e:?}");
            }
            form.update(|f| f.finish_submit(outcome));
        });
    };

    view! {
        <Section
            id=SectionId::Contact
            title="Get In Touch"
            subtitle="Have a question or want to work together? Send me a message!"
        >
            <div class="max-w-xl mx-auto" node_ref=card_ref>
                {move || {
                    if submitted.get() {
                        Either::Left(view! { <SubmittedCard form /> })
                    } else {
                        Either::Right(view! { <FormCard form step submit /> })
                    }
                }}
            </div>
        </Section>
    }
}

#[component]
fn FormCard(
    form: RwSignal<ContactForm>,
    step: Memo<Step>,
    submit: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let submitting = Memo::new(move |_| form.with(|f| f.is_submitting()));
    let submitting = move || submitting.get();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if step.get_untracked() == Step::Review {
            submit();
        } else {
            form.update(|f| {
                f.next();
            });
        }
    };

    view! {
        <div class="rounded-xl border border-border p-6">
            <StepIndicator step />
            <form on:submit=on_submit novalidate=true class="mt-6 space-y-4">
                {move || match step.get() {
                    Step::Info => view! {
                        <TextField form field=Field::Name label="Name" placeholder="Your name" />
                        <TextField
                            form
                            field=Field::Email
                            label="Email"
                            placeholder="you@example.com"
                            input_type="email"
                        />
                    }
                    .into_any(),
                    Step::Details => view! {
                        <SubjectPicker form />
                        <MessageField form />
                    }
                    .into_any(),
                    Step::Review => view! { <ReviewSummary form /> }.into_any(),
                }}

                {move || {
                    form.with(|f| f.submit_error().map(str::to_string))
                        .map(|msg| {
                            view! {
                                <div role="alert" class="rounded-md border border-red/40 bg-red/10 px-3 py-2 text-sm text-red">
                                    {msg}
                                </div>
                            }
                        })
                }}

                <div class="flex justify-between pt-2">
                    <Show when=move || step.get() != Step::Info fallback=|| view! { <span></span> }>
                        <button
                            type="button"
                            class="inline-flex items-center gap-1 rounded-md border border-border px-4 py-2 text-sm hover:bg-accent disabled:opacity-50"
                            disabled=submitting
                            on:click=move |_| form.update(|f| f.back())
                        >
                            <i class="ti ti-arrow-left"></i>
                            "Back"
                        </button>
                    </Show>
                    <button
                        type="submit"
                        class="inline-flex items-center gap-1 rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground disabled:opacity-50"
                        disabled=submitting
                    >
                        {move || match (step.get(), submitting()) {
                            (Step::Review, true) => view! {
                                <i class="ti ti-loader-2 animate-spin"></i>
                                "Sending..."
                            }
                            .into_any(),
                            (Step::Review, false) => view! {
                                <i class="ti ti-send"></i>
                                "Send Message"
                            }
                            .into_any(),
                            _ => view! {
                                "Next"
                                <i class="ti ti-arrow-right"></i>
                            }
                            .into_any(),
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn StepIndicator(step: Memo<Step>) -> impl IntoView {
    let current = move || step.get().index();
    view! {
        <ol class="flex items-center justify-between">
            {Step::ALL
                .into_iter()
                .map(|step| {
                    let index = step.index();
                    view! {
                        <li class="flex flex-1 flex-col items-center gap-1">
                            <span class=move || {
                                let state = if index < current() {
                                    "bg-primary text-primary-foreground"
                                } else if index == current() {
                                    "border-2 border-primary text-primary"
                                } else {
                                    "border border-border text-muted"
                                };
                                format!("flex size-8 items-center justify-center rounded-full text-sm font-medium {state}")
                            }>
                                {move || {
                                    if index < current() {
                                        Either::Left(view! { <i class="ti ti-check"></i> })
                                    } else {
                                        Either::Right((index + 1).to_string())
                                    }
                                }}
                            </span>
                            <span class="text-xs text-muted">{step.label()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn FieldError(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field).map(str::to_string))
            .map(|msg| view! { <p class="text-xs text-red">{msg}</p> })
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    let invalid = move || form.with(|f| f.errors().contains(field));
    view! {
        <label class="block space-y-1.5">
            <span class="text-sm font-medium">{label}</span>
            <input
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                class="w-full rounded-md border border-border bg-transparent px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-primary aria-[invalid=true]:border-red"
                prop:value=move || form.with(|f| field_value(f, field))
                on:input=move |ev| form.update(|f| set_field(f, field, event_target_value(&ev)))
            />
            <FieldError form field />
        </label>
    }
}

#[component]
fn SubjectPicker(form: RwSignal<ContactForm>) -> impl IntoView {
    let selected = move || form.with(|f| f.values().subject);
    view! {
        <div class="space-y-1.5">
            <span class="text-sm font-medium">"Subject"</span>
            <div role="radiogroup" class="grid grid-cols-2 sm:grid-cols-3 gap-2">
                {ContactSubject::ALL
                    .into_iter()
                    .map(|subject| {
                        let active = move || selected() == Some(subject);
                        view! {
                            <button
                                type="button"
                                role="radio"
                                aria-checked=move || active().to_string()
                                class=move || {
                                    if active() {
                                        "rounded-md border border-primary bg-primary/10 px-3 py-2 text-sm text-primary"
                                    } else {
                                        "rounded-md border border-border px-3 py-2 text-sm hover:bg-accent"
                                    }
                                }
                                on:click=move |_| form.update(|f| f.set_subject(subject))
                            >
                                {subject.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <FieldError form field=Field::Subject />
        </div>
    }
}

#[component]
fn MessageField(form: RwSignal<ContactForm>) -> impl IntoView {
    let length = move || form.with(|f| f.values().message.chars().count());
    view! {
        <label class="block space-y-1.5">
            <span class="text-sm font-medium">"Message"</span>
            <textarea
                rows="5"
                placeholder="Tell me about your project or question..."
                aria-invalid=move || form.with(|f| f.errors().contains(Field::Message)).to_string()
                class="w-full resize-none rounded-md border border-border bg-transparent px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-primary aria-[invalid=true]:border-red"
                prop:value=move || form.with(|f| f.values().message.clone())
                on:input=move |ev| form.update(|f| f.set_message(event_target_value(&ev)))
            ></textarea>
            <div class="flex justify-between">
                <FieldError form field=Field::Message />
                <span class=move || {
                    if length() > MESSAGE_MAX { "ml-auto text-xs text-red" } else { "ml-auto text-xs text-muted" }
                }>{move || format!("{}/{MESSAGE_MAX}", length())}</span>
            </div>
        </label>
    }
}

#[component]
fn ReviewSummary(form: RwSignal<ContactForm>) -> impl IntoView {
    let values = form.with_untracked(|f| f.values().clone());
    let subject = values.subject.map(|s| s.label()).unwrap_or("-");
    view! {
        <dl class="space-y-3 text-sm">
            <div>
                <dt class="text-muted">"Name"</dt>
                <dd class="font-medium">{values.name}</dd>
            </div>
            <div>
                <dt class="text-muted">"Email"</dt>
                <dd class="font-medium">{values.email}</dd>
            </div>
            <div>
                <dt class="text-muted">"Subject"</dt>
                <dd class="font-medium">{subject}</dd>
            </div>
            <div>
                <dt class="text-muted">"Message"</dt>
                <dd class="whitespace-pre-wrap">{values.message}</dd>
            </div>
        </dl>
    }
}

#[component]
fn SubmittedCard(form: RwSignal<ContactForm>) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-border p-8 text-center space-y-4">
            <div class="mx-auto flex size-14 items-center justify-center rounded-full bg-green/15 text-green">
                <i class="ti ti-circle-check text-3xl"></i>
            </div>
            <h3 class="text-xl font-semibold">"Message Sent!"</h3>
            <p class="text-sm text-muted">
                "Thank you for reaching out. I'll get back to you as soon as possible."
            </p>
            <button
                class="rounded-md border border-border px-4 py-2 text-sm hover:bg-accent"
                on:click=move |_| form.update(|f| f.reset())
            >
                "Send Another Message"
            </button>
        </div>
    }
}
