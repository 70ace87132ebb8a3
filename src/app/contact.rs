use leptos::{ev, prelude::*, task::spawn_local};
use leptos_use::{use_document, use_event_listener};

use crate::config::SiteConfig;
use crate::contact::{ContactClient, ContactFlow, Field};
use crate::motion::RevealDirection;

use super::reveal::ScrollReveal;
use super::{use_portfolio, ScrollLock};

#[component]
pub fn Contact() -> impl IntoView {
    let profile = &use_portfolio().profile;
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let endpoint = config.contact_endpoint;
    let lock = expect_context::<ScrollLock>();

    let flow = RwSignal::new(ContactFlow::default());
    let focused = RwSignal::new(None::<Field>);

    Effect::new(move |_| {
        lock.modal.set(flow.with(|f| f.show_success()));
    });
    on_cleanup(move || {
        lock.modal.try_set(false);
    });

    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if e.key() == "Escape" {
            flow.try_update(|f| f.dismiss_success());
        }
    });

    let on_submit = move |e: ev::SubmitEvent| {
        e.prevent_default();
        let Some(submission) = flow.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = match ContactClient::new(endpoint) {
                Ok(client) => client.submit(&submission).await,
                Err(e) => Err(e),
            };
            // the section may be gone by now
            flow.try_update(|f| f.complete(result));
        });
    };

    let field_view = move |field: Field| {
        let input_class = "w-full rounded-xl border border-border bg-background px-4 py-3 text-sm outline-none transition-colors focus:border-primary";
        let wrapper_style = move || {
            format!(
                "transform: scale({}); transition: transform 0.2s ease-out;",
                if focused.get() == Some(field) { 1.02 } else { 1.0 },
            )
        };
        let value = move || flow.with(|f| f.form.get(field).to_string());
        let on_input = move |e: ev::Event| {
            flow.update(|f| f.form.set_field(field, event_target_value(&e)));
        };
        let control = if field == Field::Message {
            view! {
                <textarea
                    id=field.name()
                    name=field.name()
                    rows="5"
                    required
                    placeholder=field.placeholder()
                    class=input_class
                    prop:value=value
                    on:input=on_input
                    on:focus=move |_| focused.set(Some(field))
                    on:blur=move |_| focused.set(None)
                ></textarea>
            }
            .into_any()
        } else {
            view! {
                <input
                    id=field.name()
                    name=field.name()
                    type=field.input_type()
                    required
                    placeholder=field.placeholder()
                    class=input_class
                    prop:value=value
                    on:input=on_input
                    on:focus=move |_| focused.set(Some(field))
                    on:blur=move |_| focused.set(None)
                />
            }
            .into_any()
        };
        view! {
            <div style=wrapper_style>
                <label for=field.name() class="mb-2 block text-sm font-medium">
                    {field.label()}
                </label>
                {control}
            </div>
        }
    };

    let inputs = Field::INPUTS.into_iter().map(field_view).collect_view();
    let message = field_view(Field::Message);

    view! {
        <div class="mx-auto grid max-w-6xl gap-12 px-6 py-24 md:grid-cols-2 md:py-32">
            <ScrollReveal direction=RevealDirection::Left>
                <span class="text-xs uppercase tracking-[0.4em] text-primary">"Contact"</span>
                <h2 class="mt-2 text-4xl md:text-5xl font-black">"Let's Work Together"</h2>
                <p class="mt-6 leading-relaxed text-muted-foreground">
                    "Have a project in mind or just want to say hi? My inbox is always open."
                </p>
                <dl class="mt-8 flex flex-col gap-4 text-sm">
                    <div>
                        <dt class="uppercase tracking-widest text-muted-foreground">"Email"</dt>
                        <dd>
                            <a href=format!("mailto:{}", profile.email) class="font-semibold hover:text-primary">
                                {profile.email.clone()}
                            </a>
                        </dd>
                    </div>
                    <div>
                        <dt class="uppercase tracking-widest text-muted-foreground">"Location"</dt>
                        <dd class="font-semibold">{profile.location.clone()}</dd>
                    </div>
                </dl>
            </ScrollReveal>
            <ScrollReveal direction=RevealDirection::Right delay=0.15>
                <form
                    class="flex flex-col gap-5 rounded-2xl border border-border bg-card p-6"
                    novalidate
                    on:submit=on_submit
                >
                    <div class="grid gap-5 sm:grid-cols-2">{inputs}</div>
                    {message}
                    <input
                        type="text"
                        name="_gotcha"
                        class="hidden"
                        tabindex="-1"
                        autocomplete="off"
                        aria-hidden="true"
                        prop:value=move || flow.with(|f| f.form.honeypot.clone())
                        on:input=move |e| flow.update(|f| f.form.honeypot = event_target_value(&e))
                    />
                    <Show when=move || flow.with(|f| f.error().is_some())>
                        <p class="text-sm text-red-500" role="alert">
                            {move || flow.with(|f| f.error().unwrap_or_default().to_string())}
                        </p>
                    </Show>
                    <button
                        type="submit"
                        class="rounded-full bg-primary px-6 py-3 text-sm font-semibold text-primary-foreground transition-opacity disabled:opacity-60"
                        disabled=move || flow.with(|f| f.is_submitting())
                    >
                        {move || if flow.with(|f| f.is_submitting()) { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </ScrollReveal>
        </div>
        <Show when=move || flow.with(|f| f.show_success())>
            <div
                class="fixed inset-0 z-[150] flex items-center justify-center bg-black/60 p-6"
                role="dialog"
                aria-modal="true"
                aria-labelledby="contact-success-title"
                on:click=move |_| flow.update(|f| f.dismiss_success())
            >
                <div
                    class="max-w-sm rounded-2xl border border-border bg-background p-8 text-center shadow-xl"
                    on:click=|e| e.stop_propagation()
                >
                    <h3 id="contact-success-title" class="text-2xl font-bold">"Message sent!"</h3>
                    <p class="mt-3 text-sm text-muted-foreground">
                        "Thanks for reaching out. I'll get back to you soon."
                    </p>
                    <button
                        type="button"
                        class="mt-6 rounded-full bg-primary px-6 py-2 text-sm font-semibold text-primary-foreground"
                        on:click=move |_| flow.update(|f| f.dismiss_success())
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
