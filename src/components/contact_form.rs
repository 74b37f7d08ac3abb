use std::cell::RefCell;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{deliver, ContactForm, Field, GlooTransport, Submission, SubmissionState};
use crate::content::LICENSE_LINE;

/// Moves the shared form to `Sending` and hands back the request, in one
/// borrow. A second submit arriving before the next render sees `Sending`
/// and gets `None`.
fn begin_shared_submit(form: &RefCell<ContactForm>) -> Option<Submission> {
    form.borrow_mut().begin_submit()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Text,
    Tel,
    Email,
    TextArea,
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: AttrValue,
    field: Field,
    kind: InputKind,
    value: AttrValue,
    #[prop_or_default]
    placeholder: AttrValue,
    #[prop_or_default]
    required: bool,
    on_input: Callback<(Field, String)>,
}

fn field_name(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Phone => "phone",
        Field::Email => "email",
        Field::Message => "message",
        Field::Gotcha => "_gotcha",
    }
}

fn input_callback(field: Field, on_input: Callback<(Field, String)>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_input.emit((field, input.value()));
    })
}

#[function_component(FormField)]
fn form_field(props: &FieldProps) -> Html {
    let field = props.field;
    let name = field_name(field);

    let control = match props.kind {
        InputKind::TextArea => {
            let on_input = props.on_input.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                on_input.emit((field, input.value()));
            });
            html! {
                <textarea {name} rows="5" value={props.value.clone()} {oninput}
                    placeholder={props.placeholder.clone()} required={props.required} />
            }
        }
        kind => {
            let input_type = match kind {
                InputKind::Tel => "tel",
                InputKind::Email => "email",
                _ => "text",
            };
            html! {
                <input type={input_type} {name} value={props.value.clone()}
                    oninput={input_callback(field, props.on_input.clone())}
                    placeholder={props.placeholder.clone()} required={props.required} />
            }
        }
    };

    html! {
        <label class="field">
            <span class="field-label">{ props.label.clone() }</span>
            { control }
        </label>
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let redraw = use_force_update();

    let on_input = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |(field, value): (Field, String)| {
            form.borrow_mut().set_field(field, value);
            redraw.force_update();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let pending = begin_shared_submit(&form);
            redraw.force_update();
            if let Some(submission) = pending {
                let form = form.clone();
                let redraw = redraw.clone();
                spawn_local(async move {
                    let outcome = deliver(&GlooTransport, config::form_endpoint(), submission).await;
                    form.borrow_mut().finish(outcome);
                    redraw.force_update();
                });
            }
        })
    };

    let (fields, state) = {
        let form = form.borrow();
        (form.fields().clone(), form.state().clone())
    };
    let sending = state.is_sending();

    html! {
        <form class="contact-form" {onsubmit} novalidate=true>
            <input type="text" name={field_name(Field::Gotcha)} class="honeypot" tabindex="-1"
                autocomplete="off" aria-hidden="true" value={fields.gotcha.clone()}
                oninput={input_callback(Field::Gotcha, on_input.clone())} />
            <div class="field-row">
                <FormField label="Full Name" field={Field::Name} kind={InputKind::Text}
                    value={fields.name.clone()} placeholder="Jane Doe" required=true
                    on_input={on_input.clone()} />
                <FormField label="Phone" field={Field::Phone} kind={InputKind::Tel}
                    value={fields.phone.clone()} placeholder="(555) 555-5555"
                    on_input={on_input.clone()} />
            </div>
            <FormField label="Email" field={Field::Email} kind={InputKind::Email}
                value={fields.email.clone()} placeholder="you@example.com" required=true
                on_input={on_input.clone()} />
            <FormField label="Project details" field={Field::Message} kind={InputKind::TextArea}
                value={fields.message.clone()} placeholder="Tell us about your project..." required=true
                {on_input} />
            <button type="submit" class="btn-solid submit" disabled={sending}>
                { if sending { "Sending..." } else { "Send Message" } }
            </button>
            {
                match &state {
                    SubmissionState::Succeeded => html! {
                        <p class="form-status success">{ "Thanks! We'll get back to you shortly." }</p>
                    },
                    SubmissionState::Failed(err) => html! {
                        <p class="form-status error">{ err.to_string() }</p>
                    },
                    _ => html! {},
                }
            }
            <p class="license">{ LICENSE_LINE }</p>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::PostResponse;

    fn ready_form() -> RefCell<ContactForm> {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Jane".into());
        form.set_field(Field::Email, "jane@x.com".into());
        form.set_field(Field::Message, "Panel upgrade".into());
        RefCell::new(form)
    }

    #[test]
    fn back_to_back_submits_yield_one_request() {
        let form = ready_form();
        let first = begin_shared_submit(&form);
        let second = begin_shared_submit(&form);
        assert!(first.is_some());
        assert_eq!(second, None);
        assert_eq!(form.borrow().state(), &SubmissionState::Sending);
    }

    #[test]
    fn request_body_matches_the_state_transition() {
        let form = ready_form();
        let expected = form.borrow().fields().encode();
        let submission = begin_shared_submit(&form).expect("request issued");
        assert_eq!(submission.body, expected);

        form.borrow_mut().finish(Ok(PostResponse { status: 200, body: String::new() }));
        assert_eq!(form.borrow().state(), &SubmissionState::Succeeded);
        assert!(begin_shared_submit(&form).is_none(), "cleared form must not post");
    }

    #[test]
    fn honeypot_input_posts_under_its_form_name() {
        assert_eq!(field_name(Field::Gotcha), "_gotcha");
    }
}
