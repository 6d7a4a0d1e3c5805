//! Shipping and contact form with inline field errors.
use crate::data::{FormErrors, FormField, OrderForm};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderFormProps {
    pub form: OrderForm,
    pub errors: FormErrors,
    pub on_input: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

const fn input_type(field: FormField) -> &'static str {
    match field {
        FormField::Email => "email",
        FormField::Phone => "tel",
        FormField::Name | FormField::Address => "text",
    }
}

const fn autocomplete(field: FormField) -> &'static str {
    match field {
        FormField::Name => "name",
        FormField::Email => "email",
        FormField::Phone => "tel",
        FormField::Address => "street-address",
    }
}

/// Map an edited control's `name` attribute and value onto a form edit.
fn field_edit(name: &str, value: String) -> Option<(FormField, String)> {
    match name.parse::<FormField>() {
        Ok(field) => Some((field, value)),
        Err(err) => {
            log::warn!("ignoring input event: {err}");
            None
        }
    }
}

fn input_callback(on_input: &Callback<(FormField, String)>) -> Callback<InputEvent> {
    let cb = on_input.clone();
    Callback::from(move |e: InputEvent| {
        let edit = if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
            field_edit(&area.name(), area.value())
        } else {
            let input: HtmlInputElement = e.target_unchecked_into();
            field_edit(&input.name(), input.value())
        };
        if let Some(edit) = edit {
            cb.emit(edit);
        }
    })
}

fn render_field(field: FormField, props: &OrderFormProps) -> Html {
    let id = format!("order-{field}");
    let error = props.errors.message(field);
    let error_id = error.as_ref().map(|_| format!("{id}-error"));
    let value = props.form.get(field).to_string();
    let invalid = error.is_some();

    let oninput = input_callback(&props.on_input);
    let control = if field == FormField::Address {
        html! {
            <textarea
                id={id.clone()}
                name={field.as_str()}
                rows="3"
                autocomplete={autocomplete(field)}
                value={value}
                aria-invalid={invalid.to_string()}
                aria-describedby={error_id.clone()}
                {oninput}
            />
        }
    } else {
        html! {
            <input
                id={id.clone()}
                type={input_type(field)}
                name={field.as_str()}
                autocomplete={autocomplete(field)}
                value={value}
                aria-invalid={invalid.to_string()}
                aria-describedby={error_id.clone()}
                {oninput}
            />
        }
    };

    html! {
        <div class={classes!("form-field", invalid.then_some("has-error"))}>
            <label for={id}>{ field.label() }</label>
            { control }
            { error.map(|msg| html! {
                <p id={error_id.unwrap_or_default()} class="field-error" role="alert">{ msg }</p>
            }).unwrap_or_default() }
        </div>
    }
}

#[function_component(OrderFormPanel)]
pub fn order_form_panel(props: &OrderFormProps) -> Html {
    let onsubmit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    html! {
        <section class="order-section" aria-labelledby="order-title">
            <h2 id="order-title">{ "Place Your Order" }</h2>
            <form class="order-form" novalidate=true {onsubmit}>
                { for FormField::ALL.into_iter().map(|field| render_field(field, props)) }
                <button type="submit" class="submit-order">{ "Order via Email" }</button>
            </form>
        </section>
    }
}
