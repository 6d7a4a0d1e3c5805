//! Confirmation shown after an order is handed to the mail client.
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_dismiss: Callback<()>,
}

#[function_component(SuccessBanner)]
pub fn success_banner(p: &Props) -> Html {
    let on_dismiss = {
        let cb = p.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="order-success" role="status">
            <p>
                { "Thank you! Your email app should open with your order ready to send. " }
                { "We will confirm delivery once we receive it." }
            </p>
            <button type="button" class="dismiss" onclick={on_dismiss}>{ "Dismiss" }</button>
        </div>
    }
}
