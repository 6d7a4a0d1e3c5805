//! Page footer with the support address.
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub support_email: AttrValue,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    html! {
        <footer>
            <p>{ "© Prickleys. Orders are confirmed by email." }</p>
            <p>
                { "Questions? " }
                <a href={format!("mailto:{}", p.support_email)}>{ p.support_email.clone() }</a>
            </p>
        </footer>
    }
}
