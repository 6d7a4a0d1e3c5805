//! Decorative animated orb shown on each product card.
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub colors: [AttrValue; 3],
    pub glow: AttrValue,
}

/// Inline style for the animated orb: a three-stop gradient with a soft glow.
#[must_use]
pub fn orb_style(colors: &[AttrValue; 3], glow: &str) -> String {
    format!(
        "background: linear-gradient(270deg, {}, {}, {}); box-shadow: 0 0 15px {glow};",
        colors[0], colors[1], colors[2]
    )
}

#[function_component(GradientOrb)]
pub fn gradient_orb(p: &Props) -> Html {
    html! {
        <div class="orb" aria-hidden="true" style={orb_style(&p.colors, &p.glow)}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_uses_all_stops_and_glow() {
        let colors = [
            AttrValue::from("#fde047"),
            AttrValue::from("#facc15"),
            AttrValue::from("#fbbf24"),
        ];
        assert_eq!(
            orb_style(&colors, "#facc15"),
            "background: linear-gradient(270deg, #fde047, #facc15, #fbbf24); box-shadow: 0 0 15px #facc15;"
        );
    }
}
