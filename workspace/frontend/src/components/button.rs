use yew::prelude::*;

/// Fill style of a [`Button`], following daisyUI's button modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ButtonVariant {
    /// Filled background; the emphasized style.
    #[default]
    Contained,
    Outlined,
    Text,
}

impl ButtonVariant {
    fn class(&self) -> Option<&'static str> {
        match self {
            ButtonVariant::Contained => None,
            ButtonVariant::Outlined => Some("btn-outline"),
            ButtonVariant::Text => Some("btn-ghost"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ButtonColor {
    Default,
    #[default]
    Primary,
    Secondary,
}

impl ButtonColor {
    fn class(&self) -> Option<&'static str> {
        match self {
            ButtonColor::Default => None,
            ButtonColor::Primary => Some("btn-primary"),
            ButtonColor::Secondary => Some("btn-secondary"),
        }
    }
}

/// Full class list for a button with the given presentation.
pub fn button_classes(variant: ButtonVariant, color: ButtonColor) -> Classes {
    classes!("btn", color.class(), variant.class())
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub color: ButtonColor,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button type="button" class={button_classes(props.variant, props.color)}>
            { for props.children.iter() }
        </button>
    }
}
