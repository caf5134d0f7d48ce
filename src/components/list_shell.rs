use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ListShellProps {
    pub title: AttrValue,
    pub loading: bool,
    pub loading_text: AttrValue,
    #[prop_or_default]
    pub empty_text: Option<AttrValue>,
    #[prop_or_default]
    pub is_empty: bool,
    #[prop_or_default]
    pub back_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Marco común de las listas seleccionables: título, cargando, volver
#[function_component(ListShell)]
pub fn list_shell(props: &ListShellProps) -> Html {
    if props.loading {
        return html! { <div class="list-loading">{props.loading_text.clone()}</div> };
    }

    let back_button = props.on_back.as_ref().map(|on_back| {
        let label = props.back_label.clone().unwrap_or_else(|| AttrValue::from("← Volver"));
        html! {
            <button class="btn-back" onclick={on_back.reform(|_| ())}>
                {label}
            </button>
        }
    });

    html! {
        <div class="selectable-list">
            <h2 class="list-title">{props.title.clone()}</h2>
            {for back_button}
            if props.is_empty {
                if let Some(text) = &props.empty_text {
                    <p class="list-empty">{text.clone()}</p>
                }
            } else {
                <ul class="list-items">
                    {props.children.clone()}
                </ul>
            }
        </div>
    }
}
