//! 带标签的下拉选择与复选框

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct OptionSelectProps {
    pub label: &'static str,
    pub options: Vec<String>,
    pub value: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn OptionSelect(props: OptionSelectProps) -> Element {
    rsx! {
        div { class: "form-row",
            label { class: "form-label", "{props.label}" }
            select {
                class: "select",
                onchange: move |evt| props.on_change.call(evt.value()),
                for item in props.options.iter() {
                    option {
                        key: "{item}",
                        value: "{item}",
                        selected: *item == props.value,
                        "{item}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn CheckOption(
    label: &'static str,
    text: &'static str,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "form-row",
            label { class: "form-label", "{label}" }
            label { class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: checked,
                    onchange: move |evt| on_change.call(evt.checked()),
                }
                span { "{text}" }
            }
        }
    }
}
