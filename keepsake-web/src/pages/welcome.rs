use dioxus::prelude::*;

#[component]
pub fn Welcome(on_continue: EventHandler<()>) -> Element {
    rsx! {
        section { class: "welcome",
            h1 { "Our Memories" }
            p { "A few moments worth keeping." }
            button { class: "welcome-cta", onclick: move |_| on_continue.call(()), "Open the gallery" }
        }
    }
}
