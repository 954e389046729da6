use crate::pages::Welcome;
use dioxus::prelude::*;
use keepsake_ui::Gallery;
use tracing::debug;

/// Top-level sections of the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Welcome,
    Memories,
}

impl Section {
    const ALL: [Section; 2] = [Section::Welcome, Section::Memories];

    fn label(self) -> &'static str {
        match self {
            Section::Welcome => "Welcome",
            Section::Memories => "Memories",
        }
    }
}

/// Nav bar plus every section. Sections stay mounted while hidden so the
/// gallery keeps its state; it learns whether it is on screen via `is_active`.
#[component]
pub fn PageLayout() -> Element {
    let mut current = use_signal(|| Section::Welcome);

    let section_class = move |section: Section| {
        if current() == section {
            "page-section is-active"
        } else {
            "page-section"
        }
    };

    rsx! {
        nav { class: "page-nav",
            for section in Section::ALL {
                button {
                    key: "{section.label()}",
                    class: if current() == section { "nav-link is-active" } else { "nav-link" },
                    onclick: move |_| {
                        debug!("Switching to section {:?}", section);
                        current.set(section);
                    },
                    {section.label()}
                }
            }
        }
        main { class: "page",
            div { class: section_class(Section::Welcome),
                Welcome { on_continue: move |_| current.set(Section::Memories) }
            }
            div { class: section_class(Section::Memories),
                Gallery { is_active: current() == Section::Memories }
            }
        }
    }
}
