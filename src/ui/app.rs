use dioxus::prelude::*;

use crate::ui::views::AppointmentsView;

#[component]
pub fn App() -> Element {
    rsx! {
        AppointmentsView {}
    }
}
