use dioxus::prelude::*;

use apptly::ui::App;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    launch(App);
}
