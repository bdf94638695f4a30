use dioxus::prelude::*;

use crate::domain::appointment::Appointment;
use crate::domain::filter::filter_appointments;
use crate::services::AppointmentService;

const COLUMNS: [&str; 7] = [
    "First Name",
    "Last Name",
    "Mobile Number",
    "Email",
    "Service(s)",
    "Date",
    "Time",
];

#[component]
pub fn AppointmentsView() -> Element {
    let mut appointments = use_signal(|| Vec::<Appointment>::new());
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(|| String::new());
    let mut selected_date = use_signal(|| String::new());

    // One fetch on mount; the loading flag flips exactly once.
    use_future(move || async move {
        let data = AppointmentService::new().load().await;
        appointments.set(data);
        loading.set(false);
    });

    if *loading.read() {
        return rsx! {
            div {
                style: "display: flex; justify-content: center; align-items: center; height: 100vh;",
                div {
                    style: "color: #666; font-size: 18px;",
                    "Loading appointments..."
                }
            }
        };
    }

    // Pre-filter before the rsx! macro
    let term = search_term.read().clone();
    let date = selected_date.read().clone();
    let all = appointments.read().clone();
    let filtered = filter_appointments(&all, &term, &date);

    rsx! {
        div {
            style: "margin: 20px; font-family: Montserrat, Poppins, sans-serif;",

            h2 { "Appointments Details" }

            // Search bar and date filter
            div {
                style: "display: flex; justify-content: space-between; gap: 10px; margin-bottom: 16px;",

                div {
                    style: "display: flex; width: 45%; gap: 4px;",

                    input {
                        r#type: "text",
                        placeholder: "Search by Name or Mobile",
                        value: "{search_term}",
                        oninput: move |evt| search_term.set(evt.value()),
                        style: "flex: 1; padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                    }

                    if !search_term.read().is_empty() {
                        button {
                            onclick: move |_| search_term.set(String::new()),
                            style: "padding: 8px; background: none; border: none; cursor: pointer;",
                            "✕"
                        }
                    }
                }

                div {
                    style: "display: flex; width: 45%; gap: 4px;",

                    input {
                        r#type: "date",
                        value: "{selected_date}",
                        oninput: move |evt| selected_date.set(evt.value()),
                        style: "flex: 1; padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                    }

                    if !selected_date.read().is_empty() {
                        button {
                            onclick: move |_| selected_date.set(String::new()),
                            style: "padding: 8px; background: none; border: none; cursor: pointer;",
                            "✕"
                        }
                    }
                }
            }

            table {
                style: "width: 100%; min-width: 650px; border-collapse: collapse; background: white; box-shadow: 0 2px 8px rgba(0,0,0,0.1);",

                thead {
                    tr {
                        for column in COLUMNS {
                            th {
                                style: "padding: 12px; text-align: center; font-weight: bold; border-bottom: 2px solid #ddd;",
                                "{column}"
                            }
                        }
                    }
                }

                tbody {
                    for (index, appointment) in filtered.into_iter().enumerate() {
                        AppointmentRow {
                            key: "{appointment.id}",
                            appointment: appointment.clone(),
                            shaded: index % 2 == 0,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AppointmentRow(appointment: Appointment, shaded: bool) -> Element {
    // Alternating row shading by index
    let background = if shaded { "#f9f9f9" } else { "#ffffff" };
    let cell = "padding: 10px; text-align: center; border-bottom: 1px solid #eee;";

    let email = appointment.display_email().to_string();
    let services = appointment.display_services();
    let date = appointment.display_date();
    let time = appointment.display_time().to_string();

    rsx! {
        tr {
            style: "background-color: {background};",

            td { style: cell, "{appointment.first_name}" }
            td { style: cell, "{appointment.last_name}" }
            td { style: cell, "{appointment.mobile_number}" }
            td { style: cell, "{email}" }
            td { style: cell, "{services}" }
            td { style: cell, "{date}" }
            td { style: cell, "{time}" }
        }
    }
}
