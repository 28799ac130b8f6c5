use crate::render;
use calendar_client_domain::{Appointment, Calendar, DraftField};
use calendar_client_view::{CalendarView, Confirm, Deletion};
use chrono_tz::Tz;
use inquire::{InquireError, Select, Text};
use std::fmt::Display;
use tracing::debug;

/// Asks on the terminal, anything but an explicit yes declines
pub struct InquireConfirm;

impl Confirm for InquireConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        match inquire::Confirm::new(prompt).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                debug!("Confirmation prompt closed: {:?}", e);
                false
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Refresh,
    NewAppointment,
    DeleteAppointment,
    ChangeCalendar,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::Refresh,
        Action::NewAppointment,
        Action::DeleteAppointment,
        Action::ChangeCalendar,
        Action::Quit,
    ];
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Refresh => "Refresh",
            Self::NewAppointment => "New appointment",
            Self::DeleteAppointment => "Delete appointment",
            Self::ChangeCalendar => "Change calendar",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

struct CalendarChoice(Calendar);

impl Display for CalendarChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.0.name, self.0.id)
    }
}

struct EventChoice(Appointment, Tz);

impl Display for EventChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render::appointment_line(&self.0, self.1))
    }
}

/// `None` when the user pressed escape or ctrl-c
fn answer<T>(res: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match res {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn field_label(field: DraftField, required: &[DraftField]) -> String {
    if required.contains(&field) {
        format!("{} *", field)
    } else {
        field.to_string()
    }
}

fn show(view: &CalendarView, tz: Tz) {
    if let Some(calendar) = view.selected_calendar() {
        println!("\n== {} ==", calendar.name);
    }
    if let Some(error) = view.error() {
        println!("Error: {}", error);
    }
    if let Some(notice) = view.notice() {
        println!("{}", notice);
    }
    println!("{}\n", render::events_table(view.events(), tz));
}

/// Loads the calendars and lets the user pick one. `false` means quit.
async fn choose_calendar(view: &mut CalendarView) -> anyhow::Result<bool> {
    if view.list_calendars().await.is_err() {
        if let Some(error) = view.error() {
            println!("{}", error);
        }
        return Ok(false);
    }
    let choices = view
        .calendars()
        .iter()
        .cloned()
        .map(CalendarChoice)
        .collect::<Vec<_>>();
    if choices.is_empty() {
        println!("No calendars found");
        return Ok(false);
    }

    let calendar = match answer(Select::new("Calendar:", choices).prompt())? {
        Some(choice) => choice.0,
        None => return Ok(false),
    };
    let calendar_id = calendar.id.clone();
    view.select_calendar(calendar);
    // A failure stays in the banner
    let _ = view.list_events(&calendar_id).await;
    Ok(true)
}

async fn create(view: &mut CalendarView) -> anyhow::Result<()> {
    if view.open_create_form().is_err() {
        return Ok(());
    }
    let required = view.required_fields();
    for field in DraftField::ALL {
        let label = field_label(field, required);
        let current = view.draft().get(field).to_string();
        let res = Text::new(&label).with_initial_value(&current).prompt();
        match answer(res)? {
            Some(value) => view.set_field(field, value),
            None => {
                view.cancel_create_form();
                return Ok(());
            }
        }
    }
    // The banner and the kept draft are shown on the next round
    let _ = view.create_appointment().await;
    Ok(())
}

async fn delete(view: &mut CalendarView, tz: Tz) -> anyhow::Result<()> {
    let choices = view
        .events()
        .iter()
        .cloned()
        .map(|event| EventChoice(event, tz))
        .collect::<Vec<_>>();
    if choices.is_empty() {
        println!("No appointments to delete");
        return Ok(());
    }

    let event = match answer(Select::new("Appointment:", choices).prompt())? {
        Some(choice) => choice.0,
        None => return Ok(()),
    };
    let res = view.delete_appointment(&event.id, &InquireConfirm).await;
    if let Ok(Deletion::Declined) = res {
        println!("Nothing was deleted");
    }
    Ok(())
}

/// Prompt loop over the view until the user quits
pub async fn run(view: &mut CalendarView, tz: Tz) -> anyhow::Result<()> {
    if !choose_calendar(view).await? {
        return Ok(());
    }

    loop {
        show(view, tz);
        let action = match answer(Select::new("What next?", Action::ALL.to_vec()).prompt())? {
            Some(action) => action,
            None => return Ok(()),
        };
        view.dismiss();

        match action {
            Action::Refresh => {
                let _ = view.refresh().await;
            }
            Action::NewAppointment => create(view).await?,
            Action::DeleteAppointment => delete(view, tz).await?,
            Action::ChangeCalendar => {
                if !choose_calendar(view).await? {
                    return Ok(());
                }
            }
            Action::Quit => return Ok(()),
        }
    }
}
