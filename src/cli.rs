use crate::{interactive, render};
use anyhow::anyhow;
use calendar_client_domain::{DraftField, ID};
use calendar_client_infra::{ClientContext, Config};
use calendar_client_view::{CalendarView, Confirm, Deletion, FixedAnswer, ViewError};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calendar_client")]
#[command(about = "Browse calendars and manage appointments on a calendar backend")]
pub struct Cli {
    /// Backend contract to talk to: local, ghl or generic.
    /// Overrides CALENDAR_BACKEND.
    #[arg(long)]
    backend: Option<String>,

    /// Base url of the backend. Overrides CALENDAR_API_BASE.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// GoHighLevel private integration token. Overrides GHL_PRIVATE_TOKEN.
    #[arg(long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every calendar of the backend
    Calendars,
    /// Show a single calendar
    Calendar { id: String },
    /// List the appointments of a calendar
    Events { calendar_id: String },
    /// Create an appointment in a calendar
    Create {
        #[arg(long)]
        calendar: String,
        #[arg(long)]
        title: String,
        /// Start as an RFC 3339 timestamp, e.g. 2024-01-15T10:00:00-05:00
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: Option<String>,
        /// confirmed, pending, cancelled or any status the backend knows
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        assigned_user: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        contact: Option<String>,
    },
    /// Delete an appointment after confirming
    Delete {
        calendar_id: String,
        event_id: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Browse and edit calendars with prompts. The default.
    Interactive,
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::new()?;
        if let Some(backend) = &self.backend {
            config.backend = backend.parse()?;
        }
        if let Some(url) = &self.base_url {
            config.set_base_url(url)?;
        }
        if let Some(token) = &self.token {
            config.ghl_token = Some(token.clone());
        }
        Ok(config)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.config()?;
        let tz = config.display_timezone;
        let ctx = ClientContext::create(config)?;
        let mut view = CalendarView::new(ctx);

        match self.command.unwrap_or(Commands::Interactive) {
            Commands::Calendars => {
                let res = view.list_calendars().await;
                check(&view, res)?;
                println!("{}", render::calendars_table(view.calendars()));
            }
            Commands::Calendar { id } => {
                let res = view.select_calendar_by_id(&id.parse::<ID>()?).await;
                check(&view, res)?;
                if let Some(calendar) = view.selected_calendar() {
                    println!("{}", render::calendar_details(calendar));
                }
            }
            Commands::Events { calendar_id } => {
                let calendar_id: ID = calendar_id.parse()?;
                let res = view.select_calendar_by_id(&calendar_id).await;
                check(&view, res)?;
                let res = view.list_events(&calendar_id).await;
                check(&view, res)?;
                println!("{}", render::events_table(view.events(), tz));
            }
            Commands::Create {
                calendar,
                title,
                start,
                end,
                status,
                assigned_user,
                location,
                contact,
            } => {
                let res = view.select_calendar_by_id(&calendar.parse::<ID>()?).await;
                check(&view, res)?;
                let res = view.open_create_form();
                check(&view, res)?;

                let fields = [
                    (DraftField::Title, Some(title)),
                    (DraftField::StartTime, Some(start)),
                    (DraftField::EndTime, end),
                    (DraftField::Status, status),
                    (DraftField::AssignedUserId, assigned_user),
                    (DraftField::LocationId, location),
                    (DraftField::ContactId, contact),
                ];
                for (field, value) in fields {
                    if let Some(value) = value {
                        view.set_field(field, value);
                    }
                }

                let res = view.create_appointment().await;
                let appointment = check(&view, res)?;
                match view.notice() {
                    Some(notice) => println!("{}", notice),
                    None => warn_banner(&view),
                }
                println!("{}", render::appointment_line(&appointment, tz));
            }
            Commands::Delete {
                calendar_id,
                event_id,
                yes,
            } => {
                let calendar_id: ID = calendar_id.parse()?;
                let event_id: ID = event_id.parse()?;
                let res = view.select_calendar_by_id(&calendar_id).await;
                check(&view, res)?;
                // Loaded so the prompt can name the appointment
                if view.list_events(&calendar_id).await.is_err() {
                    view.dismiss();
                }

                let confirm: Box<dyn Confirm> = if yes {
                    Box::new(FixedAnswer(true))
                } else {
                    Box::new(interactive::InquireConfirm)
                };
                let res = view.delete_appointment(&event_id, confirm.as_ref()).await;
                match check(&view, res)? {
                    Deletion::Declined => println!("Nothing was deleted"),
                    Deletion::Deleted => match view.notice() {
                        Some(notice) => println!("{}", notice),
                        None => warn_banner(&view),
                    },
                }
            }
            Commands::Interactive => interactive::run(&mut view, tz).await?,
        }

        Ok(())
    }
}

/// Turns a failed view action into the message of its error banner
pub fn check<T>(view: &CalendarView, res: Result<T, ViewError>) -> anyhow::Result<T> {
    res.map_err(|e| match view.error() {
        Some(banner) => anyhow!(banner.to_string()),
        None => anyhow!(e),
    })
}

/// A mutation went through but the re-fetch after it failed
fn warn_banner(view: &CalendarView) {
    if let Some(error) = view.error() {
        eprintln!("Warning: {}", error);
    }
}
