/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use data::init_state;
use data::records::*;
use data::types::Cli;
use data::vehicles::VehicleRepository;
use form::message::{MessageField, message_form};
use form::priority::{PriorityField, priority_form};
use form::technician::{TechnicianField, technician_form};
use form::ticket::{TicketField, ticket_form};
use form::vehicle::{VehicleField, vehicle_form};
use form::{CrudForm, Editable};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Registro", display_name = "Registro", bin_name = "registro", author = "Wavelens", version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    cli: Cli,
    #[command(subcommand)]
    cmd: MainCommands,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Technician {
        #[command(subcommand)]
        cmd: TechnicianCommands,
    },
    Priority {
        #[command(subcommand)]
        cmd: PriorityCommands,
    },
    Ticket {
        #[command(subcommand)]
        cmd: TicketCommands,
    },
    Message {
        #[arg(short, long)]
        ticket: i32,
        #[command(subcommand)]
        cmd: MessageCommands,
    },
    Vehicle {
        #[command(subcommand)]
        cmd: VehicleCommands,
    },
}

#[derive(Subcommand, Debug)]
enum TechnicianCommands {
    List,
    Show {
        id: i32,
    },
    Save {
        #[arg(long)]
        id: Option<i32>,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        salary: Option<f64>,
    },
    Delete {
        id: i32,
    },
}

#[derive(Subcommand, Debug)]
enum PriorityCommands {
    List,
    Show {
        id: i32,
    },
    Save {
        #[arg(long)]
        id: Option<i32>,
        #[arg(short, long)]
        description: Option<String>,
    },
    Delete {
        id: i32,
    },
}

#[derive(Subcommand, Debug)]
enum TicketCommands {
    List,
    Show {
        id: i32,
    },
    Save {
        #[arg(long)]
        id: Option<i32>,
        #[arg(short, long)]
        client: Option<String>,
        #[arg(short, long)]
        subject: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        priority: Option<i32>,
        #[arg(short, long)]
        technician: Option<i32>,
    },
    Delete {
        id: i32,
    },
}

#[derive(Subcommand, Debug)]
enum MessageCommands {
    List,
    Show {
        id: i32,
    },
    Save {
        #[arg(long)]
        id: Option<i32>,
        #[arg(short, long)]
        content: Option<String>,
        #[arg(short, long)]
        sender: Option<String>,
        #[arg(short, long, value_enum)]
        role: Option<Role>,
    },
    Delete {
        id: i32,
    },
}

#[derive(Subcommand, Debug)]
enum VehicleCommands {
    List,
    Show {
        id: i32,
    },
    Save {
        #[arg(long)]
        id: Option<i32>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        price: Option<f64>,
    },
    Delete {
        id: i32,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Role {
    Operator,
    Owner,
}

impl From<Role> for SenderRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Operator => SenderRole::Operator,
            Role::Owner => SenderRole::Owner,
        }
    }
}

/// One line of `list` output.
trait Row {
    fn row(&self) -> String;
}

fn id_column(id: Option<i32>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

impl Row for Technician {
    fn row(&self) -> String {
        format!("{}\t{}\t{:.2}", id_column(self.id), self.name, self.salary)
    }
}

impl Row for Priority {
    fn row(&self) -> String {
        format!("{}\t{}", id_column(self.id), self.description)
    }
}

impl Row for Ticket {
    fn row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\tpriority {}\ttechnician {}",
            id_column(self.id),
            self.date.format("%Y-%m-%d %H:%M"),
            self.client,
            self.subject,
            self.priority_id,
            self.technician_id
        )
    }
}

impl Row for Message {
    fn row(&self) -> String {
        format!(
            "{}\t{}\t{} ({:?})\t{}",
            id_column(self.id),
            self.date.format("%Y-%m-%d %H:%M"),
            self.sender_name,
            self.sender_role,
            self.content
        )
    }
}

impl Row for Vehicle {
    fn row(&self) -> String {
        format!("{}\t{}\t{:.2}", id_column(self.id), self.description, self.price)
    }
}

async fn list<R: Editable + Row>(form: &CrudForm<R>) -> Result<()> {
    let snapshot = form.loaded().await;

    if let Some(message) = snapshot.error_message {
        bail!(message);
    }

    for item in &snapshot.items {
        println!("{}", item.row());
    }

    Ok(())
}

async fn select<R: Editable>(form: &CrudForm<R>, id: i32) -> Result<()> {
    if !form.select(id).await {
        match form.snapshot().error_message {
            Some(message) => bail!(message),
            None => bail!("No record with id {}", id),
        }
    }

    Ok(())
}

async fn show<R: Editable + std::fmt::Debug>(form: &CrudForm<R>, id: i32) -> Result<()> {
    select(form, id).await?;
    println!("{:#?}", form.snapshot().draft);
    Ok(())
}

/// Loads `id` when given, applies `fields` and saves through the form.
async fn save<R: Editable + Row>(
    form: &CrudForm<R>,
    id: Option<i32>,
    fields: Vec<R::Field>,
) -> Result<()> {
    if let Some(id) = id {
        select(form, id).await?;
    }

    for field in fields {
        form.change(field);
    }

    if !form.save().await {
        bail!(form.snapshot().error_message.unwrap_or_default());
    }

    println!("Saved {}", form.snapshot().draft.row());
    Ok(())
}

async fn delete<R: Editable>(form: &CrudForm<R>, id: i32) -> Result<()> {
    select(form, id).await?;

    if !form.delete().await {
        match form.snapshot().error_message {
            Some(message) => bail!(message),
            None => bail!("No record with id {}", id),
        }
    }

    println!("Deleted {}", id);
    Ok(())
}

#[tokio::main]
pub async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.cli.log_level)
        .with_context(|| format!("Invalid log level `{}`", args.cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(cmd = ?args.cmd, "Parsed command");
    let state = init_state(args.cli).await?;
    let store = &state.store;

    match args.cmd {
        MainCommands::Technician { cmd } => {
            let form = technician_form(store);
            match cmd {
                TechnicianCommands::List => list(&form).await,
                TechnicianCommands::Show { id } => show(&form, id).await,
                TechnicianCommands::Save { id, name, salary } => {
                    let mut fields = Vec::new();
                    fields.extend(name.map(TechnicianField::Name));
                    fields.extend(salary.map(TechnicianField::Salary));
                    save(&form, id, fields).await
                }
                TechnicianCommands::Delete { id } => delete(&form, id).await,
            }
        }

        MainCommands::Priority { cmd } => {
            let form = priority_form(store);
            match cmd {
                PriorityCommands::List => list(&form).await,
                PriorityCommands::Show { id } => show(&form, id).await,
                PriorityCommands::Save { id, description } => {
                    let fields = description.map(PriorityField::Description);
                    save(&form, id, fields.into_iter().collect()).await
                }
                PriorityCommands::Delete { id } => delete(&form, id).await,
            }
        }

        MainCommands::Ticket { cmd } => {
            let form = ticket_form(store);
            match cmd {
                TicketCommands::List => list(&form).await,
                TicketCommands::Show { id } => show(&form, id).await,
                TicketCommands::Save {
                    id,
                    client,
                    subject,
                    description,
                    priority,
                    technician,
                } => {
                    let mut fields = Vec::new();
                    fields.extend(client.map(TicketField::Client));
                    fields.extend(subject.map(TicketField::Subject));
                    fields.extend(description.map(TicketField::Description));
                    fields.extend(priority.map(TicketField::PriorityId));
                    fields.extend(technician.map(TicketField::TechnicianId));
                    save(&form, id, fields).await
                }
                TicketCommands::Delete { id } => delete(&form, id).await,
            }
        }

        MainCommands::Message { ticket, cmd } => {
            let form = message_form(store, ticket);
            match cmd {
                MessageCommands::List => list(&form).await,
                MessageCommands::Show { id } => show(&form, id).await,
                MessageCommands::Save {
                    id,
                    content,
                    sender,
                    role,
                } => {
                    let mut fields = Vec::new();
                    fields.extend(content.map(MessageField::Content));
                    fields.extend(sender.map(MessageField::SenderName));
                    fields.extend(role.map(|role| MessageField::SenderRole(role.into())));
                    save(&form, id, fields).await
                }
                MessageCommands::Delete { id } => delete(&form, id).await,
            }
        }

        MainCommands::Vehicle { cmd } => {
            let form = vehicle_form(VehicleRepository::from_url(&state.cli.api_url));
            match cmd {
                VehicleCommands::List => list(&form).await,
                VehicleCommands::Show { id } => show(&form, id).await,
                VehicleCommands::Save {
                    id,
                    description,
                    price,
                } => {
                    let mut fields = Vec::new();
                    fields.extend(description.map(VehicleField::Description));
                    fields.extend(price.map(VehicleField::Price));
                    save(&form, id, fields).await
                }
                VehicleCommands::Delete { id } => delete(&form, id).await,
            }
        }
    }
}
