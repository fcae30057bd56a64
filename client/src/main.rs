use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use client::api::ApiClient;
use client::auth::guard;
use client::auth::session::SessionStore;
use client::auth::store::FileTokenStore;
use client::routes;
use client::{AccessDecision, nav};
use shared::types::{AppConfig, Booking, NewBooking, NewRoom, NewUser, Role};

#[derive(Parser)]
#[command(name = "roombook", version, about = "Room-booking client")]
struct Cli {
    /// Path to the TOML config file. Defaults apply when the file is absent.
    #[arg(long, default_value = "roombook.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and persist the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the signed-in identity and the views it can reach
    Whoami,
    /// List rooms open for booking
    Rooms,
    /// Book a room for a day
    Book {
        /// Room id
        #[arg(long)]
        room: String,
        /// Booking day, yyyy-mm-dd
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "")]
        subject: String,
    },
    /// List your bookings
    MyBookings,
    /// Cancel one of your bookings
    Cancel { id: String },
    /// Management commands (role-gated)
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand)]
enum AdminCommand {
    /// User administration
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Room administration
    Rooms {
        #[command(subcommand)]
        command: RoomCommand,
    },
    /// Booking administration
    Bookings {
        #[command(subcommand)]
        command: BookingCommand,
    },
}

#[derive(Subcommand)]
enum UserCommand {
    /// List all accounts
    List,
    /// Create an account
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, default_value = "User")]
        role: String,
    },
    /// Change an account's role (takes effect on their next login)
    SetRole {
        id: String,
        #[arg(long)]
        role: String,
    },
    /// Enable or disable an account
    SetActive {
        id: String,
        #[arg(long, action = clap::ArgAction::Set)]
        active: bool,
    },
    /// Delete an account
    Delete { id: String },
}

#[derive(Subcommand)]
enum RoomCommand {
    /// List every room, including deactivated ones
    List,
    /// Create a room
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        capacity: u32,
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Update a room's name, capacity and location
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        capacity: u32,
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Open or close a room for booking
    SetActive {
        id: String,
        #[arg(long, action = clap::ArgAction::Set)]
        active: bool,
    },
}

#[derive(Subcommand)]
enum BookingCommand {
    /// List every booking
    List,
    /// Approve a pending booking
    Confirm { id: String },
    /// Cancel a booking
    Cancel { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    let config = load_or_default(&cli.config)?;

    let session = SessionStore::new(FileTokenStore::new(&config.storage.token_path));
    session
        .initialize()
        .context("Failed to read the persisted session")?;

    let api = ApiClient::new(&config.api).context("Failed to build the API client")?;

    match cli.command {
        Command::Login { email, password } => login(&api, &session, &email, &password).await,
        Command::Logout => logout(&session),
        Command::Whoami => whoami(&session),
        Command::Rooms => rooms(&api, &session).await,
        Command::Book {
            room,
            date,
            subject,
        } => book(&api, &session, room, date, subject).await,
        Command::MyBookings => my_bookings(&api, &session).await,
        Command::Cancel { id } => cancel(&api, &session, &id).await,
        Command::Admin { command } => admin(&api, &session, command).await,
    }
}

fn load_or_default(path: &str) -> Result<AppConfig> {
    if Path::new(path).exists() {
        Ok(shared::config::load_config(path)?)
    } else {
        info!("No config file at {path}; using defaults");
        Ok(AppConfig::default())
    }
}

/// Navigate to a protected view. Admission yields the bearer token for the
/// API call behind the view; a redirect becomes a user-facing explanation.
fn enter(session: &SessionStore, path: &str) -> Result<String> {
    let snapshot = session.current();
    match routes::navigate(&snapshot, path) {
        AccessDecision::Admit => snapshot
            .credential()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Admitted navigation without a credential")),
        AccessDecision::RedirectTo {
            path: guard::LOGIN_PATH,
            ..
        } => {
            bail!("Not signed in; run `roombook login` first")
        }
        AccessDecision::RedirectTo { .. } => {
            warn!("Navigation to {path} denied for the current role");
            bail!("That view is not available (back to the dashboard)")
        }
    }
}

// ---------------------------------------------------------------------------
// Session commands
// ---------------------------------------------------------------------------

async fn login(api: &ApiClient, session: &SessionStore, email: &str, password: &str) -> Result<()> {
    let response = api.login(email, password).await.context("Login failed")?;

    session
        .login(&response.token)
        .context("Failed to persist the session")?;

    match session.identity() {
        Some(identity) => {
            println!("Signed in as {identity}");
            Ok(())
        }
        // The backend accepted the credentials but issued a token this
        // client cannot use; already logged by the session store.
        None => bail!("The backend returned an unusable token"),
    }
}

fn logout(session: &SessionStore) -> Result<()> {
    session.logout().context("Failed to clear the session")?;
    println!("Signed out");
    Ok(())
}

fn whoami(session: &SessionStore) -> Result<()> {
    let Some(identity) = session.identity() else {
        println!("Not signed in");
        return Ok(());
    };

    println!("{identity}");
    println!("Views:");
    for item in nav::nav_items(&identity.role) {
        println!("  {:<14} {}", item.label, item.path);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Booking commands
// ---------------------------------------------------------------------------

async fn rooms(api: &ApiClient, session: &SessionStore) -> Result<()> {
    let token = enter(session, "/rooms")?;
    let rooms = api.active_rooms(&token).await?;

    if rooms.is_empty() {
        println!("No rooms available.");
        return Ok(());
    }
    for room in rooms {
        println!(
            "{}  {} - {} (capacity {})",
            room.id,
            room.name,
            room.location_label(),
            room.capacity
        );
    }
    Ok(())
}

async fn book(
    api: &ApiClient,
    session: &SessionStore,
    room: String,
    date: String,
    subject: String,
) -> Result<()> {
    let token = enter(session, "/rooms")?;
    let booking = NewBooking {
        room_id: room,
        date,
        subject,
    };
    api.create_booking(&token, &booking)
        .await
        .context("Failed to create booking")?;
    println!("Booking created");
    Ok(())
}

async fn my_bookings(api: &ApiClient, session: &SessionStore) -> Result<()> {
    let token = enter(session, "/my-bookings")?;
    print_bookings(&api.my_bookings(&token).await?);
    Ok(())
}

async fn cancel(api: &ApiClient, session: &SessionStore, id: &str) -> Result<()> {
    let token = enter(session, "/my-bookings")?;
    api.cancel_booking(&token, id)
        .await
        .context("Failed to cancel booking")?;
    println!("Booking {id} cancelled");
    Ok(())
}

fn print_bookings(bookings: &[Booking]) {
    if bookings.is_empty() {
        println!("No bookings found.");
        return;
    }
    for b in bookings {
        println!(
            "{}  {:<30} {} → {}  [{}]",
            b.id,
            b.subject.as_deref().unwrap_or("(no subject)"),
            b.start,
            b.end,
            b.status
        );
    }
}

// ---------------------------------------------------------------------------
// Management commands
// ---------------------------------------------------------------------------

async fn admin(api: &ApiClient, session: &SessionStore, command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::Users { command } => {
            let token = enter(session, "/admin/users")?;
            match command {
                UserCommand::List => {
                    for user in api.users(&token).await? {
                        println!(
                            "{}  {:<24} {:<28} {:<8} {}",
                            user.id,
                            user.full_name(),
                            user.email,
                            user.role,
                            if user.is_active { "active" } else { "inactive" }
                        );
                    }
                    Ok(())
                }
                UserCommand::Create {
                    email,
                    password,
                    first_name,
                    last_name,
                    role,
                } => {
                    let user = NewUser {
                        email,
                        password,
                        first_name,
                        last_name,
                        role: Role::parse(&role),
                    };
                    let created = api.create_user(&token, &user).await?;
                    println!("Created user {} ({})", created.email, created.id);
                    Ok(())
                }
                UserCommand::SetRole { id, role } => {
                    api.set_user_role(&token, &id, &Role::parse(&role)).await?;
                    println!("Role updated (takes effect on their next login)");
                    Ok(())
                }
                UserCommand::SetActive { id, active } => {
                    api.set_user_active(&token, &id, active).await?;
                    println!("User {id} {}", if active { "activated" } else { "deactivated" });
                    Ok(())
                }
                UserCommand::Delete { id } => {
                    api.delete_user(&token, &id).await?;
                    println!("User {id} deleted");
                    Ok(())
                }
            }
        }
        AdminCommand::Rooms { command } => {
            let token = enter(session, "/admin/rooms")?;
            match command {
                RoomCommand::List => {
                    for room in api.all_rooms(&token).await? {
                        println!(
                            "{}  {:<20} {:<20} capacity {:<4} {}",
                            room.id,
                            room.name,
                            room.location_label(),
                            room.capacity,
                            if room.is_active { "active" } else { "inactive" }
                        );
                    }
                    Ok(())
                }
                RoomCommand::Create {
                    name,
                    capacity,
                    location,
                } => {
                    let room = NewRoom {
                        name,
                        capacity,
                        location,
                    };
                    let created = api.create_room(&token, &room).await?;
                    println!("Created room {} ({})", created.name, created.id);
                    Ok(())
                }
                RoomCommand::Update {
                    id,
                    name,
                    capacity,
                    location,
                } => {
                    let room = NewRoom {
                        name,
                        capacity,
                        location,
                    };
                    let updated = api.update_room(&token, &id, &room).await?;
                    println!("Updated room {}", updated.name);
                    Ok(())
                }
                RoomCommand::SetActive { id, active } => {
                    api.set_room_active(&token, &id, active).await?;
                    println!("Room {id} {}", if active { "activated" } else { "deactivated" });
                    Ok(())
                }
            }
        }
        AdminCommand::Bookings { command } => {
            let token = enter(session, "/admin/bookings")?;
            match command {
                BookingCommand::List => {
                    print_bookings(&api.all_bookings(&token).await?);
                    Ok(())
                }
                BookingCommand::Confirm { id } => {
                    api.confirm_booking(&token, &id).await?;
                    println!("Booking {id} confirmed");
                    Ok(())
                }
                BookingCommand::Cancel { id } => {
                    api.cancel_booking(&token, &id).await?;
                    println!("Booking {id} cancelled");
                    Ok(())
                }
            }
        }
    }
}
