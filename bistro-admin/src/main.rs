//! Interactive admin console for the restaurant collection
//!
//! Run: cargo run -p bistro-admin
//!
//! Reads the backend address from BISTRO_API_URL (see ClientConfig).

use anyhow::Result;
use bistro_admin::{AdminApp, Confirm, ConsoleConfirm, Draft};
use bistro_client::ClientConfig;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("bistro_admin=info,bistro_client=info")
            }),
        )
        .init();

    let config = ClientConfig::from_env();
    println!("Bistro Admin - backend at {}", config.base_url);

    let api = config.build_api()?;
    let mut app = AdminApp::new(api, ConsoleConfirm);

    app.load().await?;
    render(&app);
    print_help();

    loop {
        let line = get_input("> ");
        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line.as_str(), ""),
        };

        match command {
            "" => {}
            "q" | "quit" => break,
            "h" | "help" => print_help(),
            "l" | "list" => render(&app),
            "n" | "next" => {
                if !app.list_mut().next_page() {
                    println!("Already on the last page.");
                }
                render(&app);
            }
            "p" | "prev" => {
                if !app.list_mut().prev_page() {
                    println!("Already on the first page.");
                }
                render(&app);
            }
            "s" | "search" => {
                app.list_mut().set_search(arg);
                render(&app);
            }
            "r" | "reload" => {
                match app.load().await {
                    Ok(()) => render(&app),
                    Err(e) => report_error("Reload failed", &e),
                }
            }
            "a" | "add" => {
                let draft = app.start_add();
                run_editor(&mut app, draft).await;
                render(&app);
            }
            "e" | "edit" => match parse_id(arg) {
                Some(id) => match app.start_edit(id) {
                    Ok(draft) => {
                        run_editor(&mut app, draft).await;
                        render(&app);
                    }
                    Err(e) => report_error("Edit failed", &e),
                },
                None => println!("Usage: edit <id>"),
            },
            "d" | "delete" => match parse_id(arg) {
                Some(id) => match app.delete(id).await {
                    Ok(true) => {
                        println!("Deleted.");
                        render(&app);
                    }
                    Ok(false) => {}
                    Err(e) => report_error("Delete failed", &e),
                },
                None => println!("Usage: delete <id>"),
            },
            _ => println!("Unknown command; try 'help'."),
        }
    }

    Ok(())
}

/// Prompt for every draft field, submit, and close the editor
async fn run_editor<C: Confirm>(app: &mut AdminApp<C>, mut draft: Draft) {
    let mode = if app.editing().is_some() { "Edit" } else { "Add" };
    println!("-- {mode} restaurant (blank keeps the shown value, '-' clears) --");

    draft.name = prompt_text("Name", &draft.name);
    draft.description = prompt_text("Description", &draft.description);
    draft.area = prompt_text("Area", &draft.area);
    draft.city = prompt_text("City", &draft.city);
    draft.capacity = prompt_capacity(draft.capacity);
    draft.rating = prompt_rating(draft.rating);
    draft.cuisine = prompt_text("Cuisine", &draft.cuisine);
    draft.image = prompt_text("Image URL", &draft.image);

    match app.save(draft).await {
        Ok(()) => println!("Saved."),
        Err(e) => report_error("Save failed", &e),
    }
    app.cancel_edit();
}

fn render<C: Confirm>(app: &AdminApp<C>) {
    let list = app.list();
    let total = list.filtered().len();

    println!();
    if !list.search().trim().is_empty() {
        println!("Search \"{}\": {} match(es)", list.search(), total);
    }
    if total == 0 {
        println!("No restaurants to show.");
        return;
    }

    for r in list.page_items() {
        println!("#{} {} - {}, {}", r.id, r.name, r.city, r.area);
        println!("    {}", r.description);
        println!(
            "    Rating: {} | Capacity: {} | Cuisine: {}",
            non_zero(r.rating),
            non_zero(r.capacity),
            r.cuisine.as_deref().unwrap_or("N/A"),
        );
    }

    let prev = if list.has_prev() { "prev" } else { "----" };
    let next = if list.has_next() { "next" } else { "----" };
    println!("Page {}/{}  [{prev}] [{next}]", list.page(), list.page_count());
}

fn print_help() {
    println!("Commands: list | next | prev | search <term> | add | edit <id> | delete <id> | reload | quit");
}

fn report_error(context: &str, error: &dyn std::error::Error) {
    tracing::error!(error = %error, "{context}");
    eprintln!("{context}: {error}");
}

/// Format zero-valued numerics the way the card view does
fn non_zero<T: Default + PartialEq + ToString>(value: T) -> String {
    if value == T::default() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

fn parse_id(arg: &str) -> Option<i64> {
    arg.parse().ok()
}

fn get_input(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Text field prompt: blank keeps `current`, a lone '-' clears it
fn prompt_text(label: &str, current: &str) -> String {
    let shown = if current.is_empty() { "-" } else { current };
    let input = get_input(&format!("{label} [{shown}]: "));
    match input.as_str() {
        "" => current.to_string(),
        "-" => String::new(),
        _ => input,
    }
}

fn prompt_capacity(current: Option<i32>) -> Option<i32> {
    let shown = current.map_or("-".to_string(), |c| c.to_string());
    let input = get_input(&format!("Capacity [{shown}]: "));
    match input.as_str() {
        "" => current,
        "-" => None,
        _ => match input.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                println!("Not a number, keeping {shown}.");
                current
            }
        },
    }
}

fn prompt_rating(current: Option<f64>) -> Option<f64> {
    let shown = current.map_or("-".to_string(), |r| r.to_string());
    let input = get_input(&format!("Rating 0-5 [{shown}]: "));
    match input.as_str() {
        "" => current,
        "-" => None,
        _ => match input.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                println!("Not a number, keeping {shown}.");
                current
            }
        },
    }
}
