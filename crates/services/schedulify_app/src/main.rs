// File: crates/services/schedulify_app/src/main.rs
use chrono::Local;
use schedulify_app::app::{Action, App};
use schedulify_app::commands::{parse_command, Command, HELP};
use schedulify_client::SchedulerClient;
use schedulify_config::load_config;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    schedulify_common::logging::init();

    let config = load_config().expect("Failed to load config");
    let client =
        SchedulerClient::new(&config.service).expect("Failed to create scheduling service client");

    let (actions, queue) = mpsc::unbounded_channel();
    let today = Local::now().date_naive();
    let app = App::new(client, &config.ui, today, actions.clone());

    println!("Schedulify: scheduling events against {}", config.service.base_url);
    println!("{HELP}");

    // Load today's schedule before the first prompt.
    let _ = actions.send(Action::Refresh);

    let consumer = tokio::spawn(app.run(queue));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(command) => {
                if let Some(action) = command.into_action() {
                    let _ = actions.send(action);
                }
            }
            Err(message) => println!("{message}"),
        }
    }

    let _ = actions.send(Action::Quit);
    let _ = consumer.await;
}
