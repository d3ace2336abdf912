//! Interactive call screen
//!
//! Each line is a destination to search for. Searches run in the background
//! so a newer destination or `:cancel` can interrupt one still in flight.

use std::sync::Arc;

use application::{CallScreen, TaxiCallService, WorkflowError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::render;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Search for this destination; blank lines submit an empty one
    Submit(String),
    /// Open the cancel confirmation
    Cancel,
    /// Leave the session
    Quit,
}

impl Input {
    /// Classify a line typed at the prompt
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":cancel" | ":c" => Self::Cancel,
            ":quit" | ":q" => Self::Quit,
            destination => Self::Submit(destination.to_string()),
        }
    }
}

/// Answer to the cancel confirmation; `None` for anything unrecognised
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" | "예" | "네" => Some(true),
        "n" | "no" | "아니오" | "아니요" => Some(false),
        _ => None,
    }
}

/// Print every published snapshot until the controller goes away
async fn follow(service: &TaxiCallService) {
    let mut updates = service.subscribe();
    while updates.changed().await.is_ok() {
        let state = updates.borrow_and_update().clone();
        println!("\n{}\n", render::render_state(&state));
    }
}

/// Start a background search for the submitted destination
///
/// An empty destination is still handed to the controller so the
/// validation prompt is published like any other status.
fn spawn_search(screen: &mut CallScreen, destination: String) -> JoinHandle<()> {
    screen.set_destination(destination.clone());
    let service = Arc::clone(screen.service());
    tokio::spawn(async move {
        match service.request_taxi(&destination).await {
            Ok(_) | Err(WorkflowError::Superseded { .. }) => {},
            Err(e) => debug!(error = %e, "Search ended with an error"),
        }
    })
}

/// Run the interactive session on stdin
pub async fn run(mut screen: CallScreen) -> anyhow::Result<()> {
    println!("출발지: {}", screen.form().starting_address);
    println!("도착지를 입력하세요. (:cancel 호출 취소, :quit 종료)");

    let follower = {
        let service = Arc::clone(screen.service());
        tokio::spawn(async move { follow(&service).await })
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if screen.dialog().is_open() {
            match parse_answer(&line) {
                Some(true) => {
                    screen.confirm_cancel();
                    println!("호출이 취소되었습니다.");
                },
                Some(false) => screen.dismiss_cancel(),
                None => println!("y 또는 n을 입력하세요."),
            }
            continue;
        }

        match Input::parse(&line) {
            Input::Quit => break,
            Input::Cancel => {
                screen.request_cancel();
                println!("택시 호출을 취소하시겠습니까? (y/n)");
            },
            Input::Submit(destination) => {
                spawn_search(&mut screen, destination);
            },
        }
    }

    follower.abort();
    Ok(())
}
