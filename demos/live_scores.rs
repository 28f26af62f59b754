use std::ops::ControlFlow;

use chrono::Utc;

use cricket_scores::{Board, CricClient, FavoritesStore, LiveFeed, Tab, REFRESH_INTERVAL};

#[tokio::main]
async fn main() -> cricket_scores::Result<()> {
    let client = CricClient::from_env()?;
    let store = FavoritesStore::new(std::env::temp_dir().join("cricket-scores"));
    let tab = match std::env::args().nth(1).as_deref() {
        Some("favorites") => Tab::Favorites,
        _ => Tab::All,
    };
    let mut board = Board::new(tab);
    // Show details for the id given as the second argument, if any.
    if let Some(id) = std::env::args().nth(2) {
        board.toggle_expanded(&id);
    }
    let feed = LiveFeed::new(client);

    let mut refreshes = 0;
    feed.run(REFRESH_INTERVAL, |result| {
        refreshes += 1;
        match result {
            Ok(snapshot) => {
                let favorites = store.load().unwrap_or_default();
                let cards = board.cards(&snapshot, &favorites, Utc::now());
                println!("Updated {}", snapshot.last_updated.format("%H:%M:%S"));
                if cards.is_empty() {
                    let empty = board.empty_state();
                    println!("{}\n{}", empty.title, empty.subtitle);
                }
                for card in cards {
                    let star = if card.is_favorite { "*" } else { " " };
                    println!(
                        "{star} [{:<9}] {} {} {} vs {} {} {}  {}",
                        card.category,
                        card.flags[0],
                        card.teams[0],
                        card.scores[0],
                        card.flags[1],
                        card.teams[1],
                        card.scores[1],
                        card.status_text
                    );
                    if let Some(odds) = &card.win_probability {
                        println!("    win: {} / {}", odds.labels[0], odds.labels[1]);
                    }
                    if let Some(details) = &card.details {
                        println!("    {} | {}", details.venue, details.match_type);
                        if let Some(toss) = &details.toss {
                            println!("    Toss: {toss}");
                        }
                        for line in &details.innings {
                            println!("    {}: {}", line.label, line.score);
                        }
                    }
                }
            }
            Err(e) => println!("Failed to fetch match data: {e} (retrying)"),
        }
        if refreshes >= 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .await;
    Ok(())
}
