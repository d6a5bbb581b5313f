use std::io::{self, BufRead, Write};

use tabled::Table;

use crate::{
    error, info, spotify::Spotify, success, transfer, types::NotFoundTableRow, warning,
    ytmusic::YtMusic,
};

pub async fn transfer(playlist_id: Option<String>) {
    let playlist_id = match playlist_id {
        Some(id) => id,
        None => prompt_playlist_id(),
    };

    let spotify = match Spotify::connect().await {
        Ok(client) => client,
        Err(e) => {
            error!(
                "Failed to load Spotify token. Please run playport auth\n Error: {}",
                e
            );
        }
    };

    let ytmusic = match YtMusic::connect().await {
        Ok(client) => client,
        Err(e) => {
            error!(
                "Failed to load YouTube Music token. Provision an OAuth token file first.\n Error: {}",
                e
            );
        }
    };

    let report = match transfer::transfer(&spotify, &ytmusic, &playlist_id).await {
        Ok(report) => report,
        Err(e) => {
            error!("Transfer aborted: {}", e);
        }
    };

    success!(
        "Transferred playlist '{}': {} added, {} duplicates skipped, {} not found, {} failed",
        report.playlist_name,
        report.added().len(),
        report.duplicates().len(),
        report.not_found().len(),
        report.failed().len()
    );

    let not_found = report.not_found();
    if !not_found.is_empty() {
        info!("Tracks not found on YouTube Music:");
        let rows: Vec<NotFoundTableRow> = not_found
            .iter()
            .map(|track| NotFoundTableRow {
                title: track.title.clone(),
                artist: track.artist.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    for (track, reason) in report.failed() {
        warning!("Failed: '{}' by '{}': {}", track.title, track.artist, reason);
    }
}

fn prompt_playlist_id() -> String {
    let stdin = io::stdin();

    loop {
        print!("Enter Spotify playlist ID: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => error!("No playlist ID given."),
            Ok(_) => {
                let id = line.trim().to_string();
                if !id.is_empty() {
                    return id;
                }
            }
            Err(e) => error!("Failed to read playlist ID: {}", e),
        }
    }
}
