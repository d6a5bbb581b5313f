use tokio::time::sleep;

use crate::{
    transfer::{ADD_COOLDOWN, LibraryIndex, MusicDestination},
    types::{SourceTrack, TransferOutcome},
    utils, warning,
};

/// Resolves one source track against the destination catalog.
///
/// Searches for `"{title} {artist}"` and walks the candidates in the order
/// the destination returned them, taking the first one whose id is not yet
/// in the library index. That candidate is added to the destination playlist
/// and marked in the index before the outcome is returned. Candidates
/// without a usable id are skipped with a warning; a list that is exhausted
/// without a fresh id becomes `SkippedDuplicate` and nothing is mutated.
///
/// Search or add failures terminate this track only: the error is captured
/// in the `Failed` outcome and never retried here.
pub async fn resolve<D>(
    dest: &D,
    playlist_id: &str,
    track: SourceTrack,
    index: &mut LibraryIndex,
) -> TransferOutcome
where
    D: MusicDestination + ?Sized,
{
    let query = utils::search_query(&track);

    let candidates = match dest.search(&query).await {
        Ok(candidates) => candidates,
        Err(e) => {
            return TransferOutcome::Failed {
                track,
                reason: e.to_string(),
            };
        }
    };

    if candidates.is_empty() {
        return TransferOutcome::NotFound { track };
    }

    for candidate in candidates {
        let Some(video_id) = candidate.video_id else {
            warning!(
                "Unexpected search result format for '{}' by '{}'. Skipping candidate.",
                track.title,
                track.artist
            );
            continue;
        };

        if index.contains(&video_id) {
            continue;
        }

        if let Err(e) = dest
            .add_playlist_items(playlist_id, std::slice::from_ref(&video_id))
            .await
        {
            return TransferOutcome::Failed {
                track,
                reason: e.to_string(),
            };
        }

        index.mark_added(video_id.clone());

        // Courtesy pause towards the destination quota after every mutation.
        sleep(ADD_COOLDOWN).await;

        return TransferOutcome::Added { track, video_id };
    }

    TransferOutcome::SkippedDuplicate { track }
}
