//! Interactive suburb lookup.
//!
//! Prompts for a suburb or postcode, lets the user pick a match, prints its
//! feed and offers to save one of its parking spots.

use dialoguer::{Input, Select};
use hotspot_client::{ApiClient, feed, search};
use hotspot_favourites::{Favourites, KeyValueStore};
use hotspot_metrics::{create_slug, is_postcode};

use crate::render;

/// Runs the interactive lookup.
///
/// # Errors
///
/// Returns an error if a prompt fails or an API request fails.
#[allow(clippy::future_not_send)]
pub async fn run<S: KeyValueStore>(
    api: &ApiClient,
    favourites: &Favourites<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Hotspot");
    println!();

    let query: String = Input::new()
        .with_prompt("Suburb or postcode")
        .interact_text()?;
    let query = query.trim();

    let postcode = if is_postcode(query) {
        query.to_string()
    } else {
        let results = search::search(api, query).await?;
        if results.is_empty() {
            println!("No matches for {query:?}.");
            return Ok(());
        }

        let labels: Vec<String> = results.iter().map(render::search_result).collect();
        let idx = Select::new()
            .with_prompt("Which one?")
            .items(&labels)
            .default(0)
            .interact()?;
        results[idx].postcode.clone()
    };

    let response = feed::get_postcode_feed(api, &postcode).await?;
    println!();
    println!(
        "[{}]",
        create_slug(&response.current.suburb, &response.current.postcode)
    );
    print!("{}", render::feed(&response));

    if response.parking_submissions.is_empty() {
        return Ok(());
    }

    let mut choices = vec!["Done".to_string()];
    choices.extend(response.parking_submissions.iter().map(|submission| {
        let mark = if favourites.is_favourite(submission.parking_id) {
            "[saved] "
        } else {
            ""
        };
        format!(
            "{mark}#{} {}",
            submission.parking_id, submission.address
        )
    }));

    let idx = Select::new()
        .with_prompt("Save or forget a spot")
        .items(&choices)
        .default(0)
        .interact()?;

    if let Some(submission) = idx
        .checked_sub(1)
        .and_then(|i| response.parking_submissions.get(i))
    {
        if favourites.toggle(submission.parking_id) {
            favourites.cache_submission(submission);
            println!("Saved #{}.", submission.parking_id);
        } else {
            println!("Removed #{}.", submission.parking_id);
        }
    }

    Ok(())
}
