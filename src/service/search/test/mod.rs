use std::time::Duration;

use crate::{
    error::AppError,
    model::mod_database::{ModDatabase, UNKNOWN_GAME},
    service::search::{filter_entries, ModSearchService},
    startup::setup_reqwest_client,
};
use test_utils::{builder::TestBuilder, error::TestError, fixture::mod_database};

fn fixture_entries() -> ModDatabase {
    serde_json::from_str(&mod_database::ps3_game_mods()).unwrap()
}

/// Tests matching against names and descriptions regardless of case.
///
/// "zombies" appears in one entry's name and in another's description.
///
/// Expected: both entries, in database order
#[test]
fn matches_name_or_description_ignoring_case() {
    let matches = filter_entries(fixture_entries().mods, "ZoMbIeS");

    let names: Vec<_> = matches.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Black Ops Plus", "Zombies Menu"]);
}

/// Tests a query that matches nothing.
///
/// Expected: empty result
#[test]
fn unmatched_query_is_empty() {
    assert!(filter_entries(fixture_entries().mods, "minecraft").is_empty());
}

/// Tests a query with surrounding whitespace.
///
/// "Trainer" ends the only matching name, so a trailing space cannot match.
///
/// Expected: whitespace is part of the query
#[test]
fn matches_query_as_given() {
    assert!(filter_entries(fixture_entries().mods, "  trainer ").is_empty());
    assert!(filter_entries(fixture_entries().mods, "   ").is_empty());

    let matches = filter_entries(fixture_entries().mods, "game trainer");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Unlisted Game Trainer");
}

/// Tests a full search over HTTP, including game title resolution.
///
/// Expected: hits with titles from the category list, and "Unknown Game"
/// for a category missing from it
#[tokio::test]
async fn resolves_game_titles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route("/PS3/game-mods.json", 200, mod_database::ps3_game_mods())
        .with_route("/categories.json", 200, mod_database::categories())
        .build()
        .await?;
    let client = setup_reqwest_client(Duration::from_secs(5)).unwrap();
    let service =
        ModSearchService::new(&client).with_categories_url(test.url("/categories.json")?.as_str());

    let hits = service
        .search_at(test.url("/PS3/game-mods.json")?.as_str(), "menu")
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].game_title, "Call of Duty: Black Ops");
    assert_eq!(hits[0].entry.download_files.len(), 2);

    let hits = service
        .search_at(test.url("/PS3/game-mods.json")?.as_str(), "trainer")
        .await
        .unwrap();
    assert_eq!(hits[0].game_title, UNKNOWN_GAME);

    Ok(())
}

/// Tests that the category list is not fetched when nothing matched.
///
/// The stub has no categories route, so fetching it would fail.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn skips_categories_without_matches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route("/PS3/homebrew.json", 200, r#"{"Mods":[]}"#)
        .build()
        .await?;
    let client = setup_reqwest_client(Duration::from_secs(5)).unwrap();
    let service =
        ModSearchService::new(&client).with_categories_url(test.url("/categories.json")?.as_str());

    let hits = service
        .search_at(test.url("/PS3/homebrew.json")?.as_str(), "anything")
        .await
        .unwrap();

    assert!(hits.is_empty());

    Ok(())
}

/// Tests a database host that is down.
///
/// Expected: Err(AppError::UpstreamStatus { status: 503 })
#[tokio::test]
async fn upstream_error_is_reported() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route("/XBOX360/plugins.json", 503, "")
        .build()
        .await?;
    let client = setup_reqwest_client(Duration::from_secs(5)).unwrap();
    let service = ModSearchService::new(&client);

    let result = service
        .search_at(test.url("/XBOX360/plugins.json")?.as_str(), "xbdm")
        .await;

    assert!(matches!(
        result,
        Err(AppError::UpstreamStatus { status: 503, .. })
    ));

    Ok(())
}

/// Tests a database file that is not valid JSON.
///
/// Expected: Err(AppError::JsonErr)
#[tokio::test]
async fn malformed_database_is_reported() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route("/PS3/game-mods.json", 200, "<html>rate limited</html>")
        .build()
        .await?;
    let client = setup_reqwest_client(Duration::from_secs(5)).unwrap();
    let service = ModSearchService::new(&client);

    let result = service
        .search_at(test.url("/PS3/game-mods.json")?.as_str(), "menu")
        .await;

    assert!(matches!(result, Err(AppError::JsonErr(_))));

    Ok(())
}
